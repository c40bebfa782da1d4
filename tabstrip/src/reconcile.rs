use alloc::vec::Vec;

use crate::key::IdSet;
use crate::{StripOp, TabRecord, TabStrip};

/// How the removal phase decides which previously rendered tabs to drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemovalPolicy {
    /// Remove every previously rendered tab whose id is missing from the target list.
    #[default]
    ById,
    /// Remove the previously rendered tabs past the target list's length.
    ///
    /// Only correct when removed tabs are always trailing ones. A non-trailing removal leaves
    /// the removed tab on the strip and drops a surviving one instead.
    TailTrim,
}

/// Computes the operations that turn a strip showing `previous` into one showing `target`.
///
/// The plan runs in three phases:
/// 1. removals (see [`RemovalPolicy`]), in `previous` order;
/// 2. one `UpsertAt` per target position whose rendered tab differs in id, title, favicon or
///    close visibility;
/// 3. one `Activate` per tab flagged active, in target order, so the last one wins.
///
/// Equal lists produce an empty plan. Duplicate ids and multiple active tabs are tolerated
/// (later entries win) and only logged.
pub fn plan(previous: &[TabRecord], target: &[TabRecord], policy: RemovalPolicy) -> Vec<StripOp> {
    let mut ops = Vec::new();
    if previous == target {
        return ops;
    }
    warn_on_host_violations(target);

    // What the strip holds after each planned step.
    let mut strip = distinct_last(previous);

    match policy {
        RemovalPolicy::ById => {
            let wanted: IdSet<'_> = target.iter().map(|t| t.id.as_str()).collect();
            strip.retain(|t| {
                let keep = wanted.contains(t.id.as_str());
                if !keep {
                    ops.push(StripOp::Remove(t.id.clone()));
                }
                keep
            });
        }
        RemovalPolicy::TailTrim => {
            for tab in strip.iter().skip(target.len()) {
                ops.push(StripOp::Remove(tab.id.clone()));
            }
            strip.truncate(target.len());
        }
    }

    for (index, tab) in target.iter().enumerate() {
        if let Some(cur) = strip.get_mut(index) {
            if cur.attributes() == tab.attributes() {
                *cur = tab;
                continue;
            }
        }
        if let Some(pos) = strip.iter().position(|t| t.id == tab.id) {
            strip.remove(pos);
        }
        // Only a repeated id can push `index` past the end.
        let at = index.min(strip.len());
        ops.push(StripOp::UpsertAt {
            index: at,
            tab: tab.clone(),
        });
        strip.insert(at, tab);
    }

    for tab in target.iter().filter(|t| t.active) {
        ops.push(StripOp::Activate(tab.id.clone()));
    }

    ts_trace!(
        previous = previous.len(),
        target = target.len(),
        ops = ops.len(),
        "reconcile::plan"
    );
    ops
}

/// Issues `ops` against `strip` in order, stopping at the first error.
pub fn apply<S: TabStrip + ?Sized>(strip: &mut S, ops: &[StripOp]) -> Result<(), S::Error> {
    for op in ops {
        ts_trace!(?op, "reconcile::apply");
        op.apply_to(strip)?;
    }
    Ok(())
}

/// Plans and applies in one step. Returns the number of operations issued.
pub fn reconcile<S: TabStrip + ?Sized>(
    strip: &mut S,
    previous: &[TabRecord],
    target: &[TabRecord],
    policy: RemovalPolicy,
) -> Result<usize, S::Error> {
    let ops = plan(previous, target, policy);
    apply(strip, &ops)?;
    Ok(ops.len())
}

/// What a strip shows after rendering `tabs`: one entry per id, where the last one wins both
/// content and position.
pub(crate) fn distinct_last(tabs: &[TabRecord]) -> Vec<&TabRecord> {
    let mut seen = IdSet::new();
    let mut shown: Vec<&TabRecord> = tabs
        .iter()
        .rev()
        .filter(|t| seen.insert(t.id.as_str()))
        .collect();
    shown.reverse();
    shown
}

fn warn_on_host_violations(target: &[TabRecord]) {
    let mut seen = IdSet::new();
    let mut active = 0usize;
    for tab in target {
        if !seen.insert(tab.id.as_str()) {
            ts_warn!(id = tab.id.as_str(), "tab list contains a duplicate id");
        }
        if tab.active {
            active += 1;
        }
    }
    if active > 1 {
        ts_warn!(active, "tab list flags more than one active tab; the last one wins");
    }
}
