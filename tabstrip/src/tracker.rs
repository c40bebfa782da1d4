use alloc::vec::Vec;

use crate::{TabId, TabRecord};

/// The drag gesture currently in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderGesture {
    pub tab_id: TabId,
    /// Index the tab had when the gesture started. Fixed for the whole gesture.
    pub from_index: usize,
    /// Destination reported by the most recent move.
    pub to_index: usize,
}

/// "The user moved `tab_id` from `from_index` to `to_index`": one per finished gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderCommit {
    pub tab_id: TabId,
    pub from_index: usize,
    pub to_index: usize,
}

impl From<ReorderGesture> for ReorderCommit {
    fn from(g: ReorderGesture) -> Self {
        Self {
            tab_id: g.tab_id,
            from_index: g.from_index,
            to_index: g.to_index,
        }
    }
}

/// Coalesces the move events of one drag gesture into a single [`ReorderCommit`].
///
/// Intermediate moves are applied to the rendered list right away so the strip can show live
/// feedback; the host only hears about the gesture once, when it ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReorderTracker {
    gesture: Option<ReorderGesture>,
}

impl ReorderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Option<&ReorderGesture> {
        self.gesture.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Handles one intermediate move of `tab_id` from `from_index` to `to_index`.
    ///
    /// `rendered` is reordered in place. The first move of a gesture fixes the origin index;
    /// later moves only update the destination.
    pub fn on_move(
        &mut self,
        rendered: &mut Vec<TabRecord>,
        tab_id: &str,
        from_index: usize,
        to_index: usize,
    ) {
        if !move_tab(rendered, from_index, to_index) {
            ts_warn!(
                tab_id,
                from_index,
                len = rendered.len(),
                "ReorderTracker: move origin out of bounds"
            );
        }

        if let Some(g) = self.gesture.as_mut().filter(|g| g.tab_id == tab_id) {
            g.to_index = to_index;
            return;
        }

        if self.gesture.is_some() {
            ts_warn!(
                prev = ?self.gesture.as_ref().map(|g| g.tab_id.as_str()),
                next = tab_id,
                "ReorderTracker: move for another tab, restarting gesture"
            );
        }
        ts_trace!(tab_id, from_index, "ReorderTracker: gesture started");
        self.gesture = Some(ReorderGesture {
            tab_id: tab_id.into(),
            from_index,
            to_index,
        });
    }

    /// Ends the gesture, returning its commit if any move happened.
    ///
    /// The tracker is empty afterwards either way, so calling this twice is harmless.
    pub fn on_gesture_end(&mut self) -> Option<ReorderCommit> {
        self.gesture.take().map(ReorderCommit::from)
    }

    /// Drops any in-flight gesture without producing a commit.
    pub fn reset(&mut self) {
        self.gesture = None;
    }
}

/// Removes the tab at `from_index` and reinserts it at `to_index` (clamped to the end).
///
/// Returns `false` and leaves `tabs` untouched if `from_index` is out of bounds.
pub fn move_tab(tabs: &mut Vec<TabRecord>, from_index: usize, to_index: usize) -> bool {
    if from_index >= tabs.len() {
        return false;
    }
    let tab = tabs.remove(from_index);
    let to = to_index.min(tabs.len());
    tabs.insert(to, tab);
    true
}
