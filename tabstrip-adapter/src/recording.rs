use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use tabstrip::{RenderOptions, StripOp, TabId, TabList, TabRecord, TabStrip, index_of};

/// Why a [`RecordingStrip`] rejected an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StripError {
    /// An upsert asked for a position past the end of the strip.
    IndexOutOfBounds { index: usize, len: usize },
    /// A remove/activate named a tab the strip does not hold.
    UnknownTab(TabId),
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "tab index {index} out of bounds (len {len})")
            }
            Self::UnknownTab(id) => write!(f, "unknown tab `{id}`"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

/// An in-memory tab strip that behaves like a real renderer and records every call.
///
/// Useful as the strip of a headless host, as a model to diff a real renderer against, and in
/// tests. Tabs keep the `active` flag of the last [`TabStrip::activate_tab`] call; upserts never
/// change activation.
#[derive(Clone, Debug)]
pub struct RecordingStrip<T = ()> {
    tabs: TabList,
    options: Option<RenderOptions<T>>,
    ops: Vec<StripOp>,
}

impl<T> Default for RecordingStrip<T> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            options: None,
            ops: Vec::new(),
        }
    }
}

impl<T> RecordingStrip<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabs in on-screen order.
    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.tabs.iter().find(|t| t.active).map(|t| t.id.as_str())
    }

    /// Options from the last `set_options` call.
    pub fn options(&self) -> Option<&RenderOptions<T>> {
        self.options.as_ref()
    }

    /// Every successful operation since creation or the last [`Self::take_ops`].
    pub fn ops(&self) -> &[StripOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<StripOp> {
        core::mem::take(&mut self.ops)
    }

    /// Applies a live drag move the way a renderer does while the user drags.
    ///
    /// Returns `false` if `from_index` is out of bounds.
    pub fn drag_tab(&mut self, from_index: usize, to_index: usize) -> bool {
        tabstrip::move_tab(&mut self.tabs, from_index, to_index)
    }
}

impl<T: Clone> TabStrip for RecordingStrip<T> {
    type Error = StripError;
    type Toolbar = T;

    fn upsert_tab_at(&mut self, index: usize, tab: &TabRecord) -> Result<(), StripError> {
        let existing = index_of(&self.tabs, &tab.id);
        let len = self.tabs.len() - usize::from(existing.is_some());
        if index > len {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "tabstrip_adapter", index, len, "upsert past end");
            return Err(StripError::IndexOutOfBounds { index, len });
        }
        let mut next = tab.clone();
        next.active = false;
        if let Some(pos) = existing {
            next.active = self.tabs.remove(pos).active;
        }
        self.tabs.insert(index, next);
        self.ops.push(StripOp::UpsertAt {
            index,
            tab: tab.clone(),
        });
        Ok(())
    }

    fn remove_tab(&mut self, id: &str) -> Result<(), StripError> {
        let pos = index_of(&self.tabs, id).ok_or_else(|| StripError::UnknownTab(id.to_string()))?;
        self.tabs.remove(pos);
        self.ops.push(StripOp::Remove(id.to_string()));
        Ok(())
    }

    fn activate_tab(&mut self, id: &str) -> Result<(), StripError> {
        if index_of(&self.tabs, id).is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "tabstrip_adapter", id, "activate of unknown tab");
            return Err(StripError::UnknownTab(id.to_string()));
        }
        for t in &mut self.tabs {
            t.active = t.id == id;
        }
        self.ops.push(StripOp::Activate(id.to_string()));
        Ok(())
    }

    fn set_options(&mut self, options: &RenderOptions<T>) -> Result<(), StripError> {
        self.options = Some(options.clone());
        Ok(())
    }
}
