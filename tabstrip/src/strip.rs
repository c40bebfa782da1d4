use alloc::vec::Vec;

use crate::{ContextMenuEvent, RenderOptions, TabId, TabRecord};

/// The imperative surface of a tab-strip renderer.
///
/// The engine drives a strip only through these calls. Implementations own the on-screen tab
/// elements, pointer handling and theming; they report user gestures back as [`StripEvent`]s.
///
/// Errors are returned unchanged to the caller of [`crate::TabSync::render`]. The engine never
/// retries.
pub trait TabStrip {
    type Error;
    /// Extra content the host places next to the tabs (e.g. a "new tab" button).
    type Toolbar;

    /// Ensures a tab with `tab.id` sits at `index` and shows `tab`'s attributes.
    ///
    /// Creates the tab if the strip does not have it yet, otherwise moves/updates it in place.
    fn upsert_tab_at(&mut self, index: usize, tab: &TabRecord) -> Result<(), Self::Error>;

    fn remove_tab(&mut self, id: &str) -> Result<(), Self::Error>;

    /// Marks `id` as the active tab. A strip has at most one active tab.
    fn activate_tab(&mut self, id: &str) -> Result<(), Self::Error>;

    /// Applies draggability, theme and toolbar settings. Called only when they change.
    fn set_options(&mut self, options: &RenderOptions<Self::Toolbar>) -> Result<(), Self::Error> {
        let _ = options;
        Ok(())
    }
}

impl<S: TabStrip + ?Sized> TabStrip for &mut S {
    type Error = S::Error;
    type Toolbar = S::Toolbar;

    fn upsert_tab_at(&mut self, index: usize, tab: &TabRecord) -> Result<(), Self::Error> {
        (**self).upsert_tab_at(index, tab)
    }

    fn remove_tab(&mut self, id: &str) -> Result<(), Self::Error> {
        (**self).remove_tab(id)
    }

    fn activate_tab(&mut self, id: &str) -> Result<(), Self::Error> {
        (**self).activate_tab(id)
    }

    fn set_options(&mut self, options: &RenderOptions<Self::Toolbar>) -> Result<(), Self::Error> {
        (**self).set_options(options)
    }
}

/// One imperative step of a reconciliation plan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StripOp {
    Remove(TabId),
    UpsertAt { index: usize, tab: TabRecord },
    Activate(TabId),
}

impl StripOp {
    /// Issues this operation against `strip`.
    pub fn apply_to<S: TabStrip + ?Sized>(&self, strip: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Remove(id) => strip.remove_tab(id),
            Self::UpsertAt { index, tab } => strip.upsert_tab_at(*index, tab),
            Self::Activate(id) => strip.activate_tab(id),
        }
    }

    /// Replays this operation on `tabs`, the way a well-behaved strip applies it.
    ///
    /// An upsert drops the record with the same id, then inserts at `index` clamped to the end.
    /// Activation leaves exactly `id` flagged active.
    pub fn apply_to_list(&self, tabs: &mut Vec<TabRecord>) {
        match self {
            Self::Remove(id) => tabs.retain(|t| t.id != *id),
            Self::UpsertAt { index, tab } => {
                tabs.retain(|t| t.id != tab.id);
                let at = (*index).min(tabs.len());
                tabs.insert(at, tab.clone());
            }
            Self::Activate(id) => {
                for t in tabs.iter_mut() {
                    t.active = t.id == *id;
                }
            }
        }
    }

    /// The id this operation targets.
    pub fn tab_id(&self) -> &str {
        match self {
            Self::Remove(id) | Self::Activate(id) => id,
            Self::UpsertAt { tab, .. } => &tab.id,
        }
    }
}

/// A user gesture reported by the strip renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StripEvent {
    /// The user clicked a tab.
    TabActivated(TabId),
    /// The user clicked a tab's close affordance.
    TabClosed(TabId),
    DragBegin(TabId),
    /// The dragged tab crossed a neighbour. Fired many times per gesture.
    DragMove {
        tab_id: TabId,
        from_index: usize,
        to_index: usize,
    },
    DragEnd,
    ContextMenu {
        tab_id: TabId,
        event: ContextMenuEvent,
    },
}
