//! Host-side helpers for answering strip callbacks.
//!
//! The engine never edits the host's list; it only reports what the user did. These functions
//! build the next list a host typically renders in response. Each returns a fresh list.

use alloc::vec::Vec;

use tabstrip::{TabList, TabRecord, index_of};

/// `on_tab_active`: marks `id` active and every other tab inactive.
pub fn activate_only(tabs: &[TabRecord], id: &str) -> TabList {
    tabs.iter()
        .map(|t| TabRecord {
            active: t.id == id,
            ..t.clone()
        })
        .collect()
}

/// `on_tab_close`: drops `id`.
pub fn close(tabs: &[TabRecord], id: &str) -> TabList {
    tabs.iter().filter(|t| t.id != id).cloned().collect()
}

/// `on_tab_reorder`: moves `id` to `to_index` (clamped to the end).
///
/// Returns `None` if `id` is not in `tabs`.
pub fn reorder(tabs: &[TabRecord], id: &str, to_index: usize) -> Option<TabList> {
    let from = index_of(tabs, id)?;
    let mut next: Vec<TabRecord> = tabs.to_vec();
    let tab = next.remove(from);
    let to = to_index.min(next.len());
    next.insert(to, tab);
    Some(next)
}

/// Appends `tab` as the new active tab, deactivating all others.
pub fn push_active(tabs: &[TabRecord], tab: TabRecord) -> TabList {
    let mut next: Vec<TabRecord> = tabs
        .iter()
        .map(|t| TabRecord {
            active: false,
            ..t.clone()
        })
        .collect();
    next.push(tab.with_active(true));
    next
}
