//! A headless engine that keeps an imperative tab strip in sync with a declarative tab list.
//!
//! For adapter-level utilities (an in-memory strip, a controller, host-side list helpers), see
//! the `tabstrip-adapter` crate.
//!
//! The host owns an ordered list of [`TabRecord`]s and hands the whole list to
//! [`TabSync::render`] on every change. The engine diffs it against what it rendered last and
//! drives a [`TabStrip`] with the resulting remove / upsert / activate operations.
//!
//! In the other direction, the strip reports user gestures as [`StripEvent`]s. The engine turns
//! them into host callbacks ([`Listeners`]); the many move events of one drag gesture become a
//! single `on_tab_reorder(tab_id, from_index, to_index)`.
//!
//! It is UI-agnostic and single-threaded. A GUI layer is expected to provide:
//! - a [`TabStrip`] implementation that draws tabs
//! - gesture events from that strip
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod latest;
mod options;
pub mod reconcile;
mod strip;
mod tabs;
mod tracker;
mod types;


pub use latest::Latest;
pub use options::{
    ContextMenuCallback, DragEndCallback, Listeners, ReorderCallback, RenderOptions, TabCallback,
    TabSyncOptions,
};
pub use reconcile::RemovalPolicy;
pub use strip::{StripEvent, StripOp, TabStrip};
pub use tabs::{EventSink, RenderOutcome, TabSync};
pub use tracker::{ReorderCommit, ReorderGesture, ReorderTracker, move_tab};
pub use types::{ContextMenuEvent, Favicon, TabAttributes, TabId, TabList, TabRecord, index_of};
