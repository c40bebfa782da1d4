//! Adapter utilities for the `tabstrip` crate.
//!
//! The `tabstrip` crate is UI-agnostic and focuses on reconciliation and gesture tracking. This
//! crate provides small, framework-neutral helpers commonly needed by adapters and hosts:
//!
//! - [`RecordingStrip`], an in-memory strip for headless hosts and tests
//! - [`Controller`], which owns the engine, the strip and the current render options
//! - [`host`], list helpers for answering activate / close / reorder callbacks
//!
//! This crate is intentionally framework-agnostic (no egui/webview bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
pub mod host;
mod recording;


pub use controller::Controller;
pub use recording::{RecordingStrip, StripError};
