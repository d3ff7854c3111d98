//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - Drag lifecycle and velocity-based page snapping
//! - Tween-based smooth scrolling (adapter-driven, no timers of its own)
//! - Timed auto-advance between pages
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;


pub use controller::{Controller, DEFAULT_SLIDE_DURATION_MS};
pub use tween::{Easing, Tween};
