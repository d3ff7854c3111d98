//! Headless paging carousel engine.
//!
//! This crate computes carousel geometry and page transitions without
//! owning any rendering: the host feeds it a viewport and a scroll offset
//! and receives, for each visible cell, a center, a size, a transform, an
//! opacity, and a stacking order. It works the same under any UI stack
//! that can draw a transformed rectangle.
//!
//! # Quick start
//!
//! ```
//! use carousel::{EffectKind, ItemSize, PagerLayout, PagerOptions, Transformer};
//! use kurbo::Size;
//!
//! let options = PagerOptions::new(8)
//!     .with_item_size(ItemSize::Fixed(Size::new(240.0, 160.0)))
//!     .with_infinite(true)
//!     .with_transformer(Transformer::new(EffectKind::CoverFlow));
//! let mut layout = PagerLayout::new(options);
//! layout.prepare(Size::new(390.0, 200.0));
//!
//! for cell in layout.visible_attributes(layout.visible_rect()) {
//!     // hand cell.frame(), cell.transform, cell.alpha, cell.z_index
//!     // to the renderer
//!     let _ = cell.frame();
//! }
//! ```
//!
//! # Infinite scrolling
//!
//! With [`PagerOptions::with_infinite`] the item range is replicated into
//! many virtual sections laid out back to back, so the host scrolls over
//! plain finite content. Call [`PagerLayout::recenter_if_needed`] whenever
//! scrolling settles; it teleports the offset back to the middle section
//! before the runway runs out, without visible movement.
//!
//! # Features
//!
//! - `std` (default): std support; disable for `no_std` + `alloc` use.
//! - `serde`: serialization for configuration and transform types.
//! - `tracing`: layout diagnostics via the `tracing` crate (implies `std`).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod effect;
mod layout;
mod options;
mod transform3d;
mod types;

#[cfg(test)]
mod tests;

pub use effect::{EffectContext, EffectKind, RenderState, RenderTransform, Transformer};
pub use layout::{Geometry, MAX_VIRTUAL_ITEMS, PagerLayout};
pub use options::PagerOptions;
pub use transform3d::Transform3d;
pub use types::{CellAttributes, DecelerationDistance, ItemSize, ScrollDirection};

pub use kurbo;
