// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Placement: where an overlay goes relative to its trigger.
//!
//! Given a trigger's box, the content's size, a requested [`Side`] and
//! [`Align`], and the viewport, [`resolve`] returns the [`Placement`] to use.
//! The rules are small and deliberately rigid:
//!
//! - A request that fits is used verbatim.
//! - If the content would cross the viewport edge on the requested side, the
//!   side flips to its opposite (top and bottom, left and right) **once**. The
//!   flipped side is not re-checked.
//! - Alignment positions the content along the cross axis: `Start` and `End`
//!   line up with the trigger's edges, `Center` with its midpoint.
//!
//! Everything here is a pure function of its inputs. Recompute placement when
//! the overlay opens and when the viewport resizes.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use trellis_placement::{Align, Placement, Side, resolve};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! // A trigger hugging the bottom of the viewport.
//! let trigger = Rect::new(10.0, 560.0, 110.0, 590.0);
//!
//! let placement = resolve(trigger, Size::new(200.0, 120.0), Side::Bottom, Align::Start, viewport);
//! assert_eq!(placement, Placement::new(Side::Top, Align::Start));
//! ```
//!
//! Use [`position`] when you also need the content box, and
//! [`Side::from_name`] / [`Align::from_name`] to accept loosely typed names:
//! unknown names resolve to the defaults (`Bottom`, `Center`).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Side`], [`Align`] and [`Placement`].
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod types;

pub use resolve::{Positioned, content_rect, position, resolve, resolve_with};
pub use types::{Align, Placement, PlacementOptions, Side};
