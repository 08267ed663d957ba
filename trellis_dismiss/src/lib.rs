// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Dismiss: open/closed state for overlays.
//!
//! This crate models the state every disclosure widget (popover, tooltip,
//! dropdown, tour bubble) shares:
//!
//! - [`Controllable`]: a value that is either owned by the widget
//!   (uncontrolled) or bound to the caller (controlled). Controlled values
//!   only *request* changes; the caller decides.
//! - [`DismissController`]: an open flag plus outside-press and Escape
//!   detection, with global listeners scoped to the time the overlay is open.
//! - [`DismissHost`]: the trait through which side effects (open changes,
//!   listener attachment, focus restoration) reach the host framework.
//!
//! The crate does not capture events itself. Hosts forward pointer-down
//! positions and Escape presses while listeners are attached, and keep the
//! trigger and content bounds up to date as layout changes. Geometry uses
//! [`kurbo`] types in a single coordinate space chosen by the host.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc` in tests only.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod controllable;
mod dismiss;

pub use controllable::Controllable;
pub use dismiss::{DismissController, DismissHost, DismissReason, ListenerKinds, OpenChange};
