// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Disclosure: headless widgets that show, hide and step through
//! content.
//!
//! Every widget here is a plain state machine. The host framework feeds it
//! pointer, keyboard and focus events (plus millisecond timestamps where
//! timing matters), renders from its getters, and redraws when one of its
//! [`Observers`] fires.
//!
//! The overlay widgets share one core, [`Overlay`]: an open flag with outside
//! press and Escape dismissal (from `trellis_dismiss`) plus a placement that is
//! recomputed whenever the overlay opens or its geometry changes (from
//! `trellis_placement`). Observers always see [`OverlayEvent::OpenChange`]
//! before the matching [`OverlayEvent::Placed`].
//!
//! - [`Popover`]: click-to-toggle overlay.
//! - [`Tooltip`]: hover or focus overlay with a cancellable show delay.
//! - [`SearchDropdown`]: query input, filtered and grouped results, keyboard
//!   navigation, and a [`SearchHandle`] for imperative focus.
//! - [`Tour`]: guided step playback, driven by [`EngineEvent`]s from the host's
//!   highlight engine, with [`TourContext`] as the registry of named tours.
//!
//! Stateful widgets without an overlay:
//!
//! - [`Accordion`], [`Tabs`] and [`Carousel`], each controlled or uncontrolled.
//! - [`ToastQueue`]: bounded stack of timed notifications.
//! - [`LocationButton`]: busy state around an asynchronous [`LocationSource`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use trellis_disclosure::Popover;
//! use trellis_dismiss::{DismissHost, OpenChange};
//! use trellis_navigator::Key;
//!
//! struct Host;
//!
//! impl DismissHost for Host {
//!     fn open_changed(&mut self, _: OpenChange) {}
//! }
//!
//! let mut popover = Popover::new(false);
//! popover.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
//! popover.set_trigger_bounds(Some(Rect::new(100.0, 100.0, 160.0, 130.0)));
//! popover.set_content_size(Some(Size::new(120.0, 80.0)));
//!
//! popover.click_trigger(&mut Host);
//! assert!(popover.content_visible());
//! assert!(popover.positioned().is_some());
//!
//! popover.key_down(Key::Escape, &mut Host);
//! assert!(!popover.is_open());
//! ```
//!
//! ## Controlled widgets
//!
//! Widgets built from a `Some(value)` prop never change that value
//! themselves. They notify observers with the value they would have moved to
//! and wait for the host to pass it back (`set_open`, `set_selected`,
//! `set_index`, `set_expanded`).
//!
//! ## Features
//!
//! - `std` (default) and `libm`: floating point backend for `kurbo`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`TourStep`] and
//!   [`Coordinates`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accordion;
mod carousel;
mod location;
mod observe;
mod overlay;
mod popover;
mod search;
mod tabs;
mod toast;
mod tooltip;
mod tour;

#[cfg(test)]
mod testing;

pub use accordion::{Accordion, AccordionMode, Expanded, ExpandedChange};
pub use carousel::{Carousel, CarouselConfig, SlideChange};
pub use location::{Coordinates, LocationButton, LocationEvent, LocationSource};
pub use observe::{Observers, SubscriptionId};
pub use overlay::{Overlay, OverlayEvent};
pub use popover::Popover;
pub use search::{SearchDropdown, SearchEvent, SearchHandle};
pub use tabs::{TabChange, Tabs};
pub use toast::{
    ActiveToast, CloseReason, Toast, ToastConfig, ToastEvent, ToastId, ToastKind, ToastLifetime,
    ToastQueue,
};
pub use tooltip::{Tooltip, TooltipConfig};
pub use tour::{
    EngineEvent, StepError, Tour, TourContext, TourEvent, TourLabels, TourState, TourStep,
    playback_order,
};
