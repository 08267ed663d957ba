// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal state machine for overlays.
//!
//! [`DismissController`] owns the open flag of a trigger + content pair and
//! decides when outside presses or Escape should close it. It never talks to a
//! windowing system directly: every side effect is reported to a
//! [`DismissHost`] passed into the call that caused it.
//!
//! ## Listener lifetime
//!
//! Global pointer and keyboard listeners are only needed while the overlay is
//! open. The controller tracks which [`ListenerKinds`] the host should have
//! attached and reports deltas through [`DismissHost::attach_listeners`] and
//! [`DismissHost::detach_listeners`] whenever the open state or the enable
//! flags change. Events that arrive for a listener kind that is not attached
//! are ignored, so a closed overlay can never be dismissed.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use trellis_dismiss::{DismissController, DismissHost, DismissReason, OpenChange};
//!
//! #[derive(Default)]
//! struct Host {
//!     changes: Vec<OpenChange>,
//! }
//!
//! impl DismissHost for Host {
//!     fn open_changed(&mut self, change: OpenChange) {
//!         self.changes.push(change);
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut popover = DismissController::new(false);
//! popover.set_trigger_bounds(Some(Rect::new(0.0, 0.0, 40.0, 20.0)));
//! popover.set_content_bounds(Some(Rect::new(0.0, 24.0, 120.0, 80.0)));
//!
//! popover.open(&mut host);
//! // A press inside the content keeps it open.
//! assert!(!popover.on_pointer_down(Point::new(10.0, 30.0), &mut host));
//! // A press elsewhere closes it.
//! assert!(popover.on_pointer_down(Point::new(300.0, 300.0), &mut host));
//! assert!(!popover.is_open());
//! assert_eq!(
//!     host.changes,
//!     [OpenChange::Opened, OpenChange::Closed(DismissReason::OutsidePress)]
//! );
//! ```

use kurbo::{Point, Rect};

use crate::Controllable;

bitflags::bitflags! {
    /// Global listeners an open overlay needs from its host.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Document-level pointer-down, used for outside-press detection.
        const POINTER_DOWN = 0b0000_0001;
        /// Document-level key-down, used for Escape detection.
        const KEY_DOWN     = 0b0000_0010;
    }
}

/// Why an overlay closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// A direct call such as `close()` or a trigger toggle.
    Explicit,
    /// A pointer went down outside both the trigger and the content.
    OutsidePress,
    /// The Escape key was pressed.
    Escape,
    /// An item inside the content was committed.
    Select,
    /// The pointer left both the trigger and the content (hover variants).
    PointerLeave,
}

/// A change of open state requested or applied by a [`DismissController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenChange {
    /// The overlay opened (or, when controlled, asked to open).
    Opened,
    /// The overlay closed (or, when controlled, asked to close).
    Closed(DismissReason),
}

impl OpenChange {
    /// The open state this change leads to.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Receiver for the side effects of a [`DismissController`].
///
/// All methods except [`DismissHost::open_changed`] default to no-ops, so
/// hosts only implement what they care about.
pub trait DismissHost {
    /// The open state changed, or a change was requested in controlled mode.
    fn open_changed(&mut self, change: OpenChange);

    /// Start delivering the given global events to the controller.
    fn attach_listeners(&mut self, kinds: ListenerKinds) {
        let _ = kinds;
    }

    /// Stop delivering the given global events.
    fn detach_listeners(&mut self, kinds: ListenerKinds) {
        let _ = kinds;
    }

    /// Move keyboard focus back to the trigger element.
    fn restore_focus(&mut self) {}
}

/// Open/closed state with outside-press and Escape dismissal.
///
/// The controller is created either uncontrolled ([`DismissController::new`])
/// or controlled ([`DismissController::controlled`]); see
/// [`Controllable`] for what that means for [`open`](Self::open),
/// [`close`](Self::close) and [`toggle`](Self::toggle).
///
/// Trigger and content geometry are optional: an element that is not mounted
/// yet has no bounds. When neither is known, outside-press detection is
/// skipped entirely.
#[derive(Clone, Debug)]
pub struct DismissController {
    state: Controllable<bool>,
    outside_press: bool,
    escape: bool,
    trigger: Option<Rect>,
    content: Option<Rect>,
    attached: ListenerKinds,
}

impl DismissController {
    /// Create an uncontrolled controller with the given initial state.
    ///
    /// Outside-press and Escape detection start enabled.
    #[must_use]
    pub const fn new(default_open: bool) -> Self {
        Self::with_state(Controllable::uncontrolled(default_open))
    }

    /// Create a controller whose open state is owned by the caller.
    #[must_use]
    pub const fn controlled(open: bool) -> Self {
        Self::with_state(Controllable::controlled(open))
    }

    /// Create from an `open`/`default_open` prop pair.
    #[must_use]
    pub fn from_props(open: Option<bool>, default_open: bool) -> Self {
        Self::with_state(Controllable::from_props(open, default_open))
    }

    const fn with_state(state: Controllable<bool>) -> Self {
        Self {
            state,
            outside_press: true,
            escape: true,
            trigger: None,
            content: None,
            attached: ListenerKinds::empty(),
        }
    }

    /// Start with outside-press detection on or off.
    ///
    /// For use before [`mount`](Self::mount); afterwards use
    /// [`set_outside_click_enabled`](Self::set_outside_click_enabled) so the
    /// host hears about the listener change.
    #[must_use]
    pub const fn with_outside_click_enabled(mut self, enabled: bool) -> Self {
        self.outside_press = enabled;
        self
    }

    /// Whether the overlay is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        *self.state.get()
    }

    /// Whether the open state is owned by the caller.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.state.is_controlled()
    }

    /// Listener kinds the host currently has attached on our behalf.
    #[must_use]
    pub const fn listeners(&self) -> ListenerKinds {
        self.attached
    }

    /// Whether outside-press detection is enabled.
    #[must_use]
    pub const fn outside_click_enabled(&self) -> bool {
        self.outside_press
    }

    /// Whether Escape detection is enabled.
    #[must_use]
    pub const fn escape_enabled(&self) -> bool {
        self.escape
    }

    /// Record the trigger's bounds, or `None` while it is not mounted.
    pub fn set_trigger_bounds(&mut self, bounds: Option<Rect>) {
        self.trigger = bounds;
    }

    /// Record the content's bounds, or `None` while it is not mounted.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        self.content = bounds;
    }

    /// The trigger's bounds, if known.
    #[must_use]
    pub const fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger
    }

    /// The content's bounds, if known.
    #[must_use]
    pub const fn content_bounds(&self) -> Option<Rect> {
        self.content
    }

    /// Attach the listeners an initially open overlay needs.
    ///
    /// Call once after the widget is mounted.
    pub fn mount(&mut self, host: &mut impl DismissHost) {
        self.sync_listeners(host);
    }

    /// Detach every listener, regardless of state.
    pub fn unmount(&mut self, host: &mut impl DismissHost) {
        if !self.attached.is_empty() {
            host.detach_listeners(self.attached);
            self.attached = ListenerKinds::empty();
        }
    }

    /// Open the overlay.
    ///
    /// Returns `true` if a change was applied or requested.
    pub fn open(&mut self, host: &mut impl DismissHost) -> bool {
        self.request(true, DismissReason::Explicit, host)
    }

    /// Close the overlay.
    ///
    /// Returns `true` if a change was applied or requested.
    pub fn close(&mut self, host: &mut impl DismissHost) -> bool {
        self.request(false, DismissReason::Explicit, host)
    }

    /// Close the overlay, reporting `reason` to the host.
    pub fn close_with(&mut self, reason: DismissReason, host: &mut impl DismissHost) -> bool {
        self.request(false, reason, host)
    }

    /// Flip the open state.
    pub fn toggle(&mut self, host: &mut impl DismissHost) -> bool {
        let next = !self.is_open();
        self.request(next, DismissReason::Explicit, host)
    }

    /// Apply an open value supplied by the caller of a controlled overlay.
    ///
    /// Returns `true` if the state changed. Ignored for uncontrolled overlays.
    pub fn set_open(&mut self, open: bool, host: &mut impl DismissHost) -> bool {
        if !self.state.sync(open) {
            return false;
        }
        tracing::debug!(open, "open state synced from caller");
        self.sync_listeners(host);
        true
    }

    /// Enable or disable outside-press detection.
    pub fn set_outside_click_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.outside_press = enabled;
        self.sync_listeners(host);
    }

    /// Enable or disable Escape detection.
    pub fn set_escape_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.escape = enabled;
        self.sync_listeners(host);
    }

    /// Feed a global pointer-down at `position`.
    ///
    /// Returns `true` if the press was outside and a close was requested.
    pub fn on_pointer_down(&mut self, position: Point, host: &mut impl DismissHost) -> bool {
        if !self.attached.contains(ListenerKinds::POINTER_DOWN) {
            return false;
        }
        if !self.is_outside(position) {
            return false;
        }
        self.request(false, DismissReason::OutsidePress, host)
    }

    /// Feed a global Escape key press.
    ///
    /// Returns `true` if a close was requested, in which case the host is also
    /// asked to restore focus to the trigger.
    pub fn on_escape(&mut self, host: &mut impl DismissHost) -> bool {
        if !self.attached.contains(ListenerKinds::KEY_DOWN) {
            return false;
        }
        let requested = self.request(false, DismissReason::Escape, host);
        if requested {
            host.restore_focus();
        }
        requested
    }

    /// Whether `position` lies outside both the trigger and the content.
    ///
    /// Unknown bounds never contain the point, but when neither element is
    /// known the answer is always `false`.
    #[must_use]
    pub fn is_outside(&self, position: Point) -> bool {
        if self.trigger.is_none() && self.content.is_none() {
            return false;
        }
        let inside = |bounds: Option<Rect>| bounds.is_some_and(|r| r.contains(position));
        !inside(self.trigger) && !inside(self.content)
    }

    fn request(&mut self, open: bool, reason: DismissReason, host: &mut impl DismissHost) -> bool {
        if self.state.request(open).is_none() {
            tracing::trace!(open, "open request matches current state");
            return false;
        }
        let change = if open {
            OpenChange::Opened
        } else {
            OpenChange::Closed(reason)
        };
        if self.is_controlled() {
            tracing::debug!(?change, "open change requested from caller");
        } else {
            tracing::debug!(?change, "open state changed");
            self.sync_listeners(host);
        }
        host.open_changed(change);
        true
    }

    fn wanted_listeners(&self) -> ListenerKinds {
        let mut kinds = ListenerKinds::empty();
        if self.is_open() {
            kinds.set(ListenerKinds::POINTER_DOWN, self.outside_press);
            kinds.set(ListenerKinds::KEY_DOWN, self.escape);
        }
        kinds
    }

    fn sync_listeners(&mut self, host: &mut impl DismissHost) {
        let wanted = self.wanted_listeners();
        let detach = self.attached.difference(wanted);
        let attach = wanted.difference(self.attached);
        if !detach.is_empty() {
            host.detach_listeners(detach);
        }
        if !attach.is_empty() {
            host.attach_listeners(attach);
        }
        self.attached = wanted;
    }
}

impl Default for DismissController {
    fn default() -> Self {
        Self::new(false)
    }
}
