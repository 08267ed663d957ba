// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-open overlay.

use kurbo::{Point, Rect, Size};
use trellis_dismiss::{DismissHost, DismissReason};
use trellis_navigator::Key;
use trellis_placement::{Placement, PlacementOptions, Positioned};

use crate::overlay::drive;
use crate::{Observers, Overlay, OverlayEvent, SubscriptionId};

/// A trigger that toggles floating content on click.
///
/// The popover closes on outside presses and on Escape (returning focus to
/// the trigger), and repositions itself when the viewport changes.
///
/// ```
/// use kurbo::{Rect, Size};
/// use trellis_disclosure::Popover;
/// use trellis_dismiss::{DismissHost, OpenChange};
/// use trellis_navigator::Key;
///
/// #[derive(Default)]
/// struct Host {
///     focus_returned: bool,
/// }
///
/// impl DismissHost for Host {
///     fn open_changed(&mut self, _: OpenChange) {}
///     fn restore_focus(&mut self) {
///         self.focus_returned = true;
///     }
/// }
///
/// let mut host = Host::default();
/// let mut popover = Popover::new(false);
/// popover.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
/// popover.set_trigger_bounds(Some(Rect::new(10.0, 10.0, 90.0, 40.0)));
/// popover.set_content_size(Some(Size::new(200.0, 120.0)));
///
/// popover.click_trigger(&mut host);
/// assert!(popover.content_visible());
///
/// popover.key_down(Key::Escape, &mut host);
/// assert!(!popover.is_open());
/// assert!(host.focus_returned);
/// ```
#[derive(Debug, Default)]
pub struct Popover {
    overlay: Overlay,
    observers: Observers<OverlayEvent>,
}

impl Popover {
    /// An uncontrolled popover.
    #[must_use]
    pub fn new(default_open: bool) -> Self {
        Self::from_props(None, default_open)
    }

    /// A popover whose open state is owned by the caller.
    #[must_use]
    pub fn controlled(open: bool) -> Self {
        Self::from_props(Some(open), false)
    }

    /// Build from an `open`/`default_open` prop pair.
    #[must_use]
    pub fn from_props(open: Option<bool>, default_open: bool) -> Self {
        Self {
            overlay: Overlay::from_props(open, default_open),
            observers: Observers::new(),
        }
    }

    /// The underlying overlay.
    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Listen for open changes and placements.
    pub fn subscribe(&mut self, callback: impl FnMut(&OverlayEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Whether the popover is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether the content should be rendered.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.overlay.content_visible()
    }

    /// Where the content goes, once trigger, content and viewport are known.
    #[must_use]
    pub const fn positioned(&self) -> Option<Positioned> {
        self.overlay.positioned()
    }

    /// Attach the listeners an initially open popover needs.
    pub fn mount(&mut self, host: &mut impl DismissHost) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.mount(host);
            None
        });
    }

    /// Detach all listeners.
    pub fn unmount(&mut self, host: &mut impl DismissHost) {
        self.overlay.unmount(host);
    }

    /// The trigger was clicked (or activated from the keyboard).
    pub fn click_trigger(&mut self, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| o.toggle(host)).is_some()
    }

    /// Open the popover.
    pub fn open(&mut self, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| o.open(host)).is_some()
    }

    /// Close the popover.
    pub fn close(&mut self, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Explicit, host)
        })
        .is_some()
    }

    /// Apply the caller's `open` prop in controlled mode.
    pub fn set_open(&mut self, open: bool, host: &mut impl DismissHost) -> bool {
        let mut changed = false;
        drive(&mut self.overlay, &mut self.observers, |o| {
            changed = o.set_open(open, host);
            None
        });
        changed
    }

    /// A global pointer-down.
    pub fn pointer_down(&mut self, position: Point, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.on_pointer_down(position, host)
        })
        .is_some()
    }

    /// A global key press. Only Escape means anything to a popover.
    pub fn key_down(&mut self, key: Key, host: &mut impl DismissHost) -> bool {
        if key != Key::Escape {
            return false;
        }
        drive(&mut self.overlay, &mut self.observers, |o| o.on_escape(host)).is_some()
    }

    /// Enable or disable closing on outside presses.
    pub fn set_outside_click_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_outside_click_enabled(enabled, host);
    }

    /// Enable or disable closing on Escape.
    pub fn set_escape_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_escape_enabled(enabled, host);
    }

    /// Record whether the trigger exists. A popover without one stays closed.
    pub fn set_trigger_present(&mut self, present: bool, host: &mut impl DismissHost) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_trigger_present(present, host)
        });
    }

    /// The trigger was laid out.
    pub fn set_trigger_bounds(&mut self, bounds: Option<Rect>) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_trigger_bounds(bounds);
            None
        });
    }

    /// The content was measured.
    pub fn set_content_size(&mut self, size: Option<Size>) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_content_size(size);
            None
        });
    }

    /// The viewport was resized.
    pub fn set_viewport(&mut self, viewport: Rect) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_viewport(viewport);
            None
        });
    }

    /// Ask for a different side and alignment.
    pub fn set_placement(&mut self, placement: Placement) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_placement(placement);
            None
        });
    }

    /// Change the gap and collision behavior.
    pub fn set_placement_options(&mut self, options: PlacementOptions) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_options(options);
            None
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Recorder, collect};
    use trellis_dismiss::{ListenerKinds, OpenChange};
    use trellis_placement::{Align, Side};

    fn laid_out(popover: &mut Popover) {
        popover.set_viewport(Rect::new(0.0, 0.0, 400.0, 300.0));
        popover.set_trigger_bounds(Some(Rect::new(20.0, 20.0, 100.0, 50.0)));
        popover.set_content_size(Some(Size::new(150.0, 100.0)));
    }

    #[test]
    fn click_then_escape_closes_and_returns_focus() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);

        assert!(popover.click_trigger(&mut host));
        assert!(popover.content_visible());
        assert_eq!(host.attached, ListenerKinds::all());

        assert!(popover.key_down(Key::Escape, &mut host));
        assert!(!popover.is_open());
        assert_eq!(host.focus_restored, 1);
        assert!(host.attached.is_empty());
        assert_eq!(
            host.changes,
            [
                OpenChange::Opened,
                OpenChange::Closed(DismissReason::Escape)
            ]
        );
    }

    #[test]
    fn opening_positions_content_below_trigger() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);
        let events = collect(&mut popover.observers);

        popover.open(&mut host);
        let placed = popover.positioned().unwrap();
        assert_eq!(placed.placement, Placement::new(Side::Bottom, Align::Center));
        assert_eq!(placed.rect, Rect::new(-15.0, 50.0, 135.0, 150.0));
        assert_eq!(
            *events.borrow(),
            [
                OverlayEvent::OpenChange(OpenChange::Opened),
                OverlayEvent::Placed(placed)
            ]
        );
    }

    #[test]
    fn viewport_resize_recomputes_placement() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);
        popover.open(&mut host);
        assert!(!popover.positioned().unwrap().flipped);

        // Too short to fit below the trigger any more.
        popover.set_viewport(Rect::new(0.0, 0.0, 400.0, 120.0));
        let placed = popover.positioned().unwrap();
        assert!(placed.flipped);
        assert_eq!(placed.placement.side, Side::Top);
    }

    #[test]
    fn outside_press_closes_but_inside_press_does_not() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);
        popover.open(&mut host);

        // Inside the content box computed from placement.
        assert!(!popover.pointer_down(Point::new(60.0, 100.0), &mut host));
        assert!(popover.is_open());
        assert!(popover.pointer_down(Point::new(390.0, 290.0), &mut host));
        assert_eq!(
            host.changes.last(),
            Some(&OpenChange::Closed(DismissReason::OutsidePress))
        );
        assert_eq!(popover.positioned(), None);
    }

    #[test]
    fn outside_press_while_closed_is_noop() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);
        assert!(!popover.pointer_down(Point::new(390.0, 290.0), &mut host));
        assert!(host.changes.is_empty());
    }

    #[test]
    fn controlled_popover_only_requests() {
        let mut host = Recorder::default();
        let mut popover = Popover::controlled(false);
        laid_out(&mut popover);
        let events = collect(&mut popover.observers);

        assert!(popover.click_trigger(&mut host));
        assert!(!popover.is_open());
        assert_eq!(host.changes, [OpenChange::Opened]);

        assert!(popover.set_open(true, &mut host));
        assert!(popover.content_visible());
        assert!(matches!(events.borrow().last(), Some(OverlayEvent::Placed(_))));
    }

    #[test]
    fn missing_trigger_keeps_it_closed() {
        let mut host = Recorder::default();
        let mut popover = Popover::new(false);
        laid_out(&mut popover);
        popover.open(&mut host);

        popover.set_trigger_present(false, &mut host);
        assert!(!popover.is_open());
        assert!(!popover.click_trigger(&mut host));
        assert!(!popover.content_visible());
    }
}
