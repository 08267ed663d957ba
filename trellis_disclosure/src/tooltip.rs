// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and focus overlay with a delayed show.

use kurbo::{Point, Rect, Size};
use trellis_dismiss::{DismissHost, DismissReason, ListenerKinds};
use trellis_navigator::Key;
use trellis_placement::{Align, Placement, PlacementOptions, Positioned, Side};

use crate::overlay::drive;
use crate::{Observers, Overlay, OverlayEvent, SubscriptionId};

/// Tooltip timing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Milliseconds between pointer enter and the tooltip showing.
    pub show_delay_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { show_delay_ms: 300 }
    }
}

/// A tooltip: shows after the pointer rests on the trigger, or immediately on
/// keyboard focus.
///
/// Timing is driven by the host: pass the current time in milliseconds to
/// the pointer methods, then call [`tick`](Self::tick) at or after
/// [`next_deadline`](Self::next_deadline). Leaving before the deadline
/// cancels the pending show.
///
/// The tooltip stays open while the pointer is over either the trigger or
/// the content, so users can move onto it to select text.
#[derive(Debug)]
pub struct Tooltip {
    overlay: Overlay,
    config: TooltipConfig,
    pending_show: Option<u64>,
    over_trigger: bool,
    over_content: bool,
    focused: bool,
    observers: Observers<OverlayEvent>,
}

impl Tooltip {
    /// An uncontrolled tooltip above its trigger, initially hidden.
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self::from_props(None, false, config)
    }

    /// A tooltip from an `open`/`default_open` prop pair.
    ///
    /// It is controlled exactly when `open` is `Some`. Presses elsewhere do
    /// not hide a tooltip unless
    /// [`set_outside_click_enabled`](Self::set_outside_click_enabled) opts in,
    /// so by default only the Escape listener is attached.
    #[must_use]
    pub fn from_props(open: Option<bool>, default_open: bool, config: TooltipConfig) -> Self {
        let mut overlay =
            Overlay::from_props(open, default_open).with_outside_click_enabled(false);
        overlay.set_placement(Placement::new(Side::Top, Align::Center));
        Self {
            overlay,
            config,
            pending_show: None,
            over_trigger: false,
            over_content: false,
            focused: false,
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

    /// Whether the tooltip is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Where the content goes.
    #[must_use]
    pub const fn positioned(&self) -> Option<Positioned> {
        self.overlay.positioned()
    }

    /// When the host should next call [`tick`](Self::tick), if ever.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<u64> {
        self.pending_show
    }

    /// Attach the listeners an initially open tooltip needs.
    pub fn mount(&mut self, host: &mut impl DismissHost) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.mount(host);
            None
        });
    }

    /// Detach all listeners and drop any pending show.
    pub fn unmount(&mut self, host: &mut impl DismissHost) {
        self.pending_show = None;
        self.overlay.unmount(host);
    }

    /// The pointer entered the trigger at `now`.
    pub fn pointer_enter_trigger(&mut self, now: u64, host: &mut impl DismissHost) {
        self.over_trigger = true;
        self.schedule(now, host);
    }

    /// The pointer left the trigger.
    pub fn pointer_leave_trigger(&mut self, host: &mut impl DismissHost) {
        self.over_trigger = false;
        self.maybe_hide(host);
    }

    /// The pointer entered the content.
    pub fn pointer_enter_content(&mut self) {
        self.over_content = true;
    }

    /// The pointer left the content.
    pub fn pointer_leave_content(&mut self, host: &mut impl DismissHost) {
        self.over_content = false;
        self.maybe_hide(host);
    }

    /// The trigger received keyboard focus: show without delay.
    pub fn focus(&mut self, host: &mut impl DismissHost) {
        self.focused = true;
        self.pending_show = None;
        drive(&mut self.overlay, &mut self.observers, |o| o.open(host));
    }

    /// The trigger lost keyboard focus: hide.
    pub fn blur(&mut self, host: &mut impl DismissHost) {
        self.focused = false;
        self.pending_show = None;
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Explicit, host)
        });
    }

    /// Show the tooltip now, cancelling any pending delay.
    pub fn open(&mut self, host: &mut impl DismissHost) -> bool {
        self.pending_show = None;
        drive(&mut self.overlay, &mut self.observers, |o| o.open(host)).is_some()
    }

    /// Hide the tooltip.
    pub fn close(&mut self, host: &mut impl DismissHost) -> bool {
        self.pending_show = None;
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Explicit, host)
        })
        .is_some()
    }

    /// Flip between shown and hidden.
    pub fn toggle(&mut self, host: &mut impl DismissHost) -> bool {
        self.pending_show = None;
        drive(&mut self.overlay, &mut self.observers, |o| o.toggle(host)).is_some()
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

    /// Opt in to hiding on presses outside the trigger and content.
    pub fn set_outside_click_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_outside_click_enabled(enabled, host);
    }

    /// A global pointer-down; only acts once outside presses are enabled.
    pub fn pointer_down(&mut self, position: Point, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.on_pointer_down(position, host)
        })
        .is_some()
    }

    /// Enable or disable hiding on Escape.
    pub fn set_escape_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_escape_enabled(enabled, host);
    }

    /// Escape hides the tooltip without moving focus.
    ///
    /// Ignored unless the Escape listener is attached.
    pub fn key_down(&mut self, key: Key, host: &mut impl DismissHost) -> bool {
        if key != Key::Escape {
            return false;
        }
        self.pending_show = None;
        if !self.overlay.dismiss().listeners().contains(ListenerKinds::KEY_DOWN) {
            return false;
        }
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Escape, host)
        })
        .is_some()
    }

    /// Advance time; shows the tooltip once the pending deadline has passed.
    pub fn tick(&mut self, now: u64, host: &mut impl DismissHost) -> bool {
        match self.pending_show {
            Some(deadline) if now >= deadline => {
                self.pending_show = None;
                drive(&mut self.overlay, &mut self.observers, |o| o.open(host)).is_some()
            }
            _ => false,
        }
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

    fn schedule(&mut self, now: u64, host: &mut impl DismissHost) {
        if self.overlay.is_open() || self.pending_show.is_some() {
            return;
        }
        if self.config.show_delay_ms == 0 {
            drive(&mut self.overlay, &mut self.observers, |o| o.open(host));
            return;
        }
        let deadline = now.saturating_add(self.config.show_delay_ms);
        tracing::trace!(deadline, "tooltip show scheduled");
        self.pending_show = Some(deadline);
    }

    fn maybe_hide(&mut self, host: &mut impl DismissHost) {
        if self.over_trigger || self.over_content || self.focused {
            return;
        }
        if self.pending_show.take().is_some() {
            tracing::trace!("tooltip show cancelled");
        }
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::PointerLeave, host)
        });
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;
    use trellis_dismiss::OpenChange;

    fn tooltip() -> Tooltip {
        Tooltip::new(TooltipConfig { show_delay_ms: 500 })
    }

    #[test]
    fn shows_after_delay() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.pointer_enter_trigger(1_000, &mut host);
        assert_eq!(tip.next_deadline(), Some(1_500));

        assert!(!tip.tick(1_499, &mut host));
        assert!(!tip.is_open());
        assert!(tip.tick(1_500, &mut host));
        assert!(tip.is_open());
        assert_eq!(tip.next_deadline(), None);
    }

    #[test]
    fn leaving_before_deadline_cancels() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.pointer_enter_trigger(1_000, &mut host);
        tip.pointer_leave_trigger(&mut host);
        assert_eq!(tip.next_deadline(), None);
        assert!(!tip.tick(5_000, &mut host));
        assert!(host.changes.is_empty());
    }

    #[test]
    fn moving_onto_content_keeps_it_open() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.pointer_enter_trigger(0, &mut host);
        tip.tick(500, &mut host);

        tip.pointer_enter_content();
        tip.pointer_leave_trigger(&mut host);
        assert!(tip.is_open());

        tip.pointer_leave_content(&mut host);
        assert!(!tip.is_open());
        assert_eq!(
            host.changes.last(),
            Some(&OpenChange::Closed(DismissReason::PointerLeave))
        );
    }

    #[test]
    fn focus_shows_immediately_and_blur_hides() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.focus(&mut host);
        assert!(tip.is_open());
        // Pointer leaving does not hide a focused tooltip.
        tip.pointer_enter_trigger(0, &mut host);
        tip.pointer_leave_trigger(&mut host);
        assert!(tip.is_open());
        tip.blur(&mut host);
        assert!(!tip.is_open());
    }

    #[test]
    fn zero_delay_opens_on_enter() {
        let mut host = Recorder::default();
        let mut tip = Tooltip::new(TooltipConfig { show_delay_ms: 0 });
        tip.pointer_enter_trigger(10, &mut host);
        assert!(tip.is_open());
    }

    #[test]
    fn escape_hides_and_cancels() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.pointer_enter_trigger(0, &mut host);
        assert!(!tip.key_down(Key::Escape, &mut host));
        assert_eq!(tip.next_deadline(), None);
        tip.focus(&mut host);
        assert!(tip.key_down(Key::Escape, &mut host));
        assert_eq!(host.focus_restored, 0);
    }

    #[test]
    fn open_tooltip_listens_only_for_escape() {
        let mut host = Recorder::default();
        let mut tip = Tooltip::new(TooltipConfig { show_delay_ms: 0 });
        tip.focus(&mut host);
        assert_eq!(host.attached, ListenerKinds::KEY_DOWN);
        tip.blur(&mut host);
        assert!(host.attached.is_empty());
    }

    #[test]
    fn escape_disabled_leaves_it_showing() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.set_escape_enabled(false, &mut host);
        tip.focus(&mut host);
        assert!(host.attached.is_empty());
        assert!(!tip.key_down(Key::Escape, &mut host));
        assert!(tip.is_open());
    }

    #[test]
    fn explicit_open_skips_the_delay() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.pointer_enter_trigger(0, &mut host);
        assert!(tip.open(&mut host));
        assert_eq!(tip.next_deadline(), None);
        assert!(!tip.open(&mut host));
        assert!(tip.close(&mut host));
        assert_eq!(
            host.changes,
            [
                OpenChange::Opened,
                OpenChange::Closed(DismissReason::Explicit)
            ]
        );
    }

    #[test]
    fn outside_press_hides_only_after_opting_in() {
        let mut host = Recorder::default();
        let mut tip = tooltip();
        tip.set_trigger_bounds(Some(Rect::new(0.0, 0.0, 40.0, 20.0)));
        assert!(tip.toggle(&mut host));
        assert!(!tip.pointer_down(Point::new(300.0, 300.0), &mut host));
        assert!(tip.is_open());

        tip.set_outside_click_enabled(true, &mut host);
        assert_eq!(host.attached, ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_DOWN);
        assert!(tip.pointer_down(Point::new(300.0, 300.0), &mut host));
        assert_eq!(
            host.changes.last(),
            Some(&OpenChange::Closed(DismissReason::OutsidePress))
        );
        assert!(tip.toggle(&mut host));
        assert!(tip.is_open());
    }

    #[test]
    fn controlled_tooltip_waits_for_the_caller() {
        let mut host = Recorder::default();
        let mut tip = Tooltip::from_props(Some(false), false, TooltipConfig { show_delay_ms: 0 });
        tip.focus(&mut host);
        assert!(!tip.is_open());
        assert_eq!(host.changes, [OpenChange::Opened]);

        assert!(tip.set_open(true, &mut host));
        assert!(tip.is_open());
        assert_eq!(host.attached, ListenerKinds::KEY_DOWN);
        assert!(!tip.set_open(true, &mut host));
    }

    #[test]
    fn default_open_starts_visible() {
        let mut host = Recorder::default();
        let mut tip = Tooltip::from_props(None, true, TooltipConfig::default());
        assert!(tip.is_open());
        assert!(!tip.overlay().dismiss().is_controlled());
        tip.mount(&mut host);
        assert_eq!(host.attached, ListenerKinds::KEY_DOWN);
        tip.unmount(&mut host);
        assert!(host.attached.is_empty());
    }
}
