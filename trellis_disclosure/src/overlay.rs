// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trigger + content pair shared by every overlay widget.

use kurbo::{Point, Rect, Size};
use trellis_dismiss::{DismissController, DismissHost, DismissReason, ListenerKinds, OpenChange};
use trellis_placement::{Placement, PlacementOptions, Positioned, position};

use crate::Observers;

/// Events every overlay widget emits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OverlayEvent {
    /// The open state changed, or a change was requested in controlled mode.
    OpenChange(OpenChange),
    /// The content was (re)positioned.
    Placed(Positioned),
}

/// Forwards listener and focus effects to the real host and holds back the
/// open-change notification until the overlay has finished updating.
struct Deferred<'a, H> {
    host: &'a mut H,
    change: Option<OpenChange>,
}

impl<H: DismissHost> DismissHost for Deferred<'_, H> {
    fn open_changed(&mut self, change: OpenChange) {
        self.change = Some(change);
    }

    fn attach_listeners(&mut self, kinds: ListenerKinds) {
        self.host.attach_listeners(kinds);
    }

    fn detach_listeners(&mut self, kinds: ListenerKinds) {
        self.host.detach_listeners(kinds);
    }

    fn restore_focus(&mut self) {
        self.host.restore_focus();
    }
}

/// Open state, dismissal and placement for one trigger + content pair.
///
/// The trigger is always rendered; the content only while
/// [`content_visible`](Self::content_visible) is true. The content box is
/// computed from the trigger bounds, the measured content size and the
/// viewport each time the overlay opens and whenever one of those inputs
/// changes while open.
///
/// Operations that can change the open state take the host, forward listener
/// and focus effects to it straight away, and report the open change through
/// [`DismissHost::open_changed`] only after placement has been updated. They
/// return the change so the owning widget can notify its own observers.
#[derive(Clone, Debug)]
pub struct Overlay {
    dismiss: DismissController,
    requested: Placement,
    options: PlacementOptions,
    viewport: Rect,
    content_size: Option<Size>,
    positioned: Option<Positioned>,
    trigger_present: bool,
}

impl Overlay {
    /// An overlay from an `open`/`default_open` prop pair.
    ///
    /// It is controlled exactly when `open` is `Some`.
    #[must_use]
    pub fn from_props(open: Option<bool>, default_open: bool) -> Self {
        Self {
            dismiss: DismissController::from_props(open, default_open),
            requested: Placement::default(),
            options: PlacementOptions::default(),
            viewport: Rect::ZERO,
            content_size: None,
            positioned: None,
            trigger_present: true,
        }
    }

    /// Start with outside-press dismissal on or off.
    #[must_use]
    pub fn with_outside_click_enabled(mut self, enabled: bool) -> Self {
        self.dismiss = self.dismiss.with_outside_click_enabled(enabled);
        self
    }

    /// The dismissal state machine.
    #[must_use]
    pub const fn dismiss(&self) -> &DismissController {
        &self.dismiss
    }

    /// Whether the overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.dismiss.is_open()
    }

    /// Whether the content should be rendered.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.trigger_present && self.dismiss.is_open()
    }

    /// Whether a trigger element exists.
    #[must_use]
    pub const fn trigger_present(&self) -> bool {
        self.trigger_present
    }

    /// The requested placement.
    #[must_use]
    pub const fn requested_placement(&self) -> Placement {
        self.requested
    }

    /// The latest computed position of the content, if any.
    #[must_use]
    pub const fn positioned(&self) -> Option<Positioned> {
        self.positioned
    }

    /// Set the placement to ask for on the next layout.
    pub fn set_placement(&mut self, placement: Placement) {
        self.requested = placement;
        self.reposition();
    }

    /// Set placement tuning.
    pub fn set_options(&mut self, options: PlacementOptions) {
        self.options = options;
        self.reposition();
    }

    /// The viewport changed; the content is repositioned if open.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.reposition();
    }

    /// The trigger was laid out (or unmounted, with `None`).
    pub fn set_trigger_bounds(&mut self, bounds: Option<Rect>) {
        self.dismiss.set_trigger_bounds(bounds);
        self.reposition();
    }

    /// The content was measured.
    pub fn set_content_size(&mut self, size: Option<Size>) {
        self.content_size = size;
        self.reposition();
    }

    /// Record whether the trigger element exists at all.
    ///
    /// Without a trigger the overlay refuses to open, and an open overlay
    /// closes.
    pub fn set_trigger_present(
        &mut self,
        present: bool,
        host: &mut impl DismissHost,
    ) -> Option<OpenChange> {
        self.trigger_present = present;
        if present {
            return None;
        }
        self.dismiss.set_trigger_bounds(None);
        self.close_with(DismissReason::Explicit, host)
    }

    /// Attach the listeners an initially open overlay needs.
    pub fn mount(&mut self, host: &mut impl DismissHost) {
        self.dismiss.mount(host);
        self.reposition();
    }

    /// Detach every listener.
    pub fn unmount(&mut self, host: &mut impl DismissHost) {
        self.dismiss.unmount(host);
    }

    /// Request the open state.
    pub fn open(&mut self, host: &mut impl DismissHost) -> Option<OpenChange> {
        if !self.trigger_present {
            tracing::trace!("open ignored without a trigger");
            return None;
        }
        self.run(host, |d, h| d.open(h))
    }

    /// Request the closed state.
    pub fn close_with(
        &mut self,
        reason: DismissReason,
        host: &mut impl DismissHost,
    ) -> Option<OpenChange> {
        self.run(host, |d, h| d.close_with(reason, h))
    }

    /// Flip the open state (a trigger click).
    pub fn toggle(&mut self, host: &mut impl DismissHost) -> Option<OpenChange> {
        if self.is_open() {
            self.close_with(DismissReason::Explicit, host)
        } else {
            self.open(host)
        }
    }

    /// Apply the caller's `open` prop in controlled mode.
    pub fn set_open(&mut self, open: bool, host: &mut impl DismissHost) -> bool {
        let changed = self.dismiss.set_open(open, host);
        if changed {
            self.reposition();
        }
        changed
    }

    /// Enable or disable outside-press dismissal.
    pub fn set_outside_click_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.dismiss.set_outside_click_enabled(enabled, host);
    }

    /// Enable or disable Escape dismissal.
    pub fn set_escape_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.dismiss.set_escape_enabled(enabled, host);
    }

    /// A global pointer-down.
    pub fn on_pointer_down(
        &mut self,
        position: Point,
        host: &mut impl DismissHost,
    ) -> Option<OpenChange> {
        self.run(host, |d, h| d.on_pointer_down(position, h))
    }

    /// A global Escape press.
    pub fn on_escape(&mut self, host: &mut impl DismissHost) -> Option<OpenChange> {
        self.run(host, |d, h| d.on_escape(h))
    }

    fn run<H: DismissHost>(
        &mut self,
        host: &mut H,
        op: impl FnOnce(&mut DismissController, &mut Deferred<'_, H>) -> bool,
    ) -> Option<OpenChange> {
        let mut deferred = Deferred { host, change: None };
        op(&mut self.dismiss, &mut deferred);
        let change = deferred.change?;
        self.reposition();
        host.open_changed(change);
        Some(change)
    }

    /// Recompute the content position if the overlay is open and every input
    /// is known; otherwise forget it.
    fn reposition(&mut self) {
        let next = match (
            self.dismiss.is_open(),
            self.dismiss.trigger_bounds(),
            self.content_size,
        ) {
            (true, Some(trigger), Some(size)) if self.trigger_present => Some(position(
                trigger,
                size,
                self.requested,
                self.viewport,
                &self.options,
            )),
            _ => None,
        };
        self.dismiss.set_content_bounds(next.map(|p| p.rect));
        if next != self.positioned {
            if let Some(p) = next {
                tracing::debug!(
                    side = p.placement.side.name(),
                    flipped = p.flipped,
                    "content positioned"
                );
            }
            self.positioned = next;
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::from_props(None, false)
    }
}

/// Run `op` on `overlay` and tell `observers` what changed: the open change
/// first, then the new position if it moved.
pub(crate) fn drive<E: From<OverlayEvent>>(
    overlay: &mut Overlay,
    observers: &mut Observers<E>,
    op: impl FnOnce(&mut Overlay) -> Option<OpenChange>,
) -> Option<OpenChange> {
    let before = overlay.positioned();
    let change = op(overlay);
    if let Some(change) = change {
        observers.notify(&OverlayEvent::OpenChange(change).into());
    }
    if let Some(p) = overlay.positioned()
        && Some(p) != before
    {
        observers.notify(&OverlayEvent::Placed(p).into());
    }
    change
}
