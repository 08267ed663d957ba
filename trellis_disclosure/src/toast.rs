// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast notifications with a bounded visible stack and timed expiry.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use trellis_i18n::{Translate, builtin::keys};

use crate::{Observers, SubscriptionId};

/// Severity, for the host to pick colors and icons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// Something finished well.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// How long a toast stays once shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ToastLifetime {
    /// [`ToastConfig::default_duration_ms`].
    #[default]
    Default,
    /// This many milliseconds.
    For(u64),
    /// Until dismissed.
    Sticky,
}

/// Content of one notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Headline.
    pub title: String,
    /// Optional detail text.
    pub body: Option<String>,
    /// Severity.
    pub kind: ToastKind,
    /// Display duration.
    pub lifetime: ToastLifetime,
}

impl Toast {
    /// An info toast with the default lifetime.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            kind: ToastKind::Info,
            lifetime: ToastLifetime::Default,
        }
    }

    /// Set the detail text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the severity.
    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the display duration.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: ToastLifetime) -> Self {
        self.lifetime = lifetime;
        self
    }
}

/// Identifies a toast for its whole life in a [`ToastQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Queue limits and the default duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    /// Toasts shown at once; the rest wait in order.
    pub max_visible: usize,
    /// Waiting toasts kept; pushes beyond this are dropped.
    pub max_queued: usize,
    /// Lifetime of [`ToastLifetime::Default`] toasts.
    pub default_duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            max_queued: 10,
            default_duration_ms: 5_000,
        }
    }
}

/// Why a toast went away.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// Its lifetime ran out.
    Expired,
    /// The user or the host dismissed it.
    Manual,
}

/// Notifications from a [`ToastQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToastEvent {
    /// The toast entered the visible stack.
    Shown(ToastId),
    /// The stack was full; the toast waits.
    Queued(ToastId),
    /// The toast left, visible or waiting.
    Dismissed {
        /// Which toast.
        id: ToastId,
        /// Why.
        reason: CloseReason,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Timer {
    Sticky,
    Running { expires_at: u64 },
    Paused { remaining: u64 },
}

/// A toast in the visible stack.
#[derive(Clone, Debug)]
pub struct ActiveToast {
    id: ToastId,
    toast: Toast,
    timer: Timer,
}

impl ActiveToast {
    /// Its id.
    #[must_use]
    pub const fn id(&self) -> ToastId {
        self.id
    }

    /// Its content.
    #[must_use]
    pub const fn toast(&self) -> &Toast {
        &self.toast
    }

    /// When it expires, unless sticky or paused.
    #[must_use]
    pub const fn expires_at(&self) -> Option<u64> {
        match self.timer {
            Timer::Running { expires_at } => Some(expires_at),
            _ => None,
        }
    }
}

/// A stack of visible toasts fed from a FIFO of waiting ones.
///
/// Expiry runs on host timestamps: call [`tick`](Self::tick) at or after
/// [`next_deadline`](Self::next_deadline). While the pointer rests on the
/// stack ([`pause`](Self::pause)) no toast expires; [`resume`](Self::resume)
/// gives each one back the time it had left.
///
/// ```
/// use trellis_disclosure::{Toast, ToastConfig, ToastQueue};
///
/// let mut toasts = ToastQueue::new(ToastConfig { max_visible: 1, ..ToastConfig::default() });
/// toasts.push(Toast::new("Saved"), 0);
/// toasts.push(Toast::new("Synced"), 0);
/// assert_eq!(toasts.pending_count(), 1);
///
/// toasts.tick(5_000);
/// assert_eq!(toasts.visible()[0].toast().title, "Synced");
/// ```
#[derive(Debug)]
pub struct ToastQueue {
    config: ToastConfig,
    visible: Vec<ActiveToast>,
    pending: VecDeque<(ToastId, Toast)>,
    next_id: u64,
    paused: bool,
    observers: Observers<ToastEvent>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl ToastQueue {
    /// An empty queue.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            visible: Vec::new(),
            pending: VecDeque::new(),
            next_id: 0,
            paused: false,
            observers: Observers::new(),
        }
    }

    /// Listen for queue changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&ToastEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[ActiveToast] {
        &self.visible
    }

    /// Number of waiting toasts.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is shown or waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }

    /// Whether expiry is held.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// The earliest expiry among visible toasts.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.visible.iter().filter_map(ActiveToast::expires_at).min()
    }

    /// Add a toast at `now`. Returns `None` if the waiting line is full.
    pub fn push(&mut self, toast: Toast, now: u64) -> Option<ToastId> {
        if self.visible.len() >= self.config.max_visible
            && self.pending.len() >= self.config.max_queued
        {
            tracing::warn!(title = %toast.title, "toast queue full, dropping toast");
            return None;
        }
        let id = ToastId(self.next_id);
        self.next_id += 1;
        if self.visible.len() < self.config.max_visible {
            self.show(id, toast, now);
        } else {
            tracing::debug!(?id, "toast queued");
            self.pending.push_back((id, toast));
            self.observers.notify(&ToastEvent::Queued(id));
        }
        Some(id)
    }

    /// Remove toast `id` at `now`, whether visible or waiting.
    pub fn dismiss(&mut self, id: ToastId, now: u64) -> bool {
        if let Some(at) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(at);
        } else if let Some(at) = self.pending.iter().position(|(p, _)| *p == id) {
            self.pending.remove(at);
        } else {
            tracing::trace!(?id, "dismissing unknown toast");
            return false;
        }
        self.dismissed(id, CloseReason::Manual);
        self.promote(now);
        true
    }

    /// Remove every toast.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self
            .visible
            .drain(..)
            .map(|t| t.id)
            .chain(self.pending.drain(..).map(|(id, _)| id))
            .collect();
        for id in ids {
            self.dismissed(id, CloseReason::Manual);
        }
    }

    /// Expire toasts whose time is up. Returns how many left.
    pub fn tick(&mut self, now: u64) -> usize {
        if self.paused {
            return 0;
        }
        let mut expired = Vec::new();
        self.visible.retain(|t| match t.timer {
            Timer::Running { expires_at } if now >= expires_at => {
                expired.push(t.id);
                false
            }
            _ => true,
        });
        for id in &expired {
            self.dismissed(*id, CloseReason::Expired);
        }
        self.promote(now);
        expired.len()
    }

    /// Hold expiry, e.g. while the pointer is over the stack.
    pub fn pause(&mut self, now: u64) {
        if self.paused {
            return;
        }
        self.paused = true;
        for toast in &mut self.visible {
            if let Timer::Running { expires_at } = toast.timer {
                toast.timer = Timer::Paused {
                    remaining: expires_at.saturating_sub(now),
                };
            }
        }
        tracing::trace!("toast expiry paused");
    }

    /// Restart expiry with each toast's remaining time.
    pub fn resume(&mut self, now: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        for toast in &mut self.visible {
            if let Timer::Paused { remaining } = toast.timer {
                toast.timer = Timer::Running {
                    expires_at: now.saturating_add(remaining),
                };
            }
        }
        tracing::trace!("toast expiry resumed");
    }

    /// Accessible label for a toast's close button.
    #[must_use]
    pub fn dismiss_label(&self, t: &impl Translate) -> String {
        t.translate(keys::TOAST_DISMISS)
    }

    fn show(&mut self, id: ToastId, toast: Toast, now: u64) {
        let duration = match toast.lifetime {
            ToastLifetime::Default => Some(self.config.default_duration_ms),
            ToastLifetime::For(ms) => Some(ms),
            ToastLifetime::Sticky => None,
        };
        let timer = match duration {
            None => Timer::Sticky,
            Some(remaining) if self.paused => Timer::Paused { remaining },
            Some(ms) => Timer::Running {
                expires_at: now.saturating_add(ms),
            },
        };
        tracing::debug!(?id, "toast shown");
        self.visible.push(ActiveToast { id, toast, timer });
        self.observers.notify(&ToastEvent::Shown(id));
    }

    fn promote(&mut self, now: u64) {
        while self.visible.len() < self.config.max_visible {
            let Some((id, toast)) = self.pending.pop_front() else {
                break;
            };
            self.show(id, toast, now);
        }
    }

    fn dismissed(&mut self, id: ToastId, reason: CloseReason) {
        tracing::debug!(?id, ?reason, "toast dismissed");
        self.observers.notify(&ToastEvent::Dismissed { id, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::collect;
    use alloc::vec;

    fn queue(max_visible: usize, max_queued: usize) -> ToastQueue {
        ToastQueue::new(ToastConfig {
            max_visible,
            max_queued,
            default_duration_ms: 1_000,
        })
    }

    fn titles(q: &ToastQueue) -> Vec<&str> {
        q.visible().iter().map(|t| t.toast().title.as_str()).collect()
    }

    #[test]
    fn overflow_waits_then_promotes_in_order() {
        let mut q = queue(2, 5);
        let events = collect(&mut q.observers);
        let a = q.push(Toast::new("a"), 0).unwrap();
        let b = q.push(Toast::new("b"), 0).unwrap();
        let c = q.push(Toast::new("c"), 500).unwrap();
        assert_eq!(titles(&q), ["a", "b"]);
        assert_eq!(q.pending_count(), 1);

        assert_eq!(q.tick(1_000), 2);
        assert_eq!(titles(&q), ["c"]);
        // Promoted toasts start their lifetime when shown.
        assert_eq!(q.visible()[0].expires_at(), Some(2_000));
        assert_eq!(
            *events.borrow(),
            [
                ToastEvent::Shown(a),
                ToastEvent::Shown(b),
                ToastEvent::Queued(c),
                ToastEvent::Dismissed {
                    id: a,
                    reason: CloseReason::Expired
                },
                ToastEvent::Dismissed {
                    id: b,
                    reason: CloseReason::Expired
                },
                ToastEvent::Shown(c),
            ]
        );
    }

    #[test]
    fn full_queue_drops() {
        let mut q = queue(1, 1);
        assert!(q.push(Toast::new("a"), 0).is_some());
        assert!(q.push(Toast::new("b"), 0).is_some());
        assert!(q.push(Toast::new("c"), 0).is_none());
    }

    #[test]
    fn manual_dismiss_of_visible_and_pending() {
        let mut q = queue(1, 5);
        let a = q.push(Toast::new("a"), 0).unwrap();
        let b = q.push(Toast::new("b"), 0).unwrap();
        let c = q.push(Toast::new("c"), 0).unwrap();
        assert!(q.dismiss(b, 10));
        assert!(q.dismiss(a, 10));
        assert_eq!(q.visible()[0].id(), c);
        assert!(!q.dismiss(a, 10));
    }

    #[test]
    fn hover_pause_preserves_remaining_time() {
        let mut q = queue(3, 5);
        q.push(Toast::new("a"), 0);
        q.pause(400);
        assert_eq!(q.next_deadline(), None);
        assert_eq!(q.tick(10_000), 0);
        q.resume(10_000);
        assert_eq!(q.next_deadline(), Some(10_600));
        assert_eq!(q.tick(10_600), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn sticky_and_custom_lifetimes() {
        let mut q = queue(3, 5);
        q.push(Toast::new("s").with_lifetime(ToastLifetime::Sticky), 0);
        q.push(Toast::new("f").with_lifetime(ToastLifetime::For(50)), 0);
        assert_eq!(q.next_deadline(), Some(50));
        q.tick(1_000_000);
        assert_eq!(titles(&q), ["s"]);
        assert_eq!(q.visible()[0].expires_at(), None);
    }

    #[test]
    fn clear_reports_everything() {
        let mut q = queue(1, 5);
        let ids = vec![
            q.push(Toast::new("a"), 0).unwrap(),
            q.push(Toast::new("b"), 0).unwrap(),
        ];
        let events = collect(&mut q.observers);
        q.clear();
        assert!(q.is_empty());
        let dismissed: Vec<ToastId> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ToastEvent::Dismissed { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(dismissed, ids);
    }

    #[test]
    fn dismiss_label_uses_translation() {
        let q = ToastQueue::default();
        assert_eq!(q.dismiss_label(&trellis_i18n::KeysOnly), keys::TOAST_DISMISS);
    }
}
