// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab strip selection.

use alloc::vec::Vec;

use trellis_dismiss::Controllable;
use trellis_navigator::{Key, Step, WrapMode, step_enabled};

use crate::{Observers, SubscriptionId};

/// Emitted when the selected tab changes (or, when controlled, should
/// change).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TabChange(pub usize);

/// Which tab is selected, and keyboard movement across the strip.
///
/// `ArrowRight` and `ArrowLeft` move to the next enabled tab, wrapping at the
/// ends; `Home` and `End` jump to the first and last enabled tab. Disabled
/// tabs are never selected.
///
/// ```
/// use trellis_disclosure::Tabs;
/// use trellis_navigator::Key;
///
/// let mut tabs = Tabs::new(3, 0);
/// tabs.set_disabled(1, true);
/// tabs.key_down(Key::ArrowRight);
/// assert_eq!(tabs.selected(), 2);
/// tabs.key_down(Key::ArrowRight);
/// assert_eq!(tabs.selected(), 0);
/// ```
#[derive(Debug)]
pub struct Tabs {
    selected: Controllable<usize>,
    disabled: Vec<bool>,
    observers: Observers<TabChange>,
}

impl Tabs {
    /// An uncontrolled strip of `count` tabs starting at `default_selected`.
    #[must_use]
    pub fn new(count: usize, default_selected: usize) -> Self {
        Self::from_props(count, None, default_selected)
    }

    /// Build from a `value`/`default_value` prop pair.
    #[must_use]
    pub fn from_props(count: usize, selected: Option<usize>, default_selected: usize) -> Self {
        Self {
            selected: Controllable::from_props(selected, default_selected),
            disabled: alloc::vec![false; count],
            observers: Observers::new(),
        }
    }

    /// Listen for selection changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&TabChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disabled.len()
    }

    /// Whether the strip is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }

    /// The selected tab.
    #[must_use]
    pub const fn selected(&self) -> usize {
        *self.selected.get()
    }

    /// Whether tab `index` exists and is enabled.
    #[must_use]
    pub fn is_enabled(&self, index: usize) -> bool {
        self.disabled.get(index).is_some_and(|d| !d)
    }

    /// Enable or disable tab `index`.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        if let Some(slot) = self.disabled.get_mut(index) {
            *slot = disabled;
        }
    }

    /// Change the number of tabs. New tabs start enabled.
    pub fn set_len(&mut self, count: usize) {
        self.disabled.resize(count, false);
    }

    /// Select tab `index` (a click). Disabled or missing tabs are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_enabled(index) {
            tracing::trace!(index, "tab not selectable");
            return false;
        }
        let Some(index) = self.selected.request(index) else {
            return false;
        };
        tracing::debug!(index, "tab selected");
        self.observers.notify(&TabChange(index));
        true
    }

    /// Apply the caller's `value` prop in controlled mode.
    pub fn set_selected(&mut self, index: usize) -> bool {
        self.selected.sync(index)
    }

    /// A key press on the focused tab.
    pub fn key_down(&mut self, key: Key) -> bool {
        let origin = Some(self.selected());
        let len = self.len();
        let enabled = |i: usize| self.is_enabled(i);
        let target = match key {
            Key::ArrowRight => step_enabled(origin, len, Step::Forward, WrapMode::Wrap, enabled),
            Key::ArrowLeft => step_enabled(origin, len, Step::Backward, WrapMode::Wrap, enabled),
            Key::Home => step_enabled(None, len, Step::Forward, WrapMode::Never, enabled),
            Key::End => step_enabled(None, len, Step::Backward, WrapMode::Never, enabled),
            _ => None,
        };
        target.is_some_and(|t| self.select(t))
    }
}
