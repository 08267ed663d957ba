// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that are either owned by a widget or bound to its caller.

/// A piece of widget state that is either owned by the widget (uncontrolled)
/// or bound to a value supplied by the caller (controlled).
///
/// Whether a value is controlled is decided once, at construction, and never
/// changes afterwards:
///
/// - **Uncontrolled**: [`Controllable::request`] applies the new value
///   immediately and reports it so the widget can notify observers.
/// - **Controlled**: [`Controllable::request`] only reports the requested
///   value. The stored value changes exclusively through
///   [`Controllable::sync`], which is how the caller feeds its decision back.
///
/// ```
/// use trellis_dismiss::Controllable;
///
/// // Uncontrolled: requests take effect.
/// let mut tab = Controllable::uncontrolled(0_usize);
/// assert_eq!(tab.request(2), Some(2));
/// assert_eq!(*tab.get(), 2);
///
/// // Controlled: requests are only reported.
/// let mut open = Controllable::controlled(false);
/// assert_eq!(open.request(true), Some(true));
/// assert!(!*open.get());
/// assert!(open.sync(true));
/// assert!(*open.get());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controllable<T> {
    value: T,
    controlled: bool,
}

impl<T: Clone + PartialEq> Controllable<T> {
    /// Create a value owned by the widget, starting at `default`.
    pub const fn uncontrolled(default: T) -> Self {
        Self {
            value: default,
            controlled: false,
        }
    }

    /// Create a value bound to the caller, starting at `value`.
    pub const fn controlled(value: T) -> Self {
        Self {
            value,
            controlled: true,
        }
    }

    /// Build from a `value`/`default_value` prop pair.
    ///
    /// The result is controlled exactly when `value` is `Some`.
    pub fn from_props(value: Option<T>, default: T) -> Self {
        match value {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(default),
        }
    }

    /// The current value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Whether the caller owns this value.
    pub const fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Request a change to `next`.
    ///
    /// Returns `Some(next)` when a change notification should be emitted, and
    /// `None` when `next` equals the current value. The value is only updated
    /// in uncontrolled mode.
    pub fn request(&mut self, next: T) -> Option<T> {
        if next == self.value {
            return None;
        }
        if !self.controlled {
            self.value = next.clone();
        }
        Some(next)
    }

    /// Apply a value supplied by the caller.
    ///
    /// Returns `true` if the stored value changed. Uncontrolled values ignore
    /// external updates.
    pub fn sync(&mut self, value: T) -> bool {
        if !self.controlled || value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}

impl<T: Clone + PartialEq + Default> Default for Controllable<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_reflects_most_recent_request() {
        let mut open = Controllable::uncontrolled(false);
        for &next in &[true, false, false, true, true, false, true] {
            open.request(next);
            assert_eq!(*open.get(), next);
        }
    }

    #[test]
    fn equal_request_reports_nothing() {
        let mut open = Controllable::uncontrolled(true);
        assert_eq!(open.request(true), None);

        let mut bound = Controllable::controlled(false);
        assert_eq!(bound.request(false), None);
    }

    #[test]
    fn controlled_value_only_moves_through_sync() {
        let mut open = Controllable::controlled(false);
        assert_eq!(open.request(true), Some(true));
        assert_eq!(open.request(true), Some(true), "still false, so asking again reports again");
        assert!(!*open.get());

        assert!(open.sync(true));
        assert!(!open.sync(true));
        assert!(*open.get());
    }

    #[test]
    fn uncontrolled_ignores_sync() {
        let mut open = Controllable::uncontrolled(false);
        assert!(!open.sync(true));
        assert!(!*open.get());
    }

    #[test]
    fn from_props_picks_mode() {
        assert!(Controllable::from_props(Some(true), false).is_controlled());
        let free = Controllable::from_props(None, true);
        assert!(!free.is_controlled());
        assert!(*free.get());
    }
}
