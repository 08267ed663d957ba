// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys that interactive widgets react to.

/// A key press, reduced to what widgets in this family interpret.
///
/// Hosts translate their native key events into this enum; anything without a
/// meaning here maps to [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    ///
    /// ```
    /// use trellis_navigator::Key;
    ///
    /// assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
    /// assert_eq!(Key::from_dom_key("a"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }

    /// Whether this key activates a focused control (Enter or Space).
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
