// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key handling for list-producing widgets.

use crate::{Key, NavigationCursor};

/// What a key press means for a list-producing widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavOutcome {
    /// The focused position moved to the given index.
    Moved(usize),
    /// The item at the given position was committed; the widget should
    /// select it and close. The cursor has already been reset.
    Commit(usize),
    /// The widget should close and drop input focus. The cursor has already
    /// been reset.
    Dismiss,
    /// The key means nothing here.
    Ignored,
}

/// Keyboard state machine over a filtered result list.
///
/// - `ArrowDown`/`ArrowUp` move with wraparound; on an empty list they do
///   nothing.
/// - `Home`/`End` jump to the ends.
/// - `Enter` commits the focused item, if there is one.
/// - `Escape` dismisses.
///
/// Committing or dismissing clears the focus, as does every new result set
/// passed to [`KeyboardNavigator::set_results`].
///
/// ```
/// use trellis_navigator::{Key, KeyboardNavigator, NavOutcome};
///
/// let mut nav = KeyboardNavigator::new();
/// nav.set_results(2);
/// assert_eq!(nav.handle(Key::ArrowDown), NavOutcome::Moved(0));
/// assert_eq!(nav.handle(Key::Enter), NavOutcome::Commit(0));
/// assert_eq!(nav.focused(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardNavigator {
    cursor: NavigationCursor,
}

impl KeyboardNavigator {
    /// A navigator over an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: NavigationCursor::new(0),
        }
    }

    /// The underlying cursor.
    #[must_use]
    pub const fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// The focused position, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.cursor.focused()
    }

    /// Point at a new result list of `total` items; clears the focus.
    pub fn set_results(&mut self, total: usize) {
        self.cursor.set_total(total);
    }

    /// Clear the focus without changing the list.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Focus a position directly, for example when the pointer hovers it.
    pub fn hover(&mut self, position: usize) -> bool {
        self.cursor.focus(position)
    }

    /// Interpret a key press.
    pub fn handle(&mut self, key: Key) -> NavOutcome {
        match key {
            Key::ArrowDown | Key::ArrowUp | Key::Home | Key::End => self
                .cursor
                .apply(key)
                .map_or(NavOutcome::Ignored, NavOutcome::Moved),
            Key::Enter => match self.cursor.focused() {
                Some(position) => {
                    self.cursor.reset();
                    NavOutcome::Commit(position)
                }
                None => NavOutcome::Ignored,
            },
            Key::Escape => {
                self.cursor.reset();
                NavOutcome::Dismiss
            }
            _ => NavOutcome::Ignored,
        }
    }
}
