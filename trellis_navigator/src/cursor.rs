// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focused-index cursor over a result list.

use crate::{Key, Step, WrapMode, step_enabled};

/// A keyboard-highlighted position in a list of `total` items.
///
/// The cursor starts with nothing focused. A focused index is always in
/// `0..total`; anything that changes `total` clears the focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    focused: Option<usize>,
    total: usize,
    wrap: WrapMode,
}

impl NavigationCursor {
    /// A wrapping cursor over `total` items with nothing focused.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            focused: None,
            total,
            wrap: WrapMode::Wrap,
        }
    }

    /// Set the wrap behavior.
    #[must_use]
    pub const fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// The focused index, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The focused index with `-1` standing for "nothing focused".
    #[must_use]
    pub fn focused_index(&self) -> isize {
        self.focused
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Number of items the cursor ranges over.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Clear the focus.
    pub fn reset(&mut self) {
        self.focused = None;
    }

    /// Point the cursor at a new result set of `total` items.
    ///
    /// Always clears the focus, even if `total` is unchanged: a different set
    /// of the same size is still a different set.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.focused = None;
    }

    /// Focus `index` directly (for example on pointer hover).
    ///
    /// Returns `false` and leaves the cursor alone if `index` is out of range.
    pub fn focus(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }
        self.focused = Some(index);
        true
    }

    /// Move down one item. Returns the new focus, or `None` if nothing moved.
    pub fn move_next(&mut self) -> Option<usize> {
        self.step(Step::Forward)
    }

    /// Move up one item. Returns the new focus, or `None` if nothing moved.
    pub fn move_prev(&mut self) -> Option<usize> {
        self.step(Step::Backward)
    }

    /// Jump to the first item.
    pub fn move_first(&mut self) -> Option<usize> {
        self.jump(Step::Forward)
    }

    /// Jump to the last item.
    pub fn move_last(&mut self) -> Option<usize> {
        self.jump(Step::Backward)
    }

    /// Apply a movement key. Keys other than arrows, Home and End are ignored.
    pub fn apply(&mut self, key: Key) -> Option<usize> {
        match key {
            Key::ArrowDown => self.move_next(),
            Key::ArrowUp => self.move_prev(),
            Key::Home => self.move_first(),
            Key::End => self.move_last(),
            _ => None,
        }
    }

    fn step(&mut self, step: Step) -> Option<usize> {
        let next = step_enabled(self.focused, self.total, step, self.wrap, |_| true)?;
        self.focused = Some(next);
        Some(next)
    }

    fn jump(&mut self, step: Step) -> Option<usize> {
        let next = step_enabled(None, self.total, step, self.wrap, |_| true)?;
        self.focused = Some(next);
        Some(next)
    }
}
