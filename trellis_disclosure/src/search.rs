// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search input with a filtered, grouped suggestion dropdown.

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use trellis_dismiss::{DismissHost, DismissReason, OpenChange};
use trellis_navigator::{
    Key, KeyboardNavigator, NavOutcome, OptionList, ResultGroup, ResultSet, SearchOption,
};
use trellis_placement::Positioned;

use crate::overlay::drive;
use crate::{Observers, Overlay, OverlayEvent, SubscriptionId};

/// Events from a [`SearchDropdown`].
#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    /// The dropdown opened or closed (or asked to, when controlled).
    OpenChange(OpenChange),
    /// The dropdown was positioned.
    Placed(Positioned),
    /// The query text changed.
    Search(String),
    /// The highlighted suggestion moved.
    Highlight(Option<usize>),
    /// A suggestion was chosen.
    Select(SearchOption),
    /// The filter button next to the input was pressed.
    FilterClick,
    /// The input should gain (`true`) or lose (`false`) keyboard focus.
    InputFocus(bool),
}

impl From<OverlayEvent> for SearchEvent {
    fn from(event: OverlayEvent) -> Self {
        match event {
            OverlayEvent::OpenChange(change) => Self::OpenChange(change),
            OverlayEvent::Placed(p) => Self::Placed(p),
        }
    }
}

/// A search box whose dropdown lists the options matching the query.
///
/// Options are grouped by category, and the keyboard walks them in the same
/// order they are displayed. Typing opens the dropdown and clears the
/// highlight; `Enter` picks the highlighted option, fills the input with its
/// label and closes; `Escape` closes and drops input focus.
///
/// ```
/// use trellis_disclosure::{SearchDropdown, SearchEvent};
/// use trellis_dismiss::{DismissHost, OpenChange};
/// use trellis_navigator::{Key, OptionList, SearchOption};
///
/// struct Host;
/// impl DismissHost for Host {
///     fn open_changed(&mut self, _: OpenChange) {}
/// }
///
/// let options = OptionList::new(vec![
///     SearchOption::new("a", "Apple", "apple"),
///     SearchOption::new("b", "Banana", "banana"),
/// ])
/// .unwrap();
/// let mut search = SearchDropdown::new(options);
/// search.set_query("an", &mut Host);
/// assert_eq!(search.results().len(), 1);
///
/// search.key_down(Key::ArrowDown, &mut Host);
/// search.key_down(Key::Enter, &mut Host);
/// assert_eq!(search.query(), "Banana");
/// assert!(!search.is_open());
/// assert_eq!(search.focused_index(), -1);
/// ```
#[derive(Debug)]
pub struct SearchDropdown {
    overlay: Overlay,
    options: OptionList,
    query: String,
    results: ResultSet,
    navigator: KeyboardNavigator,
    input_focused: bool,
    observers: Observers<SearchEvent>,
}

impl SearchDropdown {
    /// An uncontrolled, closed dropdown over `options`.
    #[must_use]
    pub fn new(options: OptionList) -> Self {
        Self::from_props(None, false, options)
    }

    /// Build from an `open`/`default_open` prop pair.
    #[must_use]
    pub fn from_props(open: Option<bool>, default_open: bool, options: OptionList) -> Self {
        let results = options.filter("");
        let mut navigator = KeyboardNavigator::new();
        navigator.set_results(results.len());
        Self {
            overlay: Overlay::from_props(open, default_open),
            options,
            query: String::new(),
            results,
            navigator,
            input_focused: false,
            observers: Observers::new(),
        }
    }

    /// Listen for search events.
    pub fn subscribe(&mut self, callback: impl FnMut(&SearchEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// The imperative handle for moving input focus.
    pub fn handle(&mut self) -> SearchHandle<'_> {
        SearchHandle { search: self }
    }

    /// The underlying overlay.
    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether the dropdown should be rendered.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.overlay.content_visible()
    }

    /// Whether the input has keyboard focus.
    #[must_use]
    pub const fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// The current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All options.
    #[must_use]
    pub const fn options(&self) -> &OptionList {
        &self.options
    }

    /// The options matching the query, in display order.
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Matching options grouped by category, for rendering.
    pub fn groups(&self) -> impl Iterator<Item = ResultGroup<'_>> + '_ {
        self.results.groups(&self.options)
    }

    /// The highlighted display position.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.navigator.focused()
    }

    /// The highlighted display position, or `-1` when nothing is highlighted.
    #[must_use]
    pub fn focused_index(&self) -> isize {
        self.navigator.cursor().focused_index()
    }

    /// The highlighted option.
    #[must_use]
    pub fn focused_option(&self) -> Option<&SearchOption> {
        self.focused()
            .and_then(|p| self.results.get(&self.options, p))
    }

    /// Replace the option list; filtering is redone and the highlight cleared.
    pub fn set_options(&mut self, options: OptionList) {
        self.options = options;
        self.refilter();
    }

    /// The user edited the query.
    ///
    /// Emits [`SearchEvent::Search`] and opens the dropdown when the text is
    /// not empty. Returns `false` if the text did not change.
    pub fn set_query(&mut self, query: impl Into<String>, host: &mut impl DismissHost) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.refilter();
        tracing::debug!(query = %self.query, matches = self.results.len(), "query changed");
        self.observers.notify(&SearchEvent::Search(self.query.clone()));
        if !self.query.is_empty() {
            drive(&mut self.overlay, &mut self.observers, |o| o.open(host));
        }
        true
    }

    /// A key press in the input.
    pub fn key_down(&mut self, key: Key, host: &mut impl DismissHost) -> NavOutcome {
        if !self.overlay.is_open() {
            match key {
                Key::ArrowDown | Key::ArrowUp => {
                    drive(&mut self.overlay, &mut self.observers, |o| o.open(host));
                    if !self.overlay.is_open() {
                        return NavOutcome::Ignored;
                    }
                }
                Key::Escape => {
                    self.set_input_focus(false);
                    return NavOutcome::Dismiss;
                }
                _ => return NavOutcome::Ignored,
            }
        }
        let outcome = self.navigator.handle(key);
        match outcome {
            NavOutcome::Moved(position) => {
                self.observers.notify(&SearchEvent::Highlight(Some(position)));
            }
            NavOutcome::Commit(position) => self.commit(position, host),
            NavOutcome::Dismiss => {
                drive(&mut self.overlay, &mut self.observers, |o| {
                    o.close_with(DismissReason::Escape, host)
                });
                self.set_input_focus(false);
            }
            NavOutcome::Ignored => {}
        }
        outcome
    }

    /// The pointer moved over the suggestion at display `position`.
    pub fn hover(&mut self, position: usize) {
        if !self.overlay.is_open() {
            return;
        }
        if self.navigator.focused() != Some(position) && self.navigator.hover(position) {
            self.observers.notify(&SearchEvent::Highlight(Some(position)));
        }
    }

    /// The suggestion at display `position` was clicked.
    pub fn select(&mut self, position: usize, host: &mut impl DismissHost) -> bool {
        if position >= self.results.len() {
            return false;
        }
        self.navigator.reset();
        self.commit(position, host);
        true
    }

    /// The filter button was pressed.
    pub fn filter_click(&mut self) {
        self.observers.notify(&SearchEvent::FilterClick);
    }

    /// A global pointer-down; closes the dropdown when outside it and the
    /// input.
    pub fn pointer_down(&mut self, position: Point, host: &mut impl DismissHost) -> bool {
        let closed = drive(&mut self.overlay, &mut self.observers, |o| {
            o.on_pointer_down(position, host)
        })
        .is_some();
        if closed && !self.overlay.is_open() {
            self.navigator.reset();
        }
        closed
    }

    /// Attach the listeners an initially open dropdown needs.
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

    /// Open the dropdown.
    pub fn open(&mut self, host: &mut impl DismissHost) -> bool {
        drive(&mut self.overlay, &mut self.observers, |o| o.open(host)).is_some()
    }

    /// Close the dropdown and clear the highlight.
    pub fn close(&mut self, host: &mut impl DismissHost) -> bool {
        let requested = drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Explicit, host)
        })
        .is_some();
        if !self.overlay.is_open() {
            self.navigator.reset();
        }
        requested
    }

    /// Flip the open state.
    pub fn toggle(&mut self, host: &mut impl DismissHost) -> bool {
        if self.overlay.is_open() {
            self.close(host)
        } else {
            self.open(host)
        }
    }

    /// Enable or disable closing on presses outside the input and dropdown.
    pub fn set_outside_click_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_outside_click_enabled(enabled, host);
    }

    /// Enable or disable the global Escape listener.
    ///
    /// Escape typed into the input is handled by [`key_down`](Self::key_down)
    /// either way.
    pub fn set_escape_enabled(&mut self, enabled: bool, host: &mut impl DismissHost) {
        self.overlay.set_escape_enabled(enabled, host);
    }

    /// Apply the caller's `open` prop in controlled mode.
    pub fn set_open(&mut self, open: bool, host: &mut impl DismissHost) -> bool {
        let mut changed = false;
        drive(&mut self.overlay, &mut self.observers, |o| {
            changed = o.set_open(open, host);
            None
        });
        if changed && !open {
            self.navigator.reset();
        }
        changed
    }

    /// The input was laid out; the dropdown anchors to it.
    pub fn set_input_bounds(&mut self, bounds: Option<Rect>) {
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.set_trigger_bounds(bounds);
            None
        });
    }

    /// The dropdown was measured.
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

    fn refilter(&mut self) {
        self.results = self.options.filter(&self.query);
        self.navigator.set_results(self.results.len());
    }

    fn commit(&mut self, position: usize, host: &mut impl DismissHost) {
        let Some(option) = self.results.get(&self.options, position).cloned() else {
            return;
        };
        tracing::debug!(id = %option.id, "suggestion selected");
        self.query.clone_from(&option.label);
        self.refilter();
        self.observers.notify(&SearchEvent::Select(option));
        drive(&mut self.overlay, &mut self.observers, |o| {
            o.close_with(DismissReason::Select, host)
        });
    }

    fn set_input_focus(&mut self, focused: bool) {
        if self.input_focused != focused {
            self.input_focused = focused;
            self.observers.notify(&SearchEvent::InputFocus(focused));
        }
    }
}

/// Imperative access to a [`SearchDropdown`]'s input focus.
#[derive(Debug)]
pub struct SearchHandle<'a> {
    search: &'a mut SearchDropdown,
}

impl SearchHandle<'_> {
    /// Move keyboard focus into the input.
    pub fn focus(&mut self) {
        self.search.set_input_focus(true);
    }

    /// Remove keyboard focus from the input.
    pub fn blur(&mut self) {
        self.search.set_input_focus(false);
    }
}
