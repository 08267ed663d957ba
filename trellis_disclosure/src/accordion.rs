// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expandable sections.

use smallvec::SmallVec;
use trellis_dismiss::Controllable;

use crate::{Observers, SubscriptionId};

/// Indices of expanded sections, ascending.
pub type Expanded = SmallVec<[usize; 4]>;

/// How many sections may be open at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one section. With `collapsible` false, the open section can
    /// only be closed by opening another.
    Single {
        /// Whether the open section may be closed, leaving none open.
        collapsible: bool,
    },
    /// Any number of sections.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        Self::Single { collapsible: true }
    }
}

/// Emitted when the set of expanded sections changes (or, when controlled,
/// should change).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedChange(pub Expanded);

/// A list of sections that expand and collapse.
///
/// ```
/// use trellis_disclosure::{Accordion, AccordionMode};
///
/// let mut faq = Accordion::new(3, AccordionMode::Single { collapsible: false }, &[]);
/// faq.toggle(0);
/// faq.toggle(2);
/// assert_eq!(faq.expanded().as_slice(), [2]);
/// // Not collapsible: the last open section stays open.
/// assert!(!faq.toggle(2));
/// ```
#[derive(Debug)]
pub struct Accordion {
    count: usize,
    mode: AccordionMode,
    expanded: Controllable<Expanded>,
    observers: Observers<ExpandedChange>,
}

impl Accordion {
    /// An uncontrolled accordion of `count` sections with `default_expanded`
    /// open.
    #[must_use]
    pub fn new(count: usize, mode: AccordionMode, default_expanded: &[usize]) -> Self {
        Self::from_props(count, mode, None, default_expanded)
    }

    /// Build from a `value`/`default_value` prop pair.
    ///
    /// Out-of-range indices are dropped, and in single mode only the first
    /// index is kept.
    #[must_use]
    pub fn from_props(
        count: usize,
        mode: AccordionMode,
        expanded: Option<&[usize]>,
        default_expanded: &[usize],
    ) -> Self {
        Self {
            count,
            mode,
            expanded: Controllable::from_props(
                expanded.map(|e| normalize(e, count, mode)),
                normalize(default_expanded, count, mode),
            ),
            observers: Observers::new(),
        }
    }

    /// Listen for expansion changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&ExpandedChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of sections.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no sections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The expansion mode.
    #[must_use]
    pub const fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Expanded sections, ascending.
    #[must_use]
    pub const fn expanded(&self) -> &Expanded {
        self.expanded.get()
    }

    /// Whether section `index` is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get().contains(&index)
    }

    /// Flip section `index`. Returns whether a change was applied or
    /// requested.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.is_expanded(index) {
            self.collapse(index)
        } else {
            self.expand(index)
        }
    }

    /// Expand section `index`; in single mode this collapses the others.
    pub fn expand(&mut self, index: usize) -> bool {
        if index >= self.count || self.is_expanded(index) {
            return false;
        }
        let next = match self.mode {
            AccordionMode::Single { .. } => smallvec::smallvec![index],
            AccordionMode::Multiple => {
                let mut next = self.expanded.get().clone();
                let at = next.partition_point(|&i| i < index);
                next.insert(at, index);
                next
            }
        };
        self.request(next)
    }

    /// Collapse section `index`, unless it is the last open section of a
    /// non-collapsible single accordion.
    pub fn collapse(&mut self, index: usize) -> bool {
        if !self.is_expanded(index) {
            return false;
        }
        if self.mode == (AccordionMode::Single { collapsible: false }) {
            tracing::trace!(index, "section is not collapsible");
            return false;
        }
        let mut next = self.expanded.get().clone();
        next.retain(|i| *i != index);
        self.request(next)
    }

    /// Apply the caller's `value` prop in controlled mode.
    pub fn set_expanded(&mut self, expanded: &[usize]) -> bool {
        self.expanded
            .sync(normalize(expanded, self.count, self.mode))
    }

    fn request(&mut self, next: Expanded) -> bool {
        let Some(next) = self.expanded.request(next) else {
            return false;
        };
        tracing::debug!(expanded = ?next.as_slice(), "accordion expansion changed");
        self.observers.notify(&ExpandedChange(next));
        true
    }
}

fn normalize(indices: &[usize], count: usize, mode: AccordionMode) -> Expanded {
    let mut out: Expanded = indices.iter().copied().filter(|&i| i < count).collect();
    out.sort_unstable();
    out.dedup();
    if matches!(mode, AccordionMode::Single { .. }) {
        out.truncate(1);
    }
    out
}
