// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide index with optional autoplay.

use trellis_dismiss::Controllable;
use trellis_navigator::{Key, Step, WrapMode, step_enabled};

use crate::{Observers, SubscriptionId};

/// Carousel behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Whether stepping past either end continues from the other.
    pub wrap: bool,
    /// Milliseconds between automatic advances, or `None` for no autoplay.
    pub autoplay_ms: Option<u64>,
    /// Whether hovering the carousel holds autoplay.
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            autoplay_ms: None,
            pause_on_hover: true,
        }
    }
}

/// Emitted when the visible slide changes (or, when controlled, should
/// change).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideChange(pub usize);

/// The visible slide of a carousel.
///
/// Autoplay is driven by host timestamps: call [`tick`](Self::tick) with the
/// current time in milliseconds at or after
/// [`next_deadline`](Self::next_deadline). Any manual navigation restarts
/// the interval. While hovered (with
/// [`pause_on_hover`](CarouselConfig::pause_on_hover)) autoplay holds, and
/// resumes with a full interval when the pointer leaves.
///
/// ```
/// use trellis_disclosure::{Carousel, CarouselConfig};
///
/// let config = CarouselConfig { autoplay_ms: Some(1_000), ..CarouselConfig::default() };
/// let mut carousel = Carousel::new(3, 0, config);
/// carousel.start(0);
/// carousel.tick(1_000);
/// assert_eq!(carousel.index(), 1);
/// ```
#[derive(Debug)]
pub struct Carousel {
    index: Controllable<usize>,
    count: usize,
    config: CarouselConfig,
    deadline: Option<u64>,
    hovered: bool,
    observers: Observers<SlideChange>,
}

impl Carousel {
    /// An uncontrolled carousel of `count` slides starting at `default_index`.
    #[must_use]
    pub fn new(count: usize, default_index: usize, config: CarouselConfig) -> Self {
        Self::from_props(count, None, default_index, config)
    }

    /// Build from a `value`/`default_value` prop pair.
    #[must_use]
    pub fn from_props(
        count: usize,
        index: Option<usize>,
        default_index: usize,
        config: CarouselConfig,
    ) -> Self {
        let clamp = |i: usize| i.min(count.saturating_sub(1));
        Self {
            index: Controllable::from_props(index.map(clamp), clamp(default_index)),
            count,
            config,
            deadline: None,
            hovered: false,
            observers: Observers::new(),
        }
    }

    /// Listen for slide changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&SlideChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// The visible slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        *self.index.get()
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the previous-slide control should be enabled.
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.count > 1 && (self.config.wrap || self.index() > 0)
    }

    /// Whether the next-slide control should be enabled.
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.count > 1 && (self.config.wrap || self.index() + 1 < self.count)
    }

    /// When autoplay next wants a [`tick`](Self::tick), if it is running.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Start autoplay (if configured) from `now`, typically on mount.
    pub fn start(&mut self, now: u64) {
        self.restart(now);
    }

    /// Stop autoplay.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Show the next slide.
    pub fn next(&mut self, now: u64) -> bool {
        self.step(Step::Forward, now)
    }

    /// Show the previous slide.
    pub fn prev(&mut self, now: u64) -> bool {
        self.step(Step::Backward, now)
    }

    /// Show slide `index` (a pagination dot).
    pub fn go_to(&mut self, index: usize, now: u64) -> bool {
        if index >= self.count {
            return false;
        }
        self.restart(now);
        self.request(index)
    }

    /// Arrow keys move between slides.
    pub fn key_down(&mut self, key: Key, now: u64) -> bool {
        match key {
            Key::ArrowRight => self.next(now),
            Key::ArrowLeft => self.prev(now),
            _ => false,
        }
    }

    /// The pointer entered the carousel.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.config.pause_on_hover && self.deadline.take().is_some() {
            tracing::trace!("carousel autoplay paused");
        }
    }

    /// The pointer left the carousel at `now`.
    pub fn pointer_leave(&mut self, now: u64) {
        self.hovered = false;
        self.restart(now);
    }

    /// Apply the caller's `value` prop in controlled mode.
    pub fn set_index(&mut self, index: usize) -> bool {
        self.index.sync(index.min(self.count.saturating_sub(1)))
    }

    /// Advance time; moves to the next slide when the interval elapses.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.step(Step::Forward, now),
            _ => false,
        }
    }

    fn step(&mut self, step: Step, now: u64) -> bool {
        let wrap = if self.config.wrap {
            WrapMode::Wrap
        } else {
            WrapMode::Never
        };
        self.restart(now);
        match step_enabled(Some(self.index()), self.count, step, wrap, |_| true) {
            Some(target) => self.request(target),
            None => false,
        }
    }

    fn request(&mut self, index: usize) -> bool {
        let Some(index) = self.index.request(index) else {
            return false;
        };
        tracing::debug!(index, "slide changed");
        self.observers.notify(&SlideChange(index));
        true
    }

    fn restart(&mut self, now: u64) {
        self.deadline = match self.config.autoplay_ms {
            Some(interval) if self.count > 1 && !(self.hovered && self.config.pause_on_hover) => {
                Some(now.saturating_add(interval))
            }
            _ => None,
        };
    }
}
