// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guided product tours.
//!
//! A [`Tour`] plays an ordered list of [`TourStep`]s, each pointing at an
//! element of the host UI. Highlighting and scrolling to targets is the job
//! of an external overlay engine; the tour only tracks which step is current
//! and accepts the engine's lifecycle events as the authoritative source of
//! step changes ([`Tour::engine_event`]). [`Tour::next_step`] and
//! [`Tour::prev_step`] drive the same transitions for hosts without an
//! engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use kurbo::{Rect, Size};
use trellis_i18n::Translate;
use trellis_i18n::builtin::keys;
use trellis_placement::{Placement, PlacementOptions, Positioned, position};

use crate::{Observers, SubscriptionId};

/// One stop of a tour.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourStep {
    /// Identifier, unique within a tour.
    pub id: String,
    /// Selector the overlay engine resolves to the highlighted element.
    pub target: String,
    /// Heading.
    pub title: String,
    /// Body text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: String,
    /// Sort key; steps play in ascending order, ties keep their input order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: i32,
    /// Inactive steps are left out of playback.
    #[cfg_attr(feature = "serde", serde(default = "active_by_default"))]
    pub active: bool,
    /// Where the step's popover sits relative to the target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Placement,
}

#[cfg(feature = "serde")]
const fn active_by_default() -> bool {
    true
}

impl TourStep {
    /// An active step with order 0 and the default placement.
    pub fn new(
        id: impl Into<String>,
        target: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            title: title.into(),
            body: body.into(),
            order: 0,
            active: true,
            placement: Placement::default(),
        }
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set whether the step plays.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the popover placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// Why a list of tour steps was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The step at `index` has an empty id.
    EmptyId {
        /// Position in the input list.
        index: usize,
    },
    /// Two steps share an id.
    DuplicateId(String),
    /// The step has no target selector.
    EmptyTarget(String),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "tour step {index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate tour step id '{id}'"),
            Self::EmptyTarget(id) => write!(f, "tour step '{id}' has no target"),
        }
    }
}

impl core::error::Error for StepError {}

/// Check ids and targets, then keep the active steps sorted by order.
///
/// Validation covers inactive steps too, so a bad step is reported even
/// while it is switched off.
pub fn playback_order(steps: Vec<TourStep>) -> Result<Vec<TourStep>, StepError> {
    validate(&steps)?;
    let mut active: Vec<TourStep> = steps.into_iter().filter(|s| s.active).collect();
    active.sort_by_key(|s| s.order);
    Ok(active)
}

fn validate(steps: &[TourStep]) -> Result<(), StepError> {
    let mut seen = HashSet::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        if step.id.is_empty() {
            return Err(StepError::EmptyId { index });
        }
        if !seen.insert(step.id.as_str()) {
            return Err(StepError::DuplicateId(step.id.clone()));
        }
        if step.target.trim().is_empty() {
            return Err(StepError::EmptyTarget(step.id.clone()));
        }
    }
    Ok(())
}

/// Where a tour is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TourState {
    /// Not playing.
    Idle,
    /// Showing the step at `index`.
    Running {
        /// Index into the playback order.
        index: usize,
    },
}

/// Events a tour emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourEvent {
    /// Playback began with `total` steps.
    Started {
        /// Number of steps that will play.
        total: usize,
    },
    /// The current step changed.
    StepChanged {
        /// New index.
        index: usize,
        /// Id of the new step.
        id: String,
    },
    /// The last step was passed.
    Completed,
    /// The user left before the end.
    Skipped,
}

/// Lifecycle events reported by the overlay engine.
///
/// The engine owns DOM-level sequencing, so the tour makes no assumption
/// about when `StepBefore` and `StepAfter` fire relative to each other,
/// only that each transition is announced once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine is about to show the step at `index`.
    StepBefore {
        /// Index into the playback order.
        index: usize,
    },
    /// The engine finished showing the step at `index`.
    StepAfter {
        /// Index into the playback order.
        index: usize,
    },
    /// The target of the step at `index` could not be found.
    TargetNotFound {
        /// Index into the playback order.
        index: usize,
    },
    /// The engine's overlay was closed.
    Close,
}

/// Button labels for the current step, translated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourLabels {
    /// "Next", or "Done" on the last step.
    pub next: String,
    /// "Back"; absent on the first step.
    pub prev: Option<String>,
    /// "Skip".
    pub skip: String,
    /// "2 of 5".
    pub progress: String,
}

/// A tour's playback state.
#[derive(Debug, Default)]
pub struct Tour {
    steps: Vec<TourStep>,
    index: Option<usize>,
    observers: Observers<TourEvent>,
}

impl Tour {
    /// An idle tour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for tour events.
    pub fn subscribe(&mut self, callback: impl FnMut(&TourEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TourState {
        match self.index {
            Some(index) => TourState::Running { index },
            None => TourState::Idle,
        }
    }

    /// Whether a tour is playing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.index.is_some()
    }

    /// The current step index.
    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        self.index
    }

    /// The current step.
    #[must_use]
    pub fn current_step(&self) -> Option<&TourStep> {
        self.index.and_then(|i| self.steps.get(i))
    }

    /// The steps being played, in playback order.
    #[must_use]
    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Begin playback of `steps`.
    ///
    /// The steps are validated, inactive ones dropped and the rest sorted by
    /// order. Returns `Ok(false)` and stays idle when no step is active.
    /// Starting while running skips the current run, then restarts from the
    /// first step. A rejected or empty run leaves the current one playing.
    pub fn start(&mut self, steps: Vec<TourStep>) -> Result<bool, StepError> {
        let steps = playback_order(steps)?;
        if steps.is_empty() {
            tracing::debug!("tour has no active steps; staying idle");
            return Ok(false);
        }
        if self.is_running() {
            self.finish(TourEvent::Skipped);
        }
        let total = steps.len();
        tracing::debug!(total, "tour started");
        self.steps = steps;
        self.observers.notify(&TourEvent::Started { total });
        self.go_to(0);
        Ok(true)
    }

    /// Advance; past the last step the tour completes.
    pub fn next_step(&mut self) -> bool {
        let Some(index) = self.index else {
            return false;
        };
        if index + 1 < self.steps.len() {
            self.go_to(index + 1);
        } else {
            self.finish(TourEvent::Completed);
        }
        true
    }

    /// Go back one step. Does nothing on the first step.
    pub fn prev_step(&mut self) -> bool {
        match self.index {
            Some(index) if index > 0 => {
                self.go_to(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Leave the tour early.
    pub fn skip(&mut self) -> bool {
        if self.index.is_none() {
            return false;
        }
        self.finish(TourEvent::Skipped);
        true
    }

    /// Apply a lifecycle event from the overlay engine.
    ///
    /// Events for indices outside the playback order, or arriving while idle,
    /// are stale and ignored. Returns whether the tour state changed.
    pub fn engine_event(&mut self, event: EngineEvent) -> bool {
        let Some(current) = self.index else {
            tracing::trace!(?event, "engine event while idle");
            return false;
        };
        match event {
            EngineEvent::StepBefore { index } if index < self.steps.len() => {
                if index == current {
                    return false;
                }
                self.go_to(index);
                true
            }
            EngineEvent::StepAfter { index } if index < self.steps.len() => {
                tracing::trace!(index, "engine finished step");
                false
            }
            EngineEvent::TargetNotFound { index } if index == current => {
                if let Some(step) = self.current_step() {
                    tracing::warn!(id = %step.id, target = %step.target, "tour target not found; moving on");
                }
                self.next_step()
            }
            EngineEvent::Close => {
                let last = current + 1 == self.steps.len();
                self.finish(if last {
                    TourEvent::Completed
                } else {
                    TourEvent::Skipped
                });
                true
            }
            _ => {
                tracing::trace!(?event, "stale engine event");
                false
            }
        }
    }

    /// Translated button labels for the current step.
    pub fn labels(&self, i18n: &impl Translate) -> Option<TourLabels> {
        let index = self.index?;
        let last = index + 1 == self.steps.len();
        let current = (index + 1).to_string();
        let total = self.steps.len().to_string();
        Some(TourLabels {
            next: i18n.translate(if last { keys::TOUR_DONE } else { keys::TOUR_NEXT }),
            prev: (index > 0).then(|| i18n.translate(keys::TOUR_PREV)),
            skip: i18n.translate(keys::TOUR_SKIP),
            progress: i18n.translate_with(
                keys::TOUR_PROGRESS,
                &[("current", current.as_str()), ("total", total.as_str())],
            ),
        })
    }

    /// Position the current step's popover next to its resolved target.
    #[must_use]
    pub fn position_current(
        &self,
        target: Rect,
        content: Size,
        viewport: Rect,
        options: &PlacementOptions,
    ) -> Option<Positioned> {
        let step = self.current_step()?;
        Some(position(target, content, step.placement, viewport, options))
    }

    fn go_to(&mut self, index: usize) {
        self.index = Some(index);
        tracing::debug!(index, "tour step changed");
        if let Some(step) = self.steps.get(index) {
            let event = TourEvent::StepChanged {
                index,
                id: step.id.clone(),
            };
            self.observers.notify(&event);
        }
    }

    fn finish(&mut self, event: TourEvent) {
        tracing::debug!(?event, "tour finished");
        self.index = None;
        self.observers.notify(&event);
    }
}

/// Application-wide tour registry, created once at the root and passed to
/// the parts of the UI that start tours.
///
/// Tours are registered by name up front, validated at registration, and at
/// most one plays at a time.
#[derive(Debug, Default)]
pub struct TourContext {
    registered: HashMap<String, Vec<TourStep>>,
    tour: Tour,
    playing: Option<String>,
}

impl TourContext {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the tour called `name`.
    ///
    /// Steps are validated here, so a broken tour is reported at startup
    /// rather than on first play.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        steps: Vec<TourStep>,
    ) -> Result<(), StepError> {
        let steps = playback_order(steps)?;
        self.registered.insert(name.into(), steps);
        Ok(())
    }

    /// Whether a tour called `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.registered.contains_key(name)
    }

    /// Start the tour called `name`.
    ///
    /// Returns `false` if it is unknown or has no active steps.
    pub fn start(&mut self, name: &str) -> bool {
        let Some(steps) = self.registered.get(name) else {
            tracing::warn!(name, "no tour registered under this name");
            return false;
        };
        match self.tour.start(steps.clone()) {
            Ok(true) => {
                self.playing = Some(name.into());
                true
            }
            Ok(false) => false,
            Err(err) => {
                tracing::warn!(name, %err, "registered tour failed validation");
                false
            }
        }
    }

    /// Name of the tour that was last started, while it is still running.
    #[must_use]
    pub fn playing(&self) -> Option<&str> {
        if self.tour.is_running() {
            self.playing.as_deref()
        } else {
            None
        }
    }

    /// The shared tour player.
    #[must_use]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Mutable access for navigation and engine events.
    pub fn tour_mut(&mut self) -> &mut Tour {
        &mut self.tour
    }
}
