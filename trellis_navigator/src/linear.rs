// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear traversal over a dense index strip with optional disabled entries.

/// Wrap behavior at the ends of a strip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the ends; stepping past an end yields nothing.
    Never,
    /// Wrap from the last entry to the first and vice versa.
    #[default]
    Wrap,
}

/// Direction of a linear step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

/// Find the next enabled index in `0..len` starting from `origin`.
///
/// - With no origin, [`Step::Forward`] picks the first enabled index and
///   [`Step::Backward`] the last.
/// - Disabled indices are skipped.
/// - At an end, [`WrapMode::Wrap`] continues from the other end while
///   [`WrapMode::Never`] yields `None`.
///
/// Each index is visited at most once, so a strip with nothing enabled yields
/// `None` rather than looping.
///
/// ```
/// use trellis_navigator::{Step, WrapMode, step_enabled};
///
/// let enabled = [true, false, true];
/// let next = |origin| step_enabled(origin, 3, Step::Forward, WrapMode::Wrap, |i| enabled[i]);
/// assert_eq!(next(None), Some(0));
/// assert_eq!(next(Some(0)), Some(2));
/// assert_eq!(next(Some(2)), Some(0));
/// ```
pub fn step_enabled(
    origin: Option<usize>,
    len: usize,
    step: Step,
    wrap: WrapMode,
    enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut pos = origin.filter(|&o| o < len);
    for _ in 0..len {
        let candidate = match (pos, step) {
            (None, Step::Forward) => 0,
            (None, Step::Backward) => len - 1,
            (Some(p), Step::Forward) => {
                if p + 1 < len {
                    p + 1
                } else if wrap == WrapMode::Wrap {
                    0
                } else {
                    return None;
                }
            }
            (Some(p), Step::Backward) => {
                if p > 0 {
                    p - 1
                } else if wrap == WrapMode::Wrap {
                    len - 1
                } else {
                    return None;
                }
            }
        };
        if enabled(candidate) {
            return Some(candidate);
        }
        pos = Some(candidate);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(_: usize) -> bool {
        true
    }

    #[test]
    fn empty_strip_yields_nothing() {
        assert_eq!(step_enabled(None, 0, Step::Forward, WrapMode::Wrap, all), None);
        assert_eq!(step_enabled(Some(0), 0, Step::Backward, WrapMode::Wrap, all), None);
    }

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(step_enabled(Some(2), 3, Step::Forward, WrapMode::Wrap, all), Some(0));
        assert_eq!(step_enabled(Some(0), 3, Step::Backward, WrapMode::Wrap, all), Some(2));
        assert_eq!(step_enabled(None, 3, Step::Backward, WrapMode::Wrap, all), Some(2));
    }

    #[test]
    fn never_stops_at_edges() {
        assert_eq!(step_enabled(Some(2), 3, Step::Forward, WrapMode::Never, all), None);
        assert_eq!(step_enabled(Some(0), 3, Step::Backward, WrapMode::Never, all), None);
    }

    #[test]
    fn skips_disabled_entries() {
        let enabled = [true, false, false, true];
        let is = |i: usize| enabled[i];
        assert_eq!(step_enabled(Some(0), 4, Step::Forward, WrapMode::Never, is), Some(3));
        assert_eq!(step_enabled(Some(3), 4, Step::Backward, WrapMode::Never, is), Some(0));
        assert_eq!(step_enabled(None, 4, Step::Backward, WrapMode::Never, |i| i < 2), Some(1));
    }

    #[test]
    fn nothing_enabled_terminates() {
        assert_eq!(step_enabled(Some(1), 5, Step::Forward, WrapMode::Wrap, |_| false), None);
    }

    #[test]
    fn out_of_range_origin_is_treated_as_none() {
        assert_eq!(step_enabled(Some(9), 3, Step::Forward, WrapMode::Wrap, all), Some(0));
    }

    #[test]
    fn lone_enabled_origin_stays_put_when_wrapping() {
        assert_eq!(step_enabled(Some(1), 3, Step::Forward, WrapMode::Wrap, |i| i == 1), Some(1));
    }
}
