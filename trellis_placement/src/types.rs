// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public placement types: sides, alignments and options.

/// The side of the trigger an overlay is placed on.
///
/// Deserializing goes through [`Side::from_name`], so unknown names decode
/// as [`Side::Bottom`] instead of failing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Right of the trigger.
    Right,
    /// Below the trigger.
    #[default]
    Bottom,
    /// Left of the trigger.
    Left,
}

impl Side {
    /// The side across the trigger from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the main axis of this side is vertical (top or bottom).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Parse a side name, falling back to [`Side::Bottom`] for anything
    /// unrecognized.
    ///
    /// Matching is ASCII case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("top") {
            Self::Top
        } else if name.eq_ignore_ascii_case("right") {
            Self::Right
        } else if name.eq_ignore_ascii_case("left") {
            Self::Left
        } else {
            Self::Bottom
        }
    }

    /// The lowercase name of this side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Cross-axis alignment of an overlay relative to its trigger.
///
/// Deserializing goes through [`Align::from_name`], so unknown names decode
/// as [`Align::Center`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Align the content's leading edge with the trigger's leading edge.
    Start,
    /// Center the content on the trigger's midpoint.
    #[default]
    Center,
    /// Align the content's trailing edge with the trigger's trailing edge.
    End,
}

impl Align {
    /// Parse an alignment name, falling back to [`Align::Center`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("start") {
            Self::Start
        } else if name.eq_ignore_ascii_case("end") {
            Self::End
        } else {
            Self::Center
        }
    }

    /// The lowercase name of this alignment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Decodes a name string with a lenient parser.
#[cfg(feature = "serde")]
struct NameVisitor<T> {
    parse: fn(&str) -> T,
    expecting: &'static str,
}

#[cfg(feature = "serde")]
impl<T> serde::de::Visitor<'_> for NameVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
        Ok((self.parse)(v))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Side {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NameVisitor {
            parse: Self::from_name,
            expecting: "a side name",
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Align {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NameVisitor {
            parse: Self::from_name,
            expecting: "an alignment name",
        })
    }
}

/// A side and alignment pair.
///
/// Placements are derived values: recompute them whenever the overlay opens
/// or the viewport changes instead of storing them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Side of the trigger.
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Align,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }
}

/// Tuning for [`resolve_with`](crate::resolve_with).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementOptions {
    /// Gap between trigger and content along the main axis.
    pub side_offset: f64,
    /// Whether to flip to the opposite side on overflow.
    pub avoid_collisions: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            side_offset: 0.0,
            avoid_collisions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_defaults() {
        assert_eq!(Side::from_name("TOP"), Side::Top);
        assert_eq!(Side::from_name(" left "), Side::Left);
        assert_eq!(Side::from_name("diagonal"), Side::Bottom);
        assert_eq!(Side::from_name(""), Side::default());

        assert_eq!(Align::from_name("End"), Align::End);
        assert_eq!(Align::from_name("middle"), Align::Center);
    }

    #[test]
    fn opposite_is_an_involution() {
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.opposite().is_vertical(), side.is_vertical());
            assert_eq!(Side::from_name(side.name()), side);
        }
    }
}
