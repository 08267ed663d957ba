// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 24-bit colors and hex notation.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// An opaque sRGB color with 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` value. The top byte is ignored.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is deliberately the low byte of its shifted value."
    )]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (ASCII hex, any case).
    ///
    /// ```
    /// use trellis_tokens::Rgb;
    ///
    /// assert_eq!(Rgb::parse_hex("#00ffb6"), Ok(Rgb::new(0x00, 0xff, 0xb6)));
    /// assert_eq!(Rgb::parse_hex("FA0"), Ok(Rgb::new(0xff, 0xaa, 0x00)));
    /// assert!(Rgb::parse_hex("#12345").is_err());
    /// ```
    pub fn parse_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        match digits.as_bytes() {
            &[r, g, b] => {
                let (r, g, b) = (hex_value(r)?, hex_value(g)?, hex_value(b)?);
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (hex_value(r1)? << 4) | hex_value(r0)?,
                (hex_value(g1)? << 4) | hex_value(g0)?,
                (hex_value(b1)? << 4) | hex_value(b0)?,
            )),
            other => Err(ColorError::InvalidLength(other.len())),
        }
    }

    /// Sum of the three channels, a cheap lightness proxy.
    #[must_use]
    pub const fn channel_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Move each channel towards white by `per_mille / 1000`.
    #[must_use]
    pub const fn lighten(self, per_mille: u16) -> Self {
        Self::new(
            lighten_channel(self.r, per_mille),
            lighten_channel(self.g, per_mille),
            lighten_channel(self.b, per_mille),
        )
    }

    /// Move each channel towards black by `per_mille / 1000`.
    #[must_use]
    pub const fn darken(self, per_mille: u16) -> Self {
        Self::new(
            darken_channel(self.r, per_mille),
            darken_channel(self.g, per_mille),
            darken_channel(self.b, per_mille),
        )
    }
}

fn hex_value(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::InvalidDigit(char::from(c))),
    }
}

const fn clamp_per_mille(per_mille: u16) -> u32 {
    if per_mille > 1000 { 1000 } else { per_mille as u32 }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to 255 before the cast."
)]
const fn lighten_channel(c: u8, per_mille: u16) -> u8 {
    let f = clamp_per_mille(per_mille);
    let c = c as u32;
    let lifted = c + ((255 - c) * f + 500) / 1000;
    if lifted > 255 { 255 } else { lifted as u8 }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Scaling by at most 1000/1000 keeps the value within a byte."
)]
const fn darken_channel(c: u8, per_mille: u16) -> u8 {
    let f = clamp_per_mille(per_mille);
    ((c as u32 * (1000 - f) + 500) / 1000) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        alloc::format!("{value}")
    }
}

/// Why a hex color failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// Expected 3 or 6 hex digits after the optional `#`.
    InvalidLength(usize),
    /// A character was not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(n) => write!(f, "expected 3 or 6 hex digits, found {n}"),
            Self::InvalidDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl core::error::Error for ColorError {}
