// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ten-step shade ramps derived from a single base color.

use crate::Rgb;

/// A step in a shade ramp. [`Shade::S500`] is the base color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    /// Lightest.
    S50,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// The base color.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Darkest.
    S900,
}

impl Shade {
    /// All shades from lightest to darkest.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// The conventional numeric name (`50`, `100`, ..., `900`).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Look a shade up by its numeric name.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// How far this shade moves away from the base color, in per mille.
    ///
    /// Shades below 500 blend towards white, shades above blend towards black.
    const fn factor(self) -> Blend {
        match self {
            Self::S50 => Blend::Lighten(900),
            Self::S100 => Blend::Lighten(750),
            Self::S200 => Blend::Lighten(550),
            Self::S300 => Blend::Lighten(350),
            Self::S400 => Blend::Lighten(150),
            Self::S500 => Blend::Base,
            Self::S600 => Blend::Darken(120),
            Self::S700 => Blend::Darken(280),
            Self::S800 => Blend::Darken(440),
            Self::S900 => Blend::Darken(600),
        }
    }
}

#[derive(Copy, Clone)]
enum Blend {
    Lighten(u16),
    Base,
    Darken(u16),
}

/// Ten shades of one base color.
///
/// ```
/// use trellis_tokens::{Rgb, Shade, ShadeRamp};
///
/// let base = Rgb::parse_hex("#00ffb6").unwrap();
/// let ramp = ShadeRamp::generate(base);
/// assert_eq!(ramp.get(Shade::S500), base);
/// assert!(ramp.get(Shade::S50).channel_sum() > base.channel_sum());
/// assert!(ramp.get(Shade::S900).channel_sum() < base.channel_sum());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShadeRamp {
    shades: [Rgb; 10],
}

impl ShadeRamp {
    /// Derive a ramp from `base`, which becomes [`Shade::S500`] unchanged.
    ///
    /// The curve is fixed: every shade moves a set fraction of the way towards
    /// white (below 500) or black (above 500), so shades get monotonically
    /// darker from 50 to 900. Shade 50 is strictly lighter than the base
    /// unless the base is white; shade 900 is strictly darker unless it is
    /// black.
    #[must_use]
    pub const fn generate(base: Rgb) -> Self {
        let mut shades = [base; 10];
        let mut i = 0;
        while i < Shade::ALL.len() {
            let shade = Shade::ALL[i];
            shades[i] = match shade.factor() {
                Blend::Lighten(f) => base.lighten(f),
                Blend::Base => base,
                Blend::Darken(f) => base.darken(f),
            };
            i += 1;
        }
        Self { shades }
    }

    /// The color for `shade`.
    #[must_use]
    pub const fn get(&self, shade: Shade) -> Rgb {
        self.shades[shade.index()]
    }

    /// The base color (shade 500).
    #[must_use]
    pub const fn base(&self) -> Rgb {
        self.get(Shade::S500)
    }

    /// Shades paired with their names, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgb)> + '_ {
        Shade::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}
