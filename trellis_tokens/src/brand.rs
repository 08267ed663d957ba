// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brand colors and the palette derived from them.

use crate::{Rgb, Shade, ShadeRamp};

/// A color role components look colors up by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Main brand color: primary buttons, focus rings, links.
    Primary,
    /// Accent color.
    Secondary,
    /// Positive outcomes.
    Success,
    /// Needs attention.
    Warning,
    /// Destructive actions and errors.
    Danger,
    /// Greys for text, borders and surfaces.
    Neutral,
}

/// The five brand colors an application may override.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrandColors {
    /// Main brand color.
    pub primary: Rgb,
    /// Accent color.
    pub secondary: Rgb,
    /// Positive outcomes.
    pub success: Rgb,
    /// Needs attention.
    pub warning: Rgb,
    /// Destructive actions and errors.
    pub danger: Rgb,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: Rgb::from_u32(0x3b_82_f6),
            secondary: Rgb::from_u32(0x8b_5c_f6),
            success: Rgb::from_u32(0x22_c5_5e),
            warning: Rgb::from_u32(0xf5_9e_0b),
            danger: Rgb::from_u32(0xef_44_44),
        }
    }
}

/// Base color of the neutral ramp.
pub const NEUTRAL_BASE: Rgb = Rgb::from_u32(0x6b_72_80);

/// Shade ramps for every [`Role`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    primary: ShadeRamp,
    secondary: ShadeRamp,
    success: ShadeRamp,
    warning: ShadeRamp,
    danger: ShadeRamp,
    neutral: ShadeRamp,
}

impl Palette {
    /// Derive ramps for each brand color plus the fixed neutral ramp.
    #[must_use]
    pub const fn from_brand(brand: &BrandColors) -> Self {
        Self {
            primary: ShadeRamp::generate(brand.primary),
            secondary: ShadeRamp::generate(brand.secondary),
            success: ShadeRamp::generate(brand.success),
            warning: ShadeRamp::generate(brand.warning),
            danger: ShadeRamp::generate(brand.danger),
            neutral: ShadeRamp::generate(NEUTRAL_BASE),
        }
    }

    /// The ramp for `role`.
    #[must_use]
    pub const fn ramp(&self, role: Role) -> &ShadeRamp {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Danger => &self.danger,
            Role::Neutral => &self.neutral,
        }
    }

    /// The color for `role` at `shade`.
    #[must_use]
    pub const fn color(&self, role: Role, shade: Shade) -> Rgb {
        self.ramp(role).get(shade)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_brand(&BrandColors::default())
    }
}
