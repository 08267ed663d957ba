// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved token set: brand colors and the palette built from them.

use crate::{BrandColors, Palette, Rgb, Role, Shade};

/// The resolved token set components read from.
///
/// A theme is cheap to copy and holds no references, so hosts usually keep one
/// in their root context and hand copies to components.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    brand: BrandColors,
    palette: Palette,
}

impl Theme {
    /// Build a theme from brand colors.
    #[must_use]
    pub fn with_brand(brand: BrandColors) -> Self {
        tracing::debug!(
            primary = %brand.primary,
            secondary = %brand.secondary,
            "building theme palette"
        );
        Self {
            brand,
            palette: Palette::from_brand(&brand),
        }
    }

    /// The brand colors this theme was built from.
    #[must_use]
    pub const fn brand(&self) -> &BrandColors {
        &self.brand
    }

    /// All shade ramps.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The color for `role` at `shade`.
    #[must_use]
    pub const fn color(&self, role: Role, shade: Shade) -> Rgb {
        self.palette.color(role, shade)
    }

    /// Text color with enough contrast to sit on `role`'s base shade.
    ///
    /// Uses the channel sum as a lightness proxy: light backgrounds get the
    /// darkest neutral, dark ones get white.
    #[must_use]
    pub const fn on_color(&self, role: Role) -> Rgb {
        let bg = self.color(role, Shade::S500);
        if bg.channel_sum() > 3 * 160 {
            self.color(Role::Neutral, Shade::S900)
        } else {
            Rgb::WHITE
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: BrandColors::default(),
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_override_replaces_primary_ramp() {
        let brand = BrandColors {
            primary: Rgb::new(0x00, 0xff, 0xb6),
            ..BrandColors::default()
        };
        let theme = Theme::with_brand(brand);
        assert_eq!(theme.color(Role::Primary, Shade::S500), brand.primary);
        assert_eq!(
            theme.color(Role::Danger, Shade::S500),
            Theme::default().color(Role::Danger, Shade::S500)
        );
    }

    #[test]
    fn neutral_ramp_ignores_brand() {
        let brand = BrandColors {
            primary: Rgb::BLACK,
            secondary: Rgb::BLACK,
            success: Rgb::BLACK,
            warning: Rgb::BLACK,
            danger: Rgb::BLACK,
        };
        let theme = Theme::with_brand(brand);
        assert_eq!(theme.color(Role::Neutral, Shade::S500), crate::NEUTRAL_BASE);
    }

    #[test]
    fn on_color_contrasts() {
        let light = Theme::with_brand(BrandColors {
            primary: Rgb::new(0xfe, 0xf0, 0x8a),
            ..BrandColors::default()
        });
        assert_ne!(light.on_color(Role::Primary), Rgb::WHITE);
        assert_eq!(Theme::default().on_color(Role::Danger), Rgb::WHITE);
    }
}
