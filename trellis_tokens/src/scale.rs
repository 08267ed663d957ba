// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing, radius and typography scales.
//!
//! All lengths are logical pixels on a 4px baseline grid.

/// Spacing scale.
pub mod spacing {
    /// 0px.
    pub const NONE: f64 = 0.0;
    /// 2px.
    pub const XXXS: f64 = 2.0;
    /// 4px.
    pub const XXS: f64 = 4.0;
    /// 8px.
    pub const XS: f64 = 8.0;
    /// 12px.
    pub const SM: f64 = 12.0;
    /// 16px.
    pub const MD: f64 = 16.0;
    /// 24px.
    pub const LG: f64 = 24.0;
    /// 32px.
    pub const XL: f64 = 32.0;
    /// 48px.
    pub const XXL: f64 = 48.0;

    /// Default gap between a trigger and its overlay.
    pub const OVERLAY_OFFSET: f64 = XS;
}

/// Corner radii.
pub mod radius {
    /// Square corners.
    pub const NONE: f64 = 0.0;
    /// Inputs and tags.
    pub const SM: f64 = 4.0;
    /// Cards, popovers.
    pub const MD: f64 = 8.0;
    /// Sheets and dialogs.
    pub const LG: f64 = 16.0;
    /// Fully rounded (pills, avatars).
    pub const FULL: f64 = 9999.0;
}

/// Font weight on the usual 100-900 scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// 400.
    pub const REGULAR: Self = Self(400);
    /// 500.
    pub const MEDIUM: Self = Self(500);
    /// 600.
    pub const SEMIBOLD: Self = Self(600);
    /// 700.
    pub const BOLD: Self = Self(700);
}

/// One entry of the type scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub size: f64,
    /// Line height in logical pixels.
    pub line_height: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl TextStyle {
    const fn new(size: f64, line_height: f64, weight: FontWeight) -> Self {
        Self {
            size,
            line_height,
            weight,
        }
    }
}

/// Type scale.
pub mod typography {
    use super::{FontWeight, TextStyle};

    /// Page titles.
    pub const DISPLAY: TextStyle = TextStyle::new(32.0, 40.0, FontWeight::BOLD);
    /// Section headings.
    pub const HEADING: TextStyle = TextStyle::new(24.0, 32.0, FontWeight::SEMIBOLD);
    /// Card and dialog titles, tour step titles.
    pub const TITLE: TextStyle = TextStyle::new(18.0, 26.0, FontWeight::SEMIBOLD);
    /// Body copy.
    pub const BODY: TextStyle = TextStyle::new(16.0, 24.0, FontWeight::REGULAR);
    /// Buttons and form labels.
    pub const LABEL: TextStyle = TextStyle::new(14.0, 20.0, FontWeight::MEDIUM);
    /// Tooltips, helper text, badges.
    pub const CAPTION: TextStyle = TextStyle::new(12.0, 16.0, FontWeight::REGULAR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_stays_on_the_grid() {
        for step in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ] {
            assert_eq!(step % 4.0, 0.0, "{step} is off the 4px grid");
        }
    }

    #[test]
    fn type_scale_is_descending() {
        let scale = [
            typography::DISPLAY,
            typography::HEADING,
            typography::TITLE,
            typography::BODY,
            typography::LABEL,
            typography::CAPTION,
        ];
        assert!(scale.windows(2).all(|w| w[0].size > w[1].size));
        assert!(scale.iter().all(|s| s.line_height > s.size));
    }
}
