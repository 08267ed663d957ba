// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tokens: the design tokens Trellis components are styled with.
//!
//! - [`Rgb`]: 24-bit colors with `#rrggbb` parsing and formatting.
//! - [`ShadeRamp`]: ten shades (50 to 900) derived from one base color.
//! - [`BrandColors`] and [`Palette`]: five overridable brand colors plus a
//!   fixed neutral, each expanded to a ramp.
//! - [`Theme`]: the resolved token set, looked up by [`Role`] and [`Shade`].
//! - [`spacing`], [`radius`] and [`typography`]: fixed scales.
//!
//! ## Example
//!
//! ```
//! use trellis_tokens::{BrandColors, Rgb, Role, Shade, Theme};
//!
//! let brand = BrandColors {
//!     primary: Rgb::parse_hex("#00ffb6").unwrap(),
//!     ..BrandColors::default()
//! };
//! let theme = Theme::with_brand(brand);
//! assert_eq!(theme.color(Role::Primary, Shade::S500).to_string(), "#00ffb6");
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`Rgb`] as a hex string and [`BrandColors`] as a
//!   map of hex strings, so brand overrides can live in a config file.

#![no_std]

extern crate alloc;

mod brand;
mod color;
mod ramp;
mod scale;
mod theme;

pub use brand::{BrandColors, NEUTRAL_BASE, Palette, Role};
pub use color::{ColorError, Rgb};
pub use ramp::{Shade, ShadeRamp};
pub use scale::{FontWeight, TextStyle, radius, spacing, typography};
pub use theme::Theme;
