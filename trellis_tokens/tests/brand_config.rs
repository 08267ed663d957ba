// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brand overrides read from JSON.

#![cfg(feature = "serde")]

use trellis_tokens::{BrandColors, Rgb, Role, Shade, Theme};

#[test]
fn brand_colors_decode_from_hex_strings() {
    let raw = r##"{
        "primary": "#00ffb6",
        "secondary": "8b5cf6",
        "success": "#2c5",
        "warning": "#F59E0B",
        "danger": "#ef4444"
    }"##;
    let brand: BrandColors = serde_json::from_str(raw).unwrap();
    assert_eq!(brand.primary, Rgb::new(0x00, 0xff, 0xb6));
    assert_eq!(brand.success, Rgb::new(0x22, 0xcc, 0x55));
    assert_eq!(brand.warning, Rgb::new(0xf5, 0x9e, 0x0b));

    let theme = Theme::with_brand(brand);
    assert_eq!(theme.color(Role::Primary, Shade::S500), brand.primary);
}

#[test]
fn brand_colors_encode_as_lowercase_hex() {
    let json = serde_json::to_value(BrandColors::default()).unwrap();
    assert_eq!(json["primary"], "#3b82f6");
    assert_eq!(json["danger"], "#ef4444");
}

#[test]
fn bad_hex_is_a_decode_error() {
    let raw = r##"{
        "primary": "#00ffb",
        "secondary": "#8b5cf6",
        "success": "#22c55e",
        "warning": "#f59e0b",
        "danger": "#ef4444"
    }"##;
    let err = serde_json::from_str::<BrandColors>(raw).unwrap_err();
    assert!(err.to_string().contains("expected 3 or 6 hex digits"), "{err}");
}
