// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale tables decoded from JSON.

#![cfg(feature = "serde")]

use trellis_i18n::{Catalog, I18nContext, LocaleStrings, Translate, builtin::keys};

#[test]
fn flat_json_object_becomes_a_table() {
    let raw = r#"{ "tour.next": "Weiter", "tour.progress": "{current} von {total}" }"#;
    let de: LocaleStrings = serde_json::from_str(raw).unwrap();
    assert_eq!(de.len(), 2);

    let mut catalog = Catalog::with_builtin();
    catalog.add_locale("de", de).unwrap();
    let cx = I18nContext::new(catalog, "de").unwrap();
    assert_eq!(cx.translate(keys::TOUR_NEXT), "Weiter");
    assert_eq!(cx.translate(keys::TOUR_SKIP), "Skip");
    assert_eq!(
        cx.translate_with(keys::TOUR_PROGRESS, &[("current", "1"), ("total", "4")]),
        "1 von 4"
    );
}

#[test]
fn non_string_values_are_rejected() {
    assert!(serde_json::from_str::<LocaleStrings>(r#"{ "tour.next": 3 }"#).is_err());
}
