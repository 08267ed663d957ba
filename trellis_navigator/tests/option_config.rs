// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option lists decoded from JSON and validated at the boundary.

#![cfg(feature = "serde")]

use trellis_navigator::{DEFAULT_CATEGORY, OptionError, OptionList, SearchOption};

#[test]
fn decoded_options_validate_and_group() {
    let raw = r#"[
        { "id": "nyc", "label": "New York, NY, USA", "value": "new-york", "category": "Recent" },
        { "id": "gps", "label": "Use my location", "value": "gps", "icon": "pin" }
    ]"#;
    let options: Vec<SearchOption> = serde_json::from_str(raw).unwrap();
    assert_eq!(options[1].category, None);
    assert_eq!(options[1].icon.as_deref(), Some("pin"));

    let list = OptionList::new(options).unwrap();
    let set = list.filter("");
    let categories: Vec<&str> = set.groups(&list).map(|g| g.category).collect();
    assert_eq!(categories, ["Recent", DEFAULT_CATEGORY]);
}

#[test]
fn duplicate_ids_from_config_are_rejected() {
    let raw = r#"[
        { "id": "x", "label": "One", "value": "1" },
        { "id": "x", "label": "Two", "value": "2" }
    ]"#;
    let options: Vec<SearchOption> = serde_json::from_str(raw).unwrap();
    let err = OptionList::new(options).unwrap_err();
    assert_eq!(err, OptionError::DuplicateId("x".into()));
    assert_eq!(err.to_string(), "duplicate option id 'x'");
}
