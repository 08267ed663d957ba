// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour steps read from configuration.

#![cfg(feature = "serde")]

use trellis_disclosure::{Coordinates, StepError, Tour, TourStep, playback_order};
use trellis_placement::{Align, Placement, Side};

const ONBOARDING: &str = r##"[
    { "id": "search", "target": "#search", "title": "Search", "order": 2 },
    { "id": "filters", "target": "#filters", "title": "Filters", "order": 3, "active": false },
    {
        "id": "welcome",
        "target": "#logo",
        "title": "Welcome",
        "body": "A quick look around.",
        "order": 1,
        "placement": { "side": "right", "align": "start" }
    }
]"##;

#[test]
fn steps_fill_in_defaults() {
    let steps: Vec<TourStep> = serde_json::from_str(ONBOARDING).unwrap();
    let search = &steps[0];
    assert!(search.active);
    assert_eq!(search.body, "");
    assert_eq!(search.placement, Placement::default());
    assert_eq!(
        steps[2].placement,
        Placement::new(Side::Right, Align::Start)
    );
}

#[test]
fn unknown_placement_names_use_defaults() {
    let step: TourStep = serde_json::from_str(
        r##"{ "id": "a", "target": "#a", "title": "A", "placement": { "side": "middle", "align": "center" } }"##,
    )
    .unwrap();
    assert_eq!(step.placement, Placement::new(Side::Bottom, Align::Center));
}

#[test]
fn configured_tour_plays_in_order() {
    let steps: Vec<TourStep> = serde_json::from_str(ONBOARDING).unwrap();
    let ids: Vec<String> = playback_order(steps.clone())
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, ["welcome", "search"]);

    let mut tour = Tour::new();
    assert_eq!(tour.start(steps), Ok(true));
    assert_eq!(tour.current_step().map(|s| s.id.as_str()), Some("welcome"));
}

#[test]
fn invalid_configuration_is_reported() {
    let steps: Vec<TourStep> = serde_json::from_str(
        r#"[{ "id": "a", "target": " ", "title": "A", "active": false }]"#,
    )
    .unwrap();
    assert_eq!(
        playback_order(steps),
        Err(StepError::EmptyTarget("a".into()))
    );
}

#[test]
fn coordinates_round_trip_through_json() {
    let fix: Coordinates =
        serde_json::from_str(r#"{ "latitude": 1.5, "longitude": -2.0, "accuracy_m": null }"#)
            .unwrap();
    assert_eq!(fix.accuracy_m, None);
    let back: Coordinates = serde_json::from_str(&serde_json::to_string(&fix).unwrap()).unwrap();
    assert_eq!(back, fix);
}
