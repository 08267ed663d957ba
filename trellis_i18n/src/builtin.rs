// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! English strings for the text Trellis widgets show on their own.

use crate::{Catalog, LocaleStrings};

/// Message keys used by the widgets.
pub mod keys {
    /// Tour "next step" button.
    pub const TOUR_NEXT: &str = "tour.next";
    /// Tour "previous step" button.
    pub const TOUR_PREV: &str = "tour.prev";
    /// Tour "skip" button.
    pub const TOUR_SKIP: &str = "tour.skip";
    /// Tour button on the last step.
    pub const TOUR_DONE: &str = "tour.done";
    /// Tour progress; takes `{current}` and `{total}`.
    pub const TOUR_PROGRESS: &str = "tour.progress";
    /// Search input placeholder.
    pub const SEARCH_PLACEHOLDER: &str = "search.placeholder";
    /// Search dropdown with no matches.
    pub const SEARCH_EMPTY: &str = "search.empty";
    /// Search filter button.
    pub const SEARCH_FILTER: &str = "search.filter";
    /// Location button at rest.
    pub const LOCATION_IDLE: &str = "location.idle";
    /// Location button while a request is in flight.
    pub const LOCATION_BUSY: &str = "location.busy";
    /// Toast close button.
    pub const TOAST_DISMISS: &str = "toast.dismiss";
    /// Carousel previous-slide button.
    pub const CAROUSEL_PREV: &str = "carousel.prev";
    /// Carousel next-slide button.
    pub const CAROUSEL_NEXT: &str = "carousel.next";
}

/// The built-in English table.
#[must_use]
pub fn english() -> LocaleStrings {
    [
        (keys::TOUR_NEXT, "Next"),
        (keys::TOUR_PREV, "Back"),
        (keys::TOUR_SKIP, "Skip"),
        (keys::TOUR_DONE, "Done"),
        (keys::TOUR_PROGRESS, "{current} of {total}"),
        (keys::SEARCH_PLACEHOLDER, "Search"),
        (keys::SEARCH_EMPTY, "No results"),
        (keys::SEARCH_FILTER, "Filters"),
        (keys::LOCATION_IDLE, "Use my location"),
        (keys::LOCATION_BUSY, "Locating"),
        (keys::TOAST_DISMISS, "Dismiss"),
        (keys::CAROUSEL_PREV, "Previous slide"),
        (keys::CAROUSEL_NEXT, "Next slide"),
    ]
    .into_iter()
    .collect()
}

impl Catalog {
    /// A catalog holding the built-in English strings under `"en"`, with
    /// `"en"` as the only fallback.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        catalog
            .locales_mut()
            .insert("en".into(), english());
        catalog.set_fallback_chain(["en"]);
        catalog
    }
}
