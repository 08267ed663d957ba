// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search options, validation, filtering and category grouping.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

/// Category name for options that do not declare one.
pub const DEFAULT_CATEGORY: &str = "General";

/// One selectable entry of a search dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOption {
    /// Identifier, unique within an [`OptionList`].
    pub id: String,
    /// Text shown to the user.
    pub label: String,
    /// Machine value, also searched.
    pub value: String,
    /// Group heading; options without one go to [`DEFAULT_CATEGORY`].
    pub category: Option<String>,
    /// Icon name for the host to render.
    pub icon: Option<String>,
}

impl SearchOption {
    /// Create an option without category or icon.
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            category: None,
            icon: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The category this option is grouped under.
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Whether `label` or `value` contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

/// Why an option list was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionError {
    /// The option at `index` has an empty id.
    EmptyId {
        /// Position of the offending option.
        index: usize,
    },
    /// Two options share an id.
    DuplicateId(String),
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "option at index {index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate option id '{id}'"),
        }
    }
}

impl core::error::Error for OptionError {}

/// A validated, immutable list of options.
///
/// Construction checks that every id is non-empty and unique. The list keeps
/// the caller's order, which is the order results appear in within a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SearchOption>,
}

impl OptionList {
    /// Validate and wrap `options`.
    pub fn new(options: Vec<SearchOption>) -> Result<Self, OptionError> {
        {
            let mut seen = HashSet::with_capacity(options.len());
            for (index, option) in options.iter().enumerate() {
                if option.id.is_empty() {
                    return Err(OptionError::EmptyId { index });
                }
                if !seen.insert(option.id.as_str()) {
                    return Err(OptionError::DuplicateId(option.id.clone()));
                }
            }
        }
        Ok(Self { options })
    }

    /// All options in caller order.
    #[must_use]
    pub fn as_slice(&self) -> &[SearchOption] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The option at `index` in caller order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SearchOption> {
        self.options.get(index)
    }

    /// Filter by `query` and group the matches by category.
    ///
    /// Matching is a case-insensitive substring test against both label and
    /// value. An empty query matches everything. There is no fuzzy matching
    /// and no ranking: groups appear in the order their first match appears,
    /// and options keep caller order within a group.
    #[must_use]
    pub fn filter(&self, query: &str) -> ResultSet {
        let needle = query.to_lowercase();
        let mut group_of: HashMap<&str, usize> = HashMap::new();
        let mut buckets: SmallVec<[Vec<usize>; 4]> = SmallVec::new();

        for (index, option) in self.options.iter().enumerate() {
            if !needle.is_empty() && !option.matches_lowercase(&needle) {
                continue;
            }
            let slot = *group_of
                .entry(option.category_or_default())
                .or_insert_with(|| {
                    buckets.push(Vec::new());
                    buckets.len() - 1
                });
            buckets[slot].push(index);
        }

        let mut order = Vec::new();
        let mut groups = SmallVec::new();
        for bucket in buckets {
            let start = order.len();
            order.extend(bucket);
            groups.push(start..order.len());
        }
        ResultSet { order, groups }
    }
}

/// The outcome of [`OptionList::filter`].
///
/// Results are addressed by *position*: the index in the flattened, grouped
/// display order. That is the index a keyboard cursor moves over, so the
/// focused item always matches what the user sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    order: Vec<usize>,
    groups: SmallVec<[Range<usize>; 4]>,
}

impl ResultSet {
    /// Number of matching options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index into the [`OptionList`] of the result at `position`.
    #[must_use]
    pub fn option_index(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    /// The option at `position`, looked up in `options`.
    #[must_use]
    pub fn get<'a>(&self, options: &'a OptionList, position: usize) -> Option<&'a SearchOption> {
        self.option_index(position).and_then(|i| options.get(i))
    }

    /// Matching options in display order.
    pub fn iter<'a>(
        &'a self,
        options: &'a OptionList,
    ) -> impl Iterator<Item = &'a SearchOption> + 'a {
        self.order.iter().filter_map(|&i| options.get(i))
    }

    /// Matching options grouped by category, in display order.
    pub fn groups<'a>(
        &'a self,
        options: &'a OptionList,
    ) -> impl Iterator<Item = ResultGroup<'a>> + 'a {
        self.groups.iter().filter_map(move |range| {
            let items: Vec<&SearchOption> = self.order[range.clone()]
                .iter()
                .filter_map(|&i| options.get(i))
                .collect();
            let category = items.first()?.category_or_default();
            Some(ResultGroup {
                category,
                first_position: range.start,
                options: items,
            })
        })
    }
}

/// One category heading and its matching options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultGroup<'a> {
    /// Category name.
    pub category: &'a str,
    /// Position of the group's first option in the flattened order.
    pub first_position: usize,
    /// Options in caller order.
    pub options: Vec<&'a SearchOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cities() -> OptionList {
        OptionList::new(vec![
            SearchOption::new("nyc", "New York, NY, USA", "new-york").with_category("Cities"),
            SearchOption::new("here", "Current location", "gps"),
            SearchOption::new("sf", "San Francisco, CA, USA", "san-francisco")
                .with_category("Cities"),
            SearchOption::new("park", "Central Park", "central-park").with_category("Places"),
        ])
        .unwrap()
    }

    fn labels<'a>(set: &'a ResultSet, options: &'a OptionList) -> Vec<&'a str> {
        set.iter(options).map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive() {
        let options = cities();
        let set = options.filter("NEW");
        assert_eq!(labels(&set, &options), ["New York, NY, USA"]);
    }

    #[test]
    fn filter_matches_value_too() {
        let options = cities();
        let set = options.filter("gps");
        assert_eq!(labels(&set, &options), ["Current location"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let options = cities();
        assert_eq!(options.filter("an"), options.filter("an"));
    }

    #[test]
    fn empty_query_matches_all_grouped() {
        let options = cities();
        let set = options.filter("");
        assert_eq!(set.len(), 4);
        let groups: Vec<(&str, usize, usize)> = set
            .groups(&options)
            .map(|g| (g.category, g.first_position, g.options.len()))
            .collect();
        assert_eq!(
            groups,
            [("Cities", 0, 2), (DEFAULT_CATEGORY, 2, 1), ("Places", 3, 1)]
        );
        // Positions follow the grouped order, not the caller order.
        assert_eq!(set.get(&options, 1).map(|o| o.id.as_str()), Some("sf"));
    }

    #[test]
    fn no_match_is_empty() {
        let options = cities();
        let set = options.filter("zzz");
        assert!(set.is_empty());
        assert_eq!(set.groups(&options).count(), 0);
    }

    #[test]
    fn rejects_duplicate_and_empty_ids() {
        let dup = OptionList::new(vec![
            SearchOption::new("a", "A", "a"),
            SearchOption::new("a", "B", "b"),
        ]);
        assert_eq!(dup, Err(OptionError::DuplicateId("a".into())));

        let empty = OptionList::new(vec![SearchOption::new("", "A", "a")]);
        assert_eq!(empty, Err(OptionError::EmptyId { index: 0 }));
    }
}
