// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-locale string tables and lookup through a fallback chain.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

/// Strings for one locale, keyed by message id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look a message up in this table only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Errors raised by catalog and context configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum I18nError {
    /// The requested language has no strings in the catalog.
    UnknownLanguage(String),
    /// A language tag was empty or contained whitespace.
    InvalidTag(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(tag) => write!(f, "no strings loaded for language '{tag}'"),
            Self::InvalidTag(tag) => write!(f, "invalid language tag '{tag}'"),
        }
    }
}

impl core::error::Error for I18nError {}

pub(crate) fn validate_tag(tag: &str) -> Result<(), I18nError> {
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        Err(I18nError::InvalidTag(tag.into()))
    } else {
        Ok(())
    }
}

/// Messages for several locales plus the order to fall back through.
///
/// A lookup tries the requested locale, then its primary subtag (`"pt"` for
/// `"pt-BR"`), then each fallback in order. Each locale is consulted at most
/// once.
///
/// ```
/// use trellis_i18n::{Catalog, LocaleStrings};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .add_locale("en", LocaleStrings::new().with("tour.next", "Next"))
///     .unwrap();
/// catalog
///     .add_locale("de", LocaleStrings::new().with("tour.skip", "Überspringen"))
///     .unwrap();
/// catalog.set_fallback_chain(["en"]);
///
/// assert_eq!(catalog.get("de", "tour.skip"), Some("Überspringen"));
/// assert_eq!(catalog.get("de", "tour.next"), Some("Next"));
/// assert_eq!(catalog.get("de", "tour.done"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    locales: HashMap<String, LocaleStrings>,
    fallback_chain: Vec<String>,
}

impl Catalog {
    /// An empty catalog with no fallback chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or merge into) the strings for `locale`.
    ///
    /// Existing keys are overwritten by `strings`.
    pub fn add_locale(
        &mut self,
        locale: impl Into<String>,
        strings: LocaleStrings,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        validate_tag(&locale)?;
        tracing::debug!(locale = %locale, messages = strings.len(), "adding locale strings");
        self.locales
            .entry(locale)
            .or_default()
            .strings
            .extend(strings.strings);
        Ok(())
    }

    /// Set the locales tried, in order, when the requested one lacks a key.
    pub fn set_fallback_chain<I, S>(&mut self, chain: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_chain = chain.into_iter().map(Into::into).collect();
    }

    pub(crate) fn locales_mut(&mut self) -> &mut HashMap<String, LocaleStrings> {
        &mut self.locales
    }

    /// The configured fallback chain.
    #[must_use]
    pub fn fallback_chain(&self) -> &[String] {
        &self.fallback_chain
    }

    /// Whether any strings are registered for `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Registered locale tags, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &str> + '_ {
        self.locales.keys().map(String::as_str)
    }

    /// Look `key` up for `locale`, walking the fallback chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        let primary = locale.split_once('-').map(|(p, _)| p);
        let chain = core::iter::once(locale)
            .chain(primary)
            .chain(self.fallback_chain.iter().map(String::as_str));
        let mut tried: Vec<&str> = Vec::new();
        for candidate in chain {
            if tried.contains(&candidate) {
                continue;
            }
            tried.push(candidate);
            if let Some(found) = self.locales.get(candidate).and_then(|s| s.get(key)) {
                return Some(found);
            }
        }
        tracing::trace!(locale, key, "message not found in any locale");
        None
    }

    /// Look `key` up and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|t| interpolate(t, args))
    }
}

/// Replace `{name}` placeholders in `template` with the matching value in
/// `args`.
///
/// Substitution is a single left-to-right pass: values are never rescanned,
/// unknown placeholders and unbalanced braces are kept verbatim.
///
/// ```
/// use trellis_i18n::interpolate;
///
/// assert_eq!(
///     interpolate("Step {current} of {total}", &[("current", "2"), ("total", "5")]),
///     "Step 2 of 5"
/// );
/// assert_eq!(interpolate("{missing} {", &[]), "{missing} {");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        match args.iter().find(|(n, _)| *n == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    if let Some(open) = rest.find('{') {
        // Unterminated placeholder.
        out.push_str(&rest[open..]);
    } else {
        out.push_str(rest);
    }
    out
}
