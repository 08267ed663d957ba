// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::catalog::validate_tag;
use crate::{Catalog, I18nError, interpolate};

/// The translation capability widgets are given.
///
/// Implementations never fail: a key with no translation comes back as the
/// key itself so the UI still shows something meaningful.
pub trait Translate {
    /// The message for `key` in the current language.
    fn translate(&self, key: &str) -> String;

    /// The current language tag, e.g. `"en"` or `"pt-BR"`.
    fn current_language(&self) -> &str;

    /// The message for `key` with `{name}` placeholders substituted.
    fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), args)
    }
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }

    fn current_language(&self) -> &str {
        (**self).current_language()
    }
}

/// Application-wide language state, created once at the root and passed to
/// widgets that show text.
///
/// ```
/// use trellis_i18n::{Catalog, I18nContext, LocaleStrings, Translate};
///
/// let mut catalog = Catalog::with_builtin();
/// catalog
///     .add_locale("es", LocaleStrings::new().with("tour.next", "Siguiente"))
///     .unwrap();
///
/// let mut i18n = I18nContext::new(catalog, "en").unwrap();
/// assert_eq!(i18n.translate("tour.next"), "Next");
///
/// i18n.set_language("es").unwrap();
/// assert_eq!(i18n.translate("tour.next"), "Siguiente");
/// // Missing in Spanish, found through the fallback chain.
/// assert_eq!(i18n.translate("tour.skip"), "Skip");
/// // Missing everywhere: the key itself.
/// assert_eq!(i18n.translate("app.title"), "app.title");
/// ```
#[derive(Clone, Debug)]
pub struct I18nContext {
    catalog: Catalog,
    language: String,
}

impl I18nContext {
    /// Create a context showing `language`, which must be in `catalog`.
    pub fn new(catalog: Catalog, language: impl Into<String>) -> Result<Self, I18nError> {
        let mut cx = Self {
            catalog,
            language: String::new(),
        };
        cx.set_language(language)?;
        Ok(cx)
    }

    /// Switch languages. On error the current language is kept.
    pub fn set_language(&mut self, language: impl Into<String>) -> Result<(), I18nError> {
        let language = language.into();
        validate_tag(&language)?;
        if !self.catalog.has_locale(&language) {
            tracing::warn!(language = %language, "language not loaded; keeping current");
            return Err(I18nError::UnknownLanguage(language));
        }
        if language != self.language {
            tracing::debug!(from = %self.language, to = %language, "language changed");
            self.language = language;
        }
        Ok(())
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the catalog, for loading more strings at runtime.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

impl Translate for I18nContext {
    fn translate(&self, key: &str) -> String {
        self.catalog
            .get(&self.language, key)
            .unwrap_or(key)
            .into()
    }

    fn current_language(&self) -> &str {
        &self.language
    }
}

/// A translator that shows message keys verbatim.
///
/// Handy for tests and for hosts that do their own translation later in the
/// pipeline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeysOnly;

impl Translate for KeysOnly {
    fn translate(&self, key: &str) -> String {
        key.into()
    }

    fn current_language(&self) -> &str {
        "und"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocaleStrings;

    #[test]
    fn unknown_language_keeps_current() {
        let mut cx = I18nContext::new(Catalog::with_builtin(), "en").unwrap();
        let err = cx.set_language("fr").unwrap_err();
        assert_eq!(err, I18nError::UnknownLanguage("fr".into()));
        assert_eq!(cx.current_language(), "en");
        assert_eq!(
            I18nContext::new(Catalog::new(), "en").unwrap_err(),
            I18nError::UnknownLanguage("en".into())
        );
    }

    #[test]
    fn translate_with_interpolates() {
        let cx = I18nContext::new(Catalog::with_builtin(), "en").unwrap();
        assert_eq!(
            cx.translate_with("tour.progress", &[("current", "2"), ("total", "3")]),
            "2 of 3"
        );
    }

    #[test]
    fn strings_loaded_later_are_visible() {
        let mut cx = I18nContext::new(Catalog::with_builtin(), "en").unwrap();
        cx.catalog_mut()
            .add_locale("en", LocaleStrings::new().with("tour.next", "Continue"))
            .unwrap();
        assert_eq!(cx.translate("tour.next"), "Continue");
    }

    fn shown<T: Translate>(t: T, key: &str) -> String {
        t.translate(key)
    }

    #[test]
    fn keys_only_echoes() {
        let t = KeysOnly;
        assert_eq!(shown(&t, "search.empty"), "search.empty");
        let dynamic: &dyn Translate = &t;
        assert_eq!(dynamic.current_language(), "und");
    }
}
