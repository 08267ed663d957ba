// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis i18n: the translation capability Trellis widgets consume.
//!
//! Widgets never load translations. They are handed something implementing
//! [`Translate`] and ask it for messages by key. This crate provides:
//!
//! - [`Catalog`]: per-locale string tables with a fallback chain.
//! - [`I18nContext`]: the application's current language over a catalog,
//!   created once at the root and passed down explicitly.
//! - [`interpolate`]: single-pass `{name}` substitution.
//! - [`builtin`]: English defaults for the strings widgets show themselves.
//!
//! Lookups that find nothing fall back to the key itself, so a missing
//! translation shows up as `tour.next` rather than as an empty button.
//!
//! ## Features
//!
//! - `serde`: decode a [`LocaleStrings`] table from a flat JSON object.

#![no_std]

extern crate alloc;

pub mod builtin;
mod catalog;
mod context;

pub use catalog::{Catalog, I18nError, LocaleStrings, interpolate};
pub use context::{I18nContext, KeysOnly, Translate};
