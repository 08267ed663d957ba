// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Navigator: keyboard navigation over filtered option lists.
//!
//! This crate models the list half of search dropdowns, menus and tab strips:
//!
//! - **Options** ([`SearchOption`]) validated into an [`OptionList`] (unique,
//!   non-empty ids), filtered by a case-insensitive substring query into a
//!   [`ResultSet`] grouped by category.
//! - **A cursor** ([`NavigationCursor`]) over the result positions, starting
//!   with nothing focused and wrapping at the ends.
//! - **Key handling** ([`KeyboardNavigator`]) mapping [`Key`] presses to
//!   [`NavOutcome`]s: move, commit, dismiss.
//! - **Linear traversal** ([`step_enabled`]) shared by anything that steps
//!   through a strip while skipping disabled entries.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_navigator::{Key, KeyboardNavigator, NavOutcome, OptionList, SearchOption};
//!
//! let options = OptionList::new(vec![
//!     SearchOption::new("apple", "Apple", "apple"),
//!     SearchOption::new("banana", "Banana", "banana"),
//! ])
//! .unwrap();
//!
//! let results = options.filter("an");
//! let mut nav = KeyboardNavigator::new();
//! nav.set_results(results.len());
//!
//! assert_eq!(nav.handle(Key::ArrowDown), NavOutcome::Moved(0));
//! let NavOutcome::Commit(position) = nav.handle(Key::Enter) else {
//!     unreachable!()
//! };
//! assert_eq!(results.get(&options, position).unwrap().label, "Banana");
//! ```
//!
//! ## Positions vs. option indices
//!
//! Results are grouped by category (options without one fall under
//! [`DEFAULT_CATEGORY`]) and a cursor moves over the flattened grouped order.
//! [`ResultSet::option_index`] maps a position back to the caller's list.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`SearchOption`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod key;
mod linear;
mod navigator;
mod option;

pub use cursor::NavigationCursor;
pub use key::Key;
pub use linear::{Step, WrapMode, step_enabled};
pub use navigator::{KeyboardNavigator, NavOutcome};
pub use option::{
    DEFAULT_CATEGORY, OptionError, OptionList, ResultGroup, ResultSet, SearchOption,
};
