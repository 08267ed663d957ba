// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for cursor bounds and filtering.

use proptest::prelude::*;
use trellis_navigator::{Key, KeyboardNavigator, NavOutcome, OptionList, SearchOption};

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowDown),
        Just(Key::ArrowUp),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Tab),
    ]
}

fn options() -> impl Strategy<Value = OptionList> {
    prop::collection::vec(("[a-zA-Z ]{0,12}", prop::option::of("[A-C]")), 0..12).prop_map(
        |rows| {
            let options = rows
                .into_iter()
                .enumerate()
                .map(|(i, (label, category))| {
                    let option = SearchOption::new(format!("id-{i}"), label.clone(), label);
                    match category {
                        Some(c) => option.with_category(c),
                        None => option,
                    }
                })
                .collect();
            OptionList::new(options).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn focus_stays_in_bounds(total in 0_usize..8, keys in prop::collection::vec(key(), 0..40)) {
        let mut nav = KeyboardNavigator::new();
        nav.set_results(total);
        for key in keys {
            let outcome = nav.handle(key);
            let index = nav.cursor().focused_index();
            prop_assert!(index >= -1);
            prop_assert!(index < isize::try_from(total).unwrap());
            if let NavOutcome::Commit(position) = outcome {
                prop_assert!(position < total);
                prop_assert_eq!(index, -1);
            }
        }
    }

    #[test]
    fn arrow_down_cycles(total in 1_usize..10, presses in 1_usize..30) {
        let mut nav = KeyboardNavigator::new();
        nav.set_results(total);
        for _ in 0..presses {
            nav.handle(Key::ArrowDown);
        }
        prop_assert_eq!(nav.focused(), Some((presses - 1) % total));
    }

    #[test]
    fn filter_is_idempotent_and_case_insensitive(list in options(), query in "[a-zA-Z]{0,3}") {
        let once = list.filter(&query);
        let twice = list.filter(&query);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once, &list.filter(&query.to_uppercase()));
        prop_assert_eq!(&once, &list.filter(&query.to_lowercase()));
    }

    #[test]
    fn filtered_results_are_a_grouped_permutation(list in options(), query in "[a-z]{0,2}") {
        let results = list.filter(&query);
        let mut positions = 0;
        for group in results.groups(&list) {
            prop_assert_eq!(group.first_position, positions);
            for option in &group.options {
                prop_assert_eq!(option.category_or_default(), group.category);
                let needle = query.to_lowercase();
                prop_assert!(
                    option.label.to_lowercase().contains(&needle)
                        || option.value.to_lowercase().contains(&needle)
                );
            }
            // Caller order is preserved within a group.
            let ids: Vec<usize> = (positions..positions + group.options.len())
                .map(|p| results.option_index(p).unwrap())
                .collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            positions += group.options.len();
        }
        prop_assert_eq!(positions, results.len());
    }
}
