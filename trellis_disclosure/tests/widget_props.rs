// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for tour ordering, cursor bounds and queue limits.

use proptest::prelude::*;
use trellis_disclosure::{
    EngineEvent, SearchDropdown, Toast, ToastConfig, ToastLifetime, ToastQueue, Tour, TourStep,
    playback_order,
};
use trellis_dismiss::{DismissHost, OpenChange};
use trellis_navigator::{Key, OptionList, SearchOption};

struct Host;

impl DismissHost for Host {
    fn open_changed(&mut self, _: OpenChange) {}
}

fn steps() -> impl Strategy<Value = Vec<TourStep>> {
    prop::collection::vec((-3_i32..4, any::<bool>()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (order, active))| {
                TourStep::new(format!("s{i}"), format!("#t{i}"), "title", "")
                    .with_order(order)
                    .with_active(active)
            })
            .collect()
    })
}

#[derive(Clone, Debug)]
enum TourOp {
    Next,
    Prev,
    Before(usize),
    After(usize),
    Missing(usize),
    Close,
}

fn tour_op() -> impl Strategy<Value = TourOp> {
    prop_oneof![
        Just(TourOp::Next),
        Just(TourOp::Prev),
        (0_usize..14).prop_map(TourOp::Before),
        (0_usize..14).prop_map(TourOp::After),
        (0_usize..14).prop_map(TourOp::Missing),
        Just(TourOp::Close),
    ]
}

#[derive(Clone, Debug)]
enum SearchOp {
    Key(Key),
    Query(String),
    Hover(usize),
}

fn search_op() -> impl Strategy<Value = SearchOp> {
    prop_oneof![
        prop_oneof![
            Just(Key::ArrowDown),
            Just(Key::ArrowUp),
            Just(Key::Home),
            Just(Key::End),
            Just(Key::Enter),
            Just(Key::Escape),
        ]
        .prop_map(SearchOp::Key),
        "[abn]{0,2}".prop_map(SearchOp::Query),
        (0_usize..8).prop_map(SearchOp::Hover),
    ]
}

fn fruit() -> OptionList {
    OptionList::new(
        ["Apple", "Banana", "Cranberry", "Nectarine", "Avocado"]
            .into_iter()
            .map(|f| SearchOption::new(f.to_lowercase(), f, f.to_lowercase()))
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn playback_is_stable_sort_of_active(steps in steps()) {
        let played = playback_order(steps.clone()).unwrap();
        let mut expected: Vec<TourStep> = steps.into_iter().filter(|s| s.active).collect();
        expected.sort_by_key(|s| s.order);
        prop_assert_eq!(played, expected);
    }

    #[test]
    fn step_index_stays_in_range(steps in steps(), ops in prop::collection::vec(tour_op(), 0..30)) {
        let mut tour = Tour::new();
        tour.start(steps).unwrap();
        for op in ops {
            match op {
                TourOp::Next => { tour.next_step(); }
                TourOp::Prev => { tour.prev_step(); }
                TourOp::Before(index) => { tour.engine_event(EngineEvent::StepBefore { index }); }
                TourOp::After(index) => { tour.engine_event(EngineEvent::StepAfter { index }); }
                TourOp::Missing(index) => { tour.engine_event(EngineEvent::TargetNotFound { index }); }
                TourOp::Close => { tour.engine_event(EngineEvent::Close); }
            }
            if let Some(index) = tour.step_index() {
                prop_assert!(index < tour.steps().len());
                prop_assert!(tour.is_running());
            }
        }
    }

    #[test]
    fn search_focus_stays_in_bounds(ops in prop::collection::vec(search_op(), 0..40)) {
        let mut search = SearchDropdown::new(fruit());
        for op in ops {
            match op {
                SearchOp::Key(key) => { search.key_down(key, &mut Host); }
                SearchOp::Query(query) => { search.set_query(query, &mut Host); }
                SearchOp::Hover(position) => search.hover(position),
            }
            let index = search.focused_index();
            let len = isize::try_from(search.results().len()).unwrap();
            prop_assert!(index >= -1);
            prop_assert!(index < len);
            if !search.is_open() {
                prop_assert_eq!(index, -1);
            }
        }
    }

    #[test]
    fn toast_stack_respects_limits(
        max_visible in 1_usize..4,
        pushes in prop::collection::vec((0_u64..3_000, prop::option::of(1_u64..2_000)), 0..20),
    ) {
        let mut queue = ToastQueue::new(ToastConfig {
            max_visible,
            max_queued: 5,
            default_duration_ms: 1_000,
        });
        let mut now = 0;
        for (gap, lifetime) in pushes {
            now += gap;
            queue.tick(now);
            let lifetime = lifetime.map_or(ToastLifetime::Default, ToastLifetime::For);
            queue.push(Toast::new("t").with_lifetime(lifetime), now);
            prop_assert!(queue.visible().len() <= max_visible);
            prop_assert!(queue.pending_count() <= 5);
            // A free slot is never left empty while toasts wait.
            if queue.pending_count() > 0 {
                prop_assert_eq!(queue.visible().len(), max_visible);
            }
            if let Some(deadline) = queue.next_deadline() {
                prop_assert!(deadline > now);
            }
        }
    }
}
