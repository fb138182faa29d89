use std::io::Cursor;

use proptest::prelude::*;
use daynight::{
    EventSource, HistoryPredictor,
    cost::CostMeter,
    evaluate::Evaluator,
    history::{MAX_CONFIDENCE, TAG_LENGTH},
    robo::FollowHint,
    route::{Route, RouteFormat},
};

fn planets() -> impl Strategy<Value = Vec<(u64, bool)>> {
    prop::collection::vec((0u64..10_000, any::<bool>()), 1..400)
}

// Counters and tags stay within their widths
proptest! {
    #[test]
    fn prop_entries_stay_in_range(steps in planets()) {
        let mut hp = HistoryPredictor::new();
        for &(id, outcome) in &steps {
            hp.predict(id);
            hp.update(id, outcome);
        }
        for entry in hp.table(0) {
            prop_assert!(entry.confidence <= MAX_CONFIDENCE);
            prop_assert!(entry.tag < (1 << TAG_LENGTH));
        }
    }
}

// Two fresh predictors fed the same sequence agree at every step
proptest! {
    #[test]
    fn prop_deterministic(steps in planets()) {
        let mut a = HistoryPredictor::new();
        let mut b = HistoryPredictor::new();
        for &(id, outcome) in &steps {
            prop_assert_eq!(a.predict(id), b.predict(id));
            a.update(id, outcome);
            b.update(id, outcome);
        }
        prop_assert_eq!(a.history(), b.history());
    }
}

// Predicting twice without an update gives the same answer
proptest! {
    #[test]
    fn prop_predict_is_repeatable(steps in planets(), probe in 0u64..10_000) {
        let mut hp = HistoryPredictor::new();
        for &(id, outcome) in &steps {
            hp.predict(id);
            hp.update(id, outcome);
        }
        let first = hp.predict(probe);
        prop_assert_eq!(first, hp.predict(probe));
    }
}

// The cascade keeps its invariants with more tables too
proptest! {
    #[test]
    fn prop_cascade_entries_stay_in_range(steps in planets(), tables in 1usize..4) {
        let mut hp = HistoryPredictor::with_tables(tables);
        for &(id, outcome) in &steps {
            hp.predict(id);
            hp.update(id, outcome);
        }
        for k in 0..hp.table_count() {
            prop_assert_eq!(hp.table(k).len(), 4096 >> k);
            for entry in hp.table(k) {
                prop_assert!(entry.confidence <= MAX_CONFIDENCE);
                prop_assert!(entry.tag < (1 << TAG_LENGTH));
            }
        }
    }
}

// Visited planets equal the well-formed records before the first bad one
proptest! {
    #[test]
    fn prop_visited_counts_prefix(steps in planets(), bad_at in any::<prop::sample::Index>()) {
        let bad = bad_at.index(steps.len() + 1);
        let mut text = String::from("PlanetID\tTimeOfDay\n");
        for (i, &(id, outcome)) in steps.iter().enumerate() {
            if i == bad {
                text.push_str(&format!("{}\tNOON\n", id));
            }
            else {
                text.push_str(&format!("{}\t{}\n", id, if outcome { "DAY" } else { "NIGHT" }));
            }
        }

        let mut route = Route::new(
            Cursor::new(text.into_bytes()),
            steps.len() as u64,
            RouteFormat::Route,
        ).unwrap();
        prop_assert_eq!(route.total(), steps.len() as u64);

        let result = Evaluator::new(FollowHint, CostMeter::shared()).run(&mut route);
        let expected = bad.min(steps.len()) as u64;
        prop_assert_eq!(result.report.visited, expected);
        prop_assert_eq!(result.completed(), bad >= steps.len());
    }
}
