//! Integration tests: the store consumed as a trait object, the way the
//! screen's worker consumes it.

use std::sync::Arc;

use chrono::NaiveDate;

use vitals_core::domain::{MetricKind, RecordKind, TimeRange, Unit};
use vitals_core::sample_data;
use vitals_core::store::{HealthStore, RecordQuery, SAMPLE_QUERY_LIMIT};

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

#[test]
fn demo_store_serves_all_four_screen_queries() {
    let store: Arc<dyn HealthStore> = Arc::new(sample_data::demo_store(42));
    let range = TimeRange::all_until(now());

    let steps = store
        .aggregate_sum(MetricKind::StepCount, &range)
        .unwrap()
        .unwrap();
    assert!(steps.value_in(Unit::Count).unwrap() > 0.0);

    let protein = store
        .aggregate_sum(MetricKind::DietaryProtein, &range)
        .unwrap()
        .unwrap();
    assert!(protein.value_in(Unit::Grams).unwrap() > 0.0);
    // The sum is denominated in grams, not counts.
    assert!(protein.value_in(Unit::Count).is_none());

    let workouts = store
        .list_records(&RecordQuery::latest(RecordKind::Workout))
        .unwrap();
    assert!(!workouts.is_empty());
    assert!(workouts.len() <= SAMPLE_QUERY_LIMIT);

    let sleep = store
        .list_records(&RecordQuery::latest(RecordKind::Sleep))
        .unwrap();
    assert!(!sleep.is_empty());
    assert!(sleep.len() <= SAMPLE_QUERY_LIMIT);
}

#[test]
fn listings_only_contain_the_requested_kind() {
    let store = sample_data::demo_store(7);

    for kind in [RecordKind::Workout, RecordKind::Sleep] {
        let out = store.list_records(&RecordQuery::latest(kind)).unwrap();
        assert!(out.iter().all(|r| r.kind() == kind));
    }
}

#[test]
fn aggregate_excludes_samples_after_range_end() {
    let store = sample_data::demo_store(3);

    // End the range before the demo history starts: nothing matches.
    let before_history = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let sum = store
        .aggregate_sum(MetricKind::StepCount, &TimeRange::all_until(before_history))
        .unwrap();
    assert!(sum.is_none());
}
