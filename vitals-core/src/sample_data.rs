//! Demo dataset generator.
//!
//! Builds ~90 days of plausible health data from a seeded RNG: daily step
//! totals with a weekend bump, protein per meal, a workout every few days,
//! and nightly sleep intervals with the occasional wake-up. A given seed
//! always produces the same dataset.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    ActivityKind, MetricKind, QuantitySample, Record, SampleId, SleepSample, SleepStage, Workout,
};
use crate::store::InMemoryStore;

/// Days of history the demo dataset covers.
pub const DEMO_DAYS: u32 = 90;

const WORKOUT_ROTATION: [ActivityKind; 6] = [
    ActivityKind::Running,
    ActivityKind::Cycling,
    ActivityKind::Swimming,
    ActivityKind::StrengthTraining,
    ActivityKind::Walking,
    ActivityKind::Yoga,
];

/// Last day of the demo history. Fixed (not "today") so seeded output is
/// reproducible in tests.
fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn next_id(prefix: &str, counter: &mut u64) -> SampleId {
    *counter += 1;
    SampleId::new(format!("{prefix}-{counter:04}"))
}

/// Build an in-memory store populated with the demo dataset.
pub fn demo_store(seed: u64) -> InMemoryStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = InMemoryStore::new();
    let mut quantity_seq = 0u64;
    let mut record_seq = 0u64;

    for day_offset in (0..DEMO_DAYS).rev() {
        let day = anchor() - Duration::days(i64::from(day_offset));
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

        // Steps: one total per day, logged in the evening.
        let base = if weekend { 9_000.0 } else { 6_500.0 };
        let steps = (base + rng.gen_range(-2_500.0..4_000.0f64)).max(500.0).round();
        store.push_quantity(QuantitySample {
            id: next_id("q", &mut quantity_seq),
            metric: MetricKind::StepCount,
            value: steps,
            recorded_at: day.and_hms_opt(21, 0, 0).unwrap(),
        });

        // Protein: one sample per meal.
        for _ in 0..rng.gen_range(2..=4u32) {
            let hour = rng.gen_range(7..21u32);
            let grams = (rng.gen_range(12.0..45.0f64) * 10.0).round() / 10.0;
            store.push_quantity(QuantitySample {
                id: next_id("q", &mut quantity_seq),
                metric: MetricKind::DietaryProtein,
                value: grams,
                recorded_at: day.and_hms_opt(hour, rng.gen_range(0..60), 0).unwrap(),
            });
        }

        // Workouts: roughly every third day, late afternoon.
        if rng.gen_bool(0.35) {
            let activity = WORKOUT_ROTATION[rng.gen_range(0..WORKOUT_ROTATION.len())];
            store.push_record(Record::Workout(Workout {
                id: next_id("w", &mut record_seq),
                activity,
                started_at: day
                    .and_hms_opt(rng.gen_range(16..20u32), rng.gen_range(0..60), 0)
                    .unwrap(),
                duration_secs: f64::from(rng.gen_range(20..=75u32)) * 60.0,
            }));
        }

        // Sleep: one interval per night, occasionally interrupted.
        let bedtime = day
            .and_hms_opt(22, rng.gen_range(0..55), 0)
            .unwrap();
        let total_mins = rng.gen_range(360..=540i64);
        if rng.gen_bool(0.2) {
            // Interrupted night: asleep, a short wake-up, asleep again.
            let first = rng.gen_range(120..total_mins - 120);
            let wake = rng.gen_range(10..25i64);
            let t1 = bedtime + Duration::minutes(first);
            let t2 = t1 + Duration::minutes(wake);
            store.push_record(Record::Sleep(SleepSample {
                id: next_id("s", &mut record_seq),
                stage: SleepStage::Asleep,
                start: bedtime,
                end: t1,
            }));
            store.push_record(Record::Sleep(SleepSample {
                id: next_id("s", &mut record_seq),
                stage: SleepStage::Awake,
                start: t1,
                end: t2,
            }));
            store.push_record(Record::Sleep(SleepSample {
                id: next_id("s", &mut record_seq),
                stage: SleepStage::Asleep,
                start: t2,
                end: bedtime + Duration::minutes(total_mins + wake),
            }));
        } else {
            store.push_record(Record::Sleep(SleepSample {
                id: next_id("s", &mut record_seq),
                stage: SleepStage::Asleep,
                start: bedtime,
                end: bedtime + Duration::minutes(total_mins),
            }));
        }
    }

    store
}
