//! Discrete records returned by sample-listing queries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SampleId;
use crate::domain::sleep::SleepSample;
use crate::domain::workout::Workout;

/// Classifier for a category of discrete event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Workout,
    Sleep,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Workout => "workouts",
            RecordKind::Sleep => "sleep analysis",
        }
    }
}

/// Sort order a listing query may request. The metrics screen never does;
/// the store's default ordering applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordSort {
    StartAscending,
    StartDescending,
}

/// A record handed back by a listing query.
///
/// Listing queries are typed by `RecordKind`, but the store returns dynamic
/// records; consumers that need a specific kind must check every element
/// before using the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Record {
    Workout(Workout),
    Sleep(SleepSample),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Workout(_) => RecordKind::Workout,
            Record::Sleep(_) => RecordKind::Sleep,
        }
    }

    pub fn id(&self) -> &SampleId {
        match self {
            Record::Workout(w) => &w.id,
            Record::Sleep(s) => &s.id,
        }
    }

    pub fn started_at(&self) -> NaiveDateTime {
        match self {
            Record::Workout(w) => w.started_at,
            Record::Sleep(s) => s.start,
        }
    }

    pub fn into_workout(self) -> Option<Workout> {
        match self {
            Record::Workout(w) => Some(w),
            Record::Sleep(_) => None,
        }
    }

    pub fn into_sleep(self) -> Option<SleepSample> {
        match self {
            Record::Sleep(s) => Some(s),
            Record::Workout(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sleep::SleepStage;
    use crate::domain::workout::ActivityKind;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn kind_and_downcast() {
        let w = Record::Workout(Workout {
            id: SampleId::new("w-1"),
            activity: ActivityKind::Cycling,
            started_at: at(7),
            duration_secs: 2400.0,
        });
        assert_eq!(w.kind(), RecordKind::Workout);
        assert_eq!(w.id().to_string(), "w-1");
        assert!(w.clone().into_sleep().is_none());
        assert!(w.into_workout().is_some());

        let s = Record::Sleep(SleepSample {
            id: SampleId::new("s-1"),
            stage: SleepStage::Asleep,
            start: at(22),
            end: at(23),
        });
        assert_eq!(s.kind(), RecordKind::Sleep);
        assert!(s.into_sleep().is_some());
    }
}
