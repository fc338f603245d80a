//! Sleep samples — categorized intervals from sleep analysis.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SampleId;

/// Category assigned to one sleep interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepStage {
    InBed,
    Asleep,
    Awake,
}

impl SleepStage {
    pub fn label(self) -> &'static str {
        match self {
            SleepStage::InBed => "In Bed",
            SleepStage::Asleep => "Asleep",
            SleepStage::Awake => "Awake",
        }
    }
}

/// One categorized sleep interval owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepSample {
    pub id: SampleId,
    pub stage: SleepStage,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SleepSample {
    pub fn duration_secs(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64
    }

    pub fn is_sane(&self) -> bool {
        self.end >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn duration_spans_midnight() {
        let s = SleepSample {
            id: SampleId::new("s-1"),
            stage: SleepStage::Asleep,
            start: at(1, 23, 0),
            end: at(2, 6, 30),
        };
        assert!(s.is_sane());
        assert_eq!(s.duration_secs(), 7.5 * 3600.0);
    }

    #[test]
    fn inverted_interval_is_insane() {
        let s = SleepSample {
            id: SampleId::new("s-2"),
            stage: SleepStage::Asleep,
            start: at(2, 6, 0),
            end: at(1, 23, 0),
        };
        assert!(!s.is_sane());
    }
}
