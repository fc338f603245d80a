//! Time windows for aggregate queries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Time window with an optional lower bound and an inclusive upper bound.
///
/// `start == None` means "from the earliest representable past" — the
/// all-time scope the metrics screen queries with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<NaiveDateTime>,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Everything up to and including `end`.
    pub fn all_until(end: NaiveDateTime) -> Self {
        Self { start: None, end }
    }

    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start.map_or(true, |s| t >= s) && t <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn all_until_has_no_lower_bound() {
        let range = TimeRange::all_until(at(15, 12));
        assert!(range.contains(at(1, 0)));
        assert!(range.contains(at(15, 12)));
        assert!(!range.contains(at(15, 13)));
    }

    #[test]
    fn between_bounds_both_ends() {
        let range = TimeRange::between(at(10, 0), at(12, 0));
        assert!(!range.contains(at(9, 23)));
        assert!(range.contains(at(10, 0)));
        assert!(range.contains(at(11, 5)));
        assert!(!range.contains(at(12, 1)));
    }
}
