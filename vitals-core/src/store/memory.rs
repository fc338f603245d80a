//! In-memory health store — backs the demo dataset and tests.
//!
//! Listings preserve insertion order (the "store default ordering"), which
//! is deliberately not chronological.

use crate::domain::{
    MetricKind, QuantitySample, QuantitySum, Record, RecordSort, TimeRange,
};
use crate::store::{HealthStore, RecordQuery, StoreError};

/// Insertion-ordered store over plain vectors.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    quantities: Vec<QuantitySample>,
    records: Vec<Record>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_quantity(&mut self, sample: QuantitySample) {
        self.quantities.push(sample);
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Simulate a store that denies access: every subsequent query fails
    /// with `PermissionDenied`.
    pub fn deny_access(&mut self) {
        self.unavailable = true;
    }

    pub fn quantity_count(&self) -> usize {
        self.quantities.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl HealthStore for InMemoryStore {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn aggregate_sum(
        &self,
        metric: MetricKind,
        range: &TimeRange,
    ) -> Result<Option<QuantitySum>, StoreError> {
        if self.unavailable {
            return Err(StoreError::PermissionDenied {
                data: metric.label().to_string(),
            });
        }

        let mut total = 0.0;
        let mut matched = false;
        for sample in &self.quantities {
            if sample.metric == metric && range.contains(sample.recorded_at) {
                total += sample.value;
                matched = true;
            }
        }

        // No matching samples is an empty result, not a zero total.
        if matched {
            Ok(Some(QuantitySum {
                value: total,
                unit: metric.native_unit(),
            }))
        } else {
            Ok(None)
        }
    }

    fn list_records(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError> {
        if self.unavailable {
            return Err(StoreError::PermissionDenied {
                data: query.kind.label().to_string(),
            });
        }
        if query.limit == 0 {
            return Err(StoreError::InvalidQuery("limit must be positive".into()));
        }

        let mut out: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.kind() == query.kind)
            .filter(|r| query.since.map_or(true, |s| r.started_at() >= s))
            .cloned()
            .collect();

        match query.sort {
            Some(RecordSort::StartAscending) => out.sort_by_key(Record::started_at),
            Some(RecordSort::StartDescending) => {
                out.sort_by_key(Record::started_at);
                out.reverse();
            }
            None => {} // insertion order
        }

        out.truncate(query.limit);
        Ok(out)
    }

    fn is_available(&self) -> bool {
        !self.unavailable
    }
}
