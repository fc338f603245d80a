//! Health store trait and structured error types.
//!
//! The HealthStore trait abstracts over the device-local health data service
//! so we can swap implementations and mock for tests. The UI layer sits above
//! this trait — stores know nothing about screens or threads.

pub mod memory;

pub use memory::InMemoryStore;

use thiserror::Error;

use crate::domain::{MetricKind, QuantitySum, Record, RecordKind, RecordSort, TimeRange};

/// Fixed cap for sample-listing queries. The metrics screen always asks for
/// up to this many records and never paginates past it.
pub const SAMPLE_QUERY_LIMIT: usize = 100;

/// Structured error types for store operations.
///
/// These are designed to be displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("access to {data} has not been granted")]
    PermissionDenied { data: String },

    #[error("health store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Parameters for a sample-listing query.
///
/// The metrics screen always passes `latest(kind)`: no filter, limit 100,
/// no explicit sort — the store's default ordering applies and is not
/// guaranteed chronological.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub kind: RecordKind,
    pub limit: usize,
    /// Optional lower bound on record start time.
    pub since: Option<chrono::NaiveDateTime>,
    /// Optional explicit ordering. `None` leaves the store's default.
    pub sort: Option<RecordSort>,
}

impl RecordQuery {
    /// Up to [`SAMPLE_QUERY_LIMIT`] records of `kind`, unfiltered, in the
    /// store's default order.
    pub fn latest(kind: RecordKind) -> Self {
        Self {
            kind,
            limit: SAMPLE_QUERY_LIMIT,
            since: None,
            sort: None,
        }
    }
}

/// Capability offered by the device-local health data service.
///
/// Implementations serve two query shapes: an aggregate statistics query
/// (sum over a time range, per metric) and a sample-listing query (up to N
/// records of a kind). Both are read-only.
pub trait HealthStore: Send + Sync {
    /// Human-readable name of this store.
    fn name(&self) -> &str;

    /// Cumulative sum of all samples of `metric` within `range`, or `None`
    /// if no samples match.
    fn aggregate_sum(
        &self,
        metric: MetricKind,
        range: &TimeRange,
    ) -> Result<Option<QuantitySum>, StoreError>;

    /// Up to `query.limit` records of the requested kind.
    fn list_records(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError>;

    /// Whether queries can currently be served (access granted, store reachable).
    fn is_available(&self) -> bool;
}
