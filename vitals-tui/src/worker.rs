//! Background worker thread — all store queries run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! runs each query on a private rayon::ThreadPool (not the global pool), so
//! the four fetches genuinely overlap and complete in any order.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chrono::Local;

use vitals_core::domain::{MetricKind, Record, RecordKind, SleepSample, TimeRange, Unit, Workout};
use vitals_core::store::{HealthStore, RecordQuery, StoreError};

/// Commands sent from the TUI to the worker. One command per state slot;
/// a refresh issues all four.
#[derive(Debug, Clone, Copy)]
pub enum WorkerCommand {
    FetchStepTotal,
    FetchProteinTotal,
    FetchWorkouts,
    FetchSleepSamples,
    Shutdown,
}

/// The four independently-written pieces of screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSlot {
    Steps,
    Protein,
    Workouts,
    Sleep,
}

impl MetricSlot {
    pub fn label(self) -> &'static str {
        match self {
            MetricSlot::Steps => "step count",
            MetricSlot::Protein => "dietary protein",
            MetricSlot::Workouts => "workouts",
            MetricSlot::Sleep => "sleep analysis",
        }
    }
}

/// Why a fetch produced nothing usable for its slot.
#[derive(Debug, Clone)]
pub enum SkipReason {
    /// No matching samples in the store.
    NoData,
    /// Aggregate came back denominated in an unexpected unit.
    UnitMismatch,
    /// Listing contained a record of a foreign kind; the whole batch is
    /// discarded, never partially applied.
    KindMismatch,
    /// The store refused access.
    PermissionDenied(String),
    /// The store failed the query.
    Store(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoData => write!(f, "no matching samples"),
            SkipReason::UnitMismatch => write!(f, "sum denominated in an unexpected unit"),
            SkipReason::KindMismatch => write!(f, "listing returned an unexpected record kind"),
            SkipReason::PermissionDenied(msg) | SkipReason::Store(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<StoreError> for SkipReason {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PermissionDenied { .. } => SkipReason::PermissionDenied(err.to_string()),
            other => SkipReason::Store(other.to_string()),
        }
    }
}

/// Responses sent from the worker back to the TUI. Each targets exactly one
/// state slot.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    StepTotal { steps: f64 },
    ProteinTotal { grams: f64 },
    Workouts { workouts: Vec<Workout> },
    SleepSamples { samples: Vec<SleepSample> },
    /// The named skip policy: the slot keeps its previous value and the
    /// reason goes to the error history.
    FetchSkipped { slot: MetricSlot, reason: SkipReason },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    store: Arc<dyn HealthStore>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("vitals-worker".into())
        .spawn(move || {
            worker_loop(store, rx, tx);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    store: Arc<dyn HealthStore>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    // Private pool, one thread per slot, so a slow aggregate cannot delay a
    // listing query.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .thread_name(|i| format!("vitals-pool-{i}"))
        .build()
        .expect("failed to build worker rayon pool");

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => dispatch(cmd, &pool, &store, &tx),
        }
    }
}

fn dispatch(
    cmd: WorkerCommand,
    pool: &rayon::ThreadPool,
    store: &Arc<dyn HealthStore>,
    tx: &Sender<WorkerResponse>,
) {
    let store = Arc::clone(store);
    let tx = tx.clone();
    match cmd {
        WorkerCommand::FetchStepTotal => pool.spawn(move || fetch_step_total(&*store, &tx)),
        WorkerCommand::FetchProteinTotal => pool.spawn(move || fetch_protein_total(&*store, &tx)),
        WorkerCommand::FetchWorkouts => pool.spawn(move || fetch_workouts(&*store, &tx)),
        WorkerCommand::FetchSleepSamples => pool.spawn(move || fetch_sleep_samples(&*store, &tx)),
        WorkerCommand::Shutdown => {} // handled in loop
    }
}

/// "Distant past to now" — the scope every aggregate query uses.
fn all_time() -> TimeRange {
    TimeRange::all_until(Local::now().naive_local())
}

fn skip(slot: MetricSlot, reason: impl Into<SkipReason>) -> WorkerResponse {
    WorkerResponse::FetchSkipped {
        slot,
        reason: reason.into(),
    }
}

// Every fetch ends in a single `send`. A failed send means the UI has torn
// down its receiver; the result is dropped, never written anywhere.

fn fetch_step_total(store: &dyn HealthStore, tx: &Sender<WorkerResponse>) {
    let resp = match store.aggregate_sum(MetricKind::StepCount, &all_time()) {
        Ok(Some(sum)) => match sum.value_in(Unit::Count) {
            Some(steps) => WorkerResponse::StepTotal { steps },
            None => skip(MetricSlot::Steps, SkipReason::UnitMismatch),
        },
        Ok(None) => skip(MetricSlot::Steps, SkipReason::NoData),
        Err(e) => skip(MetricSlot::Steps, e),
    };
    let _ = tx.send(resp);
}

fn fetch_protein_total(store: &dyn HealthStore, tx: &Sender<WorkerResponse>) {
    let resp = match store.aggregate_sum(MetricKind::DietaryProtein, &all_time()) {
        Ok(Some(sum)) => match sum.value_in(Unit::Grams) {
            Some(grams) => WorkerResponse::ProteinTotal { grams },
            None => skip(MetricSlot::Protein, SkipReason::UnitMismatch),
        },
        Ok(None) => skip(MetricSlot::Protein, SkipReason::NoData),
        Err(e) => skip(MetricSlot::Protein, e),
    };
    let _ = tx.send(resp);
}

fn fetch_workouts(store: &dyn HealthStore, tx: &Sender<WorkerResponse>) {
    let resp = match store.list_records(&RecordQuery::latest(RecordKind::Workout)) {
        Ok(records) => match downcast_all(records, Record::into_workout) {
            Some(workouts) => WorkerResponse::Workouts { workouts },
            None => skip(MetricSlot::Workouts, SkipReason::KindMismatch),
        },
        Err(e) => skip(MetricSlot::Workouts, e),
    };
    let _ = tx.send(resp);
}

fn fetch_sleep_samples(store: &dyn HealthStore, tx: &Sender<WorkerResponse>) {
    let resp = match store.list_records(&RecordQuery::latest(RecordKind::Sleep)) {
        Ok(records) => match downcast_all(records, Record::into_sleep) {
            Some(samples) => WorkerResponse::SleepSamples { samples },
            None => skip(MetricSlot::Sleep, SkipReason::KindMismatch),
        },
        Err(e) => skip(MetricSlot::Sleep, e),
    };
    let _ = tx.send(resp);
}

/// All-or-nothing downcast of a listing: one foreign record poisons the
/// whole batch.
fn downcast_all<T>(
    records: Vec<Record>,
    downcast: impl Fn(Record) -> Option<T>,
) -> Option<Vec<T>> {
    records.into_iter().map(downcast).collect()
}
