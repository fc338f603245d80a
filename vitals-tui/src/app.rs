//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! the render loop drains responses and applies them through
//! [`AppState::apply_worker_response`], so every slot write happens on the
//! UI thread.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use vitals_core::domain::{SleepSample, Workout};

use crate::worker::{SkipReason, WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Metrics,
    Help,
}

const PANEL_COUNT: usize = 2;

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Metrics => 0,
            Panel::Help => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Metrics),
            1 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Metrics => "Health Metrics",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % PANEL_COUNT).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + PANEL_COUNT - 1) % PANEL_COUNT).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An entry in the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Permission,
    Data,
    Store,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Permission => "PERM",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Store => "STORE",
            ErrorCategory::Other => "ERR",
        }
    }
}

impl From<&SkipReason> for ErrorCategory {
    fn from(reason: &SkipReason) -> Self {
        match reason {
            SkipReason::PermissionDenied(_) => ErrorCategory::Permission,
            SkipReason::NoData | SkipReason::UnitMismatch | SkipReason::KindMismatch => {
                ErrorCategory::Data
            }
            SkipReason::Store(_) => ErrorCategory::Store,
        }
    }
}

/// The four metric slots the screen renders. Each is replaced wholesale by
/// exactly one kind of worker response; there are no partial writes.
#[derive(Debug, Default)]
pub struct MetricsState {
    pub step_count: f64,
    pub dietary_protein_g: f64,
    pub workouts: Vec<Workout>,
    pub sleep: Vec<SleepSample>,
    /// Fetches issued but not yet answered. Display only — slots update
    /// whenever their response arrives, regardless of this counter.
    pub pending_fetches: usize,
    pub last_updated: Option<NaiveDateTime>,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub metrics: MetricsState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            active_panel: Panel::Metrics,
            running: true,
            metrics: MetricsState::default(),
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    /// The become-visible trigger: issue the four independent fetches and
    /// return immediately. Safe to call again while fetches are still in
    /// flight — each slot is replaced wholesale by its last-completing
    /// response.
    pub fn request_refresh(&mut self) {
        for cmd in [
            WorkerCommand::FetchStepTotal,
            WorkerCommand::FetchProteinTotal,
            WorkerCommand::FetchWorkouts,
            WorkerCommand::FetchSleepSamples,
        ] {
            if self.worker_tx.send(cmd).is_ok() {
                self.metrics.pending_fetches += 1;
            }
        }
        self.set_status("Refreshing health metrics...");
    }

    /// Apply one worker response: exactly one slot per response. A skipped
    /// fetch leaves its slot untouched and records the reason instead.
    pub fn apply_worker_response(&mut self, resp: WorkerResponse) {
        self.metrics.pending_fetches = self.metrics.pending_fetches.saturating_sub(1);

        match resp {
            WorkerResponse::StepTotal { steps } => {
                self.metrics.step_count = steps;
                self.mark_updated();
            }
            WorkerResponse::ProteinTotal { grams } => {
                self.metrics.dietary_protein_g = grams;
                self.mark_updated();
            }
            WorkerResponse::Workouts { workouts } => {
                self.metrics.workouts = workouts;
                self.mark_updated();
            }
            WorkerResponse::SleepSamples { samples } => {
                self.metrics.sleep = samples;
                self.mark_updated();
            }
            WorkerResponse::FetchSkipped { slot, reason } => {
                let category = ErrorCategory::from(&reason);
                self.push_error(
                    category,
                    format!("{} fetch skipped: {reason}", slot.label()),
                    slot.label().to_string(),
                );
                // Keep the error visible in the status bar even if this was
                // the last outstanding fetch.
                return;
            }
        }

        if self.metrics.pending_fetches == 0 {
            self.set_status("Health metrics up to date");
        }
    }

    fn mark_updated(&mut self) {
        self.metrics.last_updated = Some(chrono::Local::now().naive_local());
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::MetricSlot;
    use std::sync::mpsc;

    fn test_app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx), cmd_rx, resp_tx)
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Metrics.next(), Panel::Help);
        assert_eq!(Panel::Help.next(), Panel::Metrics);
        assert_eq!(Panel::Metrics.prev(), Panel::Help);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..PANEL_COUNT {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(PANEL_COUNT).is_none());
    }

    #[test]
    fn refresh_issues_four_commands() {
        let (mut app, cmd_rx, _resp_tx) = test_app();
        app.request_refresh();
        assert_eq!(app.metrics.pending_fetches, 4);
        assert_eq!(cmd_rx.try_iter().count(), 4);
    }

    #[test]
    fn double_refresh_is_additive_and_last_write_wins() {
        let (mut app, cmd_rx, _resp_tx) = test_app();
        app.request_refresh();
        app.request_refresh();
        assert_eq!(app.metrics.pending_fetches, 8);
        assert_eq!(cmd_rx.try_iter().count(), 8);

        // Both rounds answer the steps slot; the last-completing wins.
        app.apply_worker_response(WorkerResponse::StepTotal { steps: 100.0 });
        app.apply_worker_response(WorkerResponse::StepTotal { steps: 4200.0 });
        assert_eq!(app.metrics.step_count, 4200.0);
    }

    #[test]
    fn each_response_writes_exactly_one_slot() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();

        app.apply_worker_response(WorkerResponse::ProteinTotal { grams: 82.5 });
        assert_eq!(app.metrics.dietary_protein_g, 82.5);
        assert_eq!(app.metrics.step_count, 0.0);
        assert!(app.metrics.workouts.is_empty());
        assert!(app.metrics.sleep.is_empty());
    }

    #[test]
    fn skipped_fetch_leaves_slot_unchanged_and_records_reason() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        app.metrics.dietary_protein_g = 51.0;

        app.apply_worker_response(WorkerResponse::FetchSkipped {
            slot: MetricSlot::Protein,
            reason: SkipReason::NoData,
        });

        assert_eq!(app.metrics.dietary_protein_g, 51.0);
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Data);
    }

    #[test]
    fn permission_denied_is_categorized() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        app.apply_worker_response(WorkerResponse::FetchSkipped {
            slot: MetricSlot::Workouts,
            reason: SkipReason::PermissionDenied("access denied".into()),
        });
        assert_eq!(app.error_history[0].category, ErrorCategory::Permission);
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn status_settles_when_all_fetches_answered() {
        let (mut app, _cmd_rx, _resp_tx) = test_app();
        app.request_refresh();
        app.apply_worker_response(WorkerResponse::StepTotal { steps: 1.0 });
        app.apply_worker_response(WorkerResponse::ProteinTotal { grams: 1.0 });
        app.apply_worker_response(WorkerResponse::Workouts { workouts: vec![] });
        assert_eq!(app.metrics.pending_fetches, 1);
        app.apply_worker_response(WorkerResponse::SleepSamples { samples: vec![] });
        assert_eq!(app.metrics.pending_fetches, 0);
        let (msg, level) = app.status_message.clone().unwrap();
        assert!(msg.contains("up to date"));
        assert_eq!(level, StatusLevel::Info);
    }
}
