//! Workout records — discrete activity events with a duration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SampleId;

/// Activity-type classifier for a workout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Cycling,
    Swimming,
    StrengthTraining,
    Walking,
    Yoga,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Swimming => "Swimming",
            ActivityKind::StrengthTraining => "Strength Training",
            ActivityKind::Walking => "Walking",
            ActivityKind::Yoga => "Yoga",
        }
    }
}

/// One workout owned by the store. Read-only to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: SampleId,
    pub activity: ActivityKind,
    pub started_at: NaiveDateTime,
    /// Wall-clock duration in seconds.
    pub duration_secs: f64,
}

impl Workout {
    pub fn is_sane(&self) -> bool {
        self.duration_secs.is_finite() && self.duration_secs >= 0.0
    }
}
