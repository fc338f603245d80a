//! Quantity metrics — cumulative measures served by aggregate queries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SampleId;

/// Classifier for a measurable quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    StepCount,
    DietaryProtein,
}

impl MetricKind {
    /// Unit the store records this metric in.
    pub fn native_unit(self) -> Unit {
        match self {
            MetricKind::StepCount => Unit::Count,
            MetricKind::DietaryProtein => Unit::Grams,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::StepCount => "Step Count",
            MetricKind::DietaryProtein => "Dietary Protein",
        }
    }
}

/// Unit a quantity value is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless count (steps).
    Count,
    /// Mass in grams (dietary protein).
    Grams,
}

/// One measured quantity owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantitySample {
    pub id: SampleId,
    pub metric: MetricKind,
    /// Value in the metric's native unit.
    pub value: f64,
    pub recorded_at: NaiveDateTime,
}

impl QuantitySample {
    /// Quantities are non-negative; NaN or negative values mark a corrupt sample.
    pub fn is_sane(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}

/// Result of an aggregate statistics query: a total plus its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantitySum {
    pub value: f64,
    pub unit: Unit,
}

impl QuantitySum {
    /// The total expressed in `unit`, or `None` on a unit mismatch.
    ///
    /// Only the two units actually used by the screen exist, so there is no
    /// conversion table — a mismatch means the caller asked for the wrong
    /// metric and must not display the number.
    pub fn value_in(&self, unit: Unit) -> Option<f64> {
        (self.unit == unit).then_some(self.value)
    }
}
