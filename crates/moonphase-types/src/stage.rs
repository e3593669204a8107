use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CalendarDate, MoonPhaseResult, Precision};

/// Presentation lifecycle of a calculation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationStage {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request accepted, decorative transition still running
    Animating,
    /// Waiting for the loading delay to elapse
    Loading,
    /// Result attached and shown
    Visible,
    /// Calculation failed after loading; error attached
    Failed,
}

impl CalculationStage {
    /// Terminal until the next request
    pub fn is_settled(&self) -> bool {
        matches!(self, CalculationStage::Visible | CalculationStage::Failed)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, CalculationStage::Animating | CalculationStage::Loading)
    }
}

impl fmt::Display for CalculationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationStage::Idle => write!(f, "idle"),
            CalculationStage::Animating => write!(f, "animating"),
            CalculationStage::Loading => write!(f, "loading"),
            CalculationStage::Visible => write!(f, "visible"),
            CalculationStage::Failed => write!(f, "failed"),
        }
    }
}

/// Monotonic request counter; timers carry the generation they were armed for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub const ZERO: Generation = Generation(0);

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub date: CalendarDate,
    pub precision: Precision,
}

impl CalculationRequest {
    pub fn new(date: CalendarDate, precision: Precision) -> Self {
        Self { date, precision }
    }
}

/// Which part of the calculation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Day/month/year did not resolve to a calendar instant
    InvalidDate,
    /// The illumination provider reported an error
    Provider,
}

/// Failure attached to a snapshot in the [`CalculationStage::Failed`] stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CalculationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for CalculationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything a presentation layer needs to render the current state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub generation: Generation,
    pub stage: CalculationStage,
    /// Decorative transition timer still pending
    pub animating: bool,
    /// Loading delay still pending
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<CalculationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MoonPhaseResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalculationFailure>,
}
