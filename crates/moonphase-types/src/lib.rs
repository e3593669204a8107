pub mod date;
pub mod phase;
pub mod precision;
pub mod result;
pub mod stage;

pub use date::{CalendarDate, DatePolicy, MidnightZone};
pub use phase::{Direction, IlluminationSample, PhaseClassification, PhaseName, SYNODIC_MONTH_DAYS};
pub use precision::Precision;
pub use result::MoonPhaseResult;
pub use stage::{
    CalculationFailure, CalculationRequest, CalculationStage, FailureKind, Generation,
    StageSnapshot,
};
