use moonphase_types::{CalculationFailure, CalendarDate, FailureKind};
use std::fmt;

/// Result type for moonphase-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while computing a moon phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Day/month/year could not be turned into a calendar instant
    InvalidDate { day: u32, month: u32, year: i32 },

    /// The illumination provider failed for the requested instant
    Provider { provider: String, message: String },
}

impl Error {
    pub fn invalid_date(date: CalendarDate) -> Self {
        Error::InvalidDate {
            day: date.day,
            month: date.month,
            year: date.year,
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Error::InvalidDate { .. } => FailureKind::InvalidDate,
            Error::Provider { .. } => FailureKind::Provider,
        }
    }

    /// Serializable form for stage snapshots
    pub fn to_failure(&self) -> CalculationFailure {
        CalculationFailure::new(self.kind(), self.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate { day, month, year } => write!(
                f,
                "Invalid date: {} is not a representable calendar day",
                CalendarDate::new(*day, *month, *year)
            ),
            Error::Provider { provider, message } => {
                write!(f, "Provider error ({}): {}", provider, message)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_keeps_raw_components() {
        let err = Error::invalid_date(CalendarDate::new(31, 2, 2023));
        assert_eq!(
            err,
            Error::InvalidDate {
                day: 31,
                month: 2,
                year: 2023
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid date: 2023-02-31 is not a representable calendar day"
        );
    }

    #[test]
    fn test_failure_kind_follows_variant() {
        let invalid = Error::invalid_date(CalendarDate::new(0, 13, 2024)).to_failure();
        assert_eq!(invalid.kind, FailureKind::InvalidDate);

        let provider = Error::provider("synodic", "offline").to_failure();
        assert_eq!(provider.kind, FailureKind::Provider);
        assert_eq!(provider.message, "Provider error (synodic): offline");
    }
}
