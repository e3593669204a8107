use serde::{Deserialize, Serialize};

/// Formatted outcome of one calculation request.
///
/// Created fresh per request; the runtime keeps only the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseResult {
    /// `phase * 29.53`, fixed-point at the requested precision
    pub age_in_days: String,
    /// `fraction * 100`, fixed-point at the requested precision, `%` suffixed
    pub age_as_percentage: String,
    pub phase_name: String,
    /// Direction label ("waxing" / "waning")
    pub phase_description: String,
}
