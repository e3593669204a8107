use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits shown in formatted results.
///
/// Always within `MIN..=MAX`; out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Precision(u8);

impl Precision {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(requested: u32) -> Self {
        let clamped = requested.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(clamped as u8)
    }

    pub fn digits(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(2)
    }
}

impl From<u32> for Precision {
    fn from(requested: u32) -> Self {
        Self::new(requested)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        u32::from(precision.0)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
