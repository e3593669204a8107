use serde::{Deserialize, Serialize};
use std::fmt;

/// Days per lunar cycle used to turn a phase into an age
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Illumination data for a single instant, as reported by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IlluminationSample {
    /// Fraction of the synodic cycle elapsed, 0 = new moon, 0.5 = full moon
    pub phase: f64,
    /// Illuminated fraction of the visible disc
    pub fraction: f64,
}

impl IlluminationSample {
    pub fn new(phase: f64, fraction: f64) -> Self {
        Self { phase, fraction }
    }

    pub fn age_in_days(&self) -> f64 {
        self.phase * SYNODIC_MONTH_DAYS
    }

    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Young Moon")]
    YoungMoon,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Old Moon")]
    OldMoon,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::YoungMoon,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::OldMoon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::YoungMoon => "Young Moon",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::OldMoon => "Old Moon",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Waxing,
    Waning,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Waxing => "waxing",
            Direction::Waning => "waning",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseClassification {
    pub name: PhaseName,
    pub direction: Direction,
}

impl PhaseClassification {
    pub fn new(name: PhaseName, direction: Direction) -> Self {
        Self { name, direction }
    }
}
