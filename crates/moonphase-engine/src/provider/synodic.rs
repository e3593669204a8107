use super::IlluminationProvider;
use crate::Result;
use chrono::{DateTime, Utc};
use moonphase_types::IlluminationSample;
use std::f64::consts::TAU;

/// Mean synodic month in days
pub const MEAN_SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

// New moon 2000-01-06 18:14 UTC
const REFERENCE_NEW_MOON_MS: i64 = 947_182_440_000;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Phase from the mean synodic month, counted from a reference new moon.
///
/// Ignores the lunar orbit's eccentricity, so real phases can be off by up
/// to roughly half a day. The illuminated fraction follows from the phase
/// assuming a circular orbit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynodicProvider;

impl SynodicProvider {
    pub const NAME: &'static str = "synodic";

    pub fn new() -> Self {
        Self
    }
}

impl IlluminationProvider for SynodicProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample> {
        let days = (instant.timestamp_millis() - REFERENCE_NEW_MOON_MS) as f64 / MS_PER_DAY;
        let phase = (days / MEAN_SYNODIC_MONTH_DAYS).rem_euclid(1.0);
        let fraction = (1.0 - (TAU * phase).cos()) / 2.0;
        Ok(IlluminationSample::new(phase, fraction))
    }
}
