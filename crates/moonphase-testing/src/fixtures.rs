//! Canonical inputs shared across test suites.

use moonphase_engine::{IlluminationProvider, MoonPhaseCalculator};
use moonphase_types::{CalendarDate, MidnightZone};
use std::sync::Arc;

/// 18 February 2007, the canonical full-moon reference date
pub fn reference_date() -> CalendarDate {
    CalendarDate::new(18, 2, 2007)
}

/// Calculator anchored to UTC midnight so results do not depend on the
/// machine's time zone.
pub fn utc_calculator<P>(provider: Arc<P>) -> MoonPhaseCalculator
where
    P: IlluminationProvider + 'static,
{
    MoonPhaseCalculator::new(provider).with_zone(MidnightZone::Utc)
}
