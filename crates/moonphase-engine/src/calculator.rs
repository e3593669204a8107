use crate::classifier::classify;
use crate::format::{format_fixed, format_percentage};
use crate::provider::IlluminationProvider;
use crate::{Error, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, TimeZone, Utc};
use moonphase_types::{
    CalculationRequest, CalendarDate, DatePolicy, IlluminationSample, MidnightZone,
    MoonPhaseResult, Precision,
};
use std::sync::Arc;
use tracing::debug;

/// Build the formatted result from a sample.
///
/// Pure: same sample and precision always give the same strings.
pub fn assemble_result(sample: IlluminationSample, precision: Precision) -> MoonPhaseResult {
    let classification = classify(sample.phase);
    let digits = precision.digits();

    MoonPhaseResult {
        age_in_days: format_fixed(sample.age_in_days(), digits),
        age_as_percentage: format_percentage(sample.percentage(), digits),
        phase_name: classification.name.label().to_string(),
        phase_description: classification.direction.label().to_string(),
    }
}

/// Turns a calendar date into a formatted moon phase result.
///
/// The only side effect is the single provider call per computation;
/// provider failures propagate unchanged.
#[derive(Clone)]
pub struct MoonPhaseCalculator {
    provider: Arc<dyn IlluminationProvider>,
    date_policy: DatePolicy,
    zone: MidnightZone,
}

impl MoonPhaseCalculator {
    pub fn new(provider: Arc<dyn IlluminationProvider>) -> Self {
        Self {
            provider,
            date_policy: DatePolicy::default(),
            zone: MidnightZone::default(),
        }
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }

    pub fn with_zone(mut self, zone: MidnightZone) -> Self {
        self.zone = zone;
        self
    }

    /// Midnight at the start of `date`, in the configured zone.
    pub fn instant_for(&self, date: CalendarDate) -> Result<DateTime<Utc>> {
        let day = date
            .resolve(self.date_policy)
            .ok_or_else(|| Error::invalid_date(date))?;
        let midnight = day.and_time(NaiveTime::MIN);

        match self.zone {
            MidnightZone::Utc => Ok(Utc.from_utc_datetime(&midnight)),
            MidnightZone::Local => zoned_midnight(&Local, midnight)
                .map(|instant| instant.with_timezone(&Utc))
                .ok_or_else(|| Error::invalid_date(date)),
        }
    }

    pub fn sample(&self, date: CalendarDate) -> Result<IlluminationSample> {
        let instant = self.instant_for(date)?;
        self.provider.illumination(instant)
    }

    pub fn compute(&self, date: CalendarDate, precision: Precision) -> Result<MoonPhaseResult> {
        let sample = self.sample(date)?;
        debug!(
            %date,
            provider = self.provider.name(),
            phase = sample.phase,
            fraction = sample.fraction,
            "illumination sampled"
        );
        Ok(assemble_result(sample, precision))
    }

    pub fn compute_request(&self, request: &CalculationRequest) -> Result<MoonPhaseResult> {
        self.compute(request.date, request.precision)
    }
}

/// Earliest instant of midnight in `zone`. When midnight falls in a DST gap
/// the day starts an hour later.
fn zoned_midnight<Tz: TimeZone>(zone: &Tz, midnight: NaiveDateTime) -> Option<DateTime<Tz>> {
    zone.from_local_datetime(&midnight).earliest().or_else(|| {
        let shifted = midnight.checked_add_signed(Duration::hours(1))?;
        zone.from_local_datetime(&shifted).earliest()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingProvider {
        sample: IlluminationSample,
        seen: Mutex<Vec<DateTime<Utc>>>,
    }

    impl RecordingProvider {
        fn new(phase: f64, fraction: f64) -> Self {
            Self {
                sample: IlluminationSample::new(phase, fraction),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl IlluminationProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample> {
            self.seen.lock().unwrap().push(instant);
            Ok(self.sample)
        }
    }

    struct BrokenProvider;

    impl IlluminationProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn illumination(&self, _instant: DateTime<Utc>) -> Result<IlluminationSample> {
            Err(Error::provider("broken", "no data"))
        }
    }

    fn utc_calculator(provider: Arc<dyn IlluminationProvider>) -> MoonPhaseCalculator {
        MoonPhaseCalculator::new(provider).with_zone(MidnightZone::Utc)
    }

    #[test]
    fn test_full_moon_at_ten_digits() {
        let calculator = utc_calculator(Arc::new(RecordingProvider::new(0.5, 1.0)));
        let result = calculator
            .compute(CalendarDate::new(18, 2, 2007), Precision::new(10))
            .unwrap();

        assert_eq!(result.age_in_days, "14.7650000000");
        assert_eq!(result.age_as_percentage, "100.0000000000%");
        assert_eq!(result.phase_name, "Full Moon");
        assert_eq!(result.phase_description, "waning");
    }

    #[test]
    fn test_provider_sees_utc_midnight() {
        let provider = Arc::new(RecordingProvider::new(0.1, 0.1));
        let calculator = utc_calculator(provider.clone());
        calculator
            .compute(CalendarDate::new(18, 2, 2007), Precision::default())
            .unwrap();

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].to_rfc3339(), "2007-02-18T00:00:00+00:00");
    }

    #[test]
    fn test_local_midnight_resolves() {
        let calculator = MoonPhaseCalculator::new(Arc::new(RecordingProvider::new(0.1, 0.1)));
        let instant = calculator.instant_for(CalendarDate::new(18, 2, 2007)).unwrap();
        let local = instant.with_timezone(&Local);
        assert_eq!(local.date_naive().to_string(), "2007-02-18");
    }

    fn midnight_of(year: i32, month: u32, day: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_midnight_in_dst_gap_moves_to_first_valid_hour() {
        // Santiago skips 00:00-01:00 on 2023-09-03
        let zone = chrono_tz::America::Santiago;
        let instant = zoned_midnight(&zone, midnight_of(2023, 9, 3)).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc).to_rfc3339(),
            "2023-09-03T04:00:00+00:00"
        );
        assert_eq!(instant.naive_local().to_string(), "2023-09-03 01:00:00");
    }

    #[test]
    fn test_midnight_outside_gap_is_exact() {
        let zone = chrono_tz::America::Santiago;
        let instant = zoned_midnight(&zone, midnight_of(2023, 9, 2)).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc).to_rfc3339(),
            "2023-09-02T04:00:00+00:00"
        );
    }

    #[test]
    fn test_overflow_is_normalized_by_default() {
        let calculator = utc_calculator(Arc::new(RecordingProvider::new(0.1, 0.1)));
        let instant = calculator.instant_for(CalendarDate::new(31, 2, 2007)).unwrap();
        assert_eq!(instant.to_rfc3339(), "2007-03-03T00:00:00+00:00");
    }

    #[test]
    fn test_strict_policy_rejects_overflow() {
        let calculator = utc_calculator(Arc::new(RecordingProvider::new(0.1, 0.1)))
            .with_date_policy(DatePolicy::Strict);
        let date = CalendarDate::new(31, 2, 2007);
        let err = calculator.compute(date, Precision::default()).unwrap_err();
        assert_eq!(err, Error::invalid_date(date));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let calculator = utc_calculator(Arc::new(BrokenProvider));
        let err = calculator
            .compute(CalendarDate::new(1, 1, 2020), Precision::default())
            .unwrap_err();
        assert_eq!(err, Error::provider("broken", "no data"));
        assert_eq!(err.to_string(), "Provider error (broken): no data");
    }

    #[test]
    fn test_assemble_result_is_pure() {
        let sample = IlluminationSample::new(0.3, 0.65);
        let first = assemble_result(sample, Precision::new(4));
        let second = assemble_result(sample, Precision::new(4));
        assert_eq!(first, second);
        assert_eq!(first.phase_name, "Waxing Gibbous");
        assert_eq!(first.phase_description, "waxing");
        assert_eq!(first.age_as_percentage, "65.0000%");
    }
}
