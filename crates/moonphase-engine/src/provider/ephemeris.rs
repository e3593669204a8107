//! Low-precision geocentric Sun/Moon positions.
//!
//! Mean-element series good to a degree or two over a few centuries
//! around J2000, which is ample for the illuminated fraction and the phase.
//! The phase angle is derived from the geocentric elongation and the
//! Earth-Sun / Earth-Moon distances; its sign comes from the position angle
//! of the bright limb.

use super::IlluminationProvider;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use moonphase_types::IlluminationSample;
use std::f64::consts::PI;

const RAD: f64 = PI / 180.0;
const MS_PER_DAY: f64 = 86_400_000.0;
const J1970: f64 = 2_440_588.0;
const J2000: f64 = 2_451_545.0;
const OBLIQUITY: f64 = 23.4397 * RAD;
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

#[derive(Debug, Clone, Copy)]
struct Equatorial {
    right_ascension: f64,
    declination: f64,
    distance_km: f64,
}

fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MS_PER_DAY - 0.5 + J1970 - J2000
}

fn right_ascension(longitude: f64, latitude: f64) -> f64 {
    (longitude.sin() * OBLIQUITY.cos() - latitude.tan() * OBLIQUITY.sin()).atan2(longitude.cos())
}

fn declination(longitude: f64, latitude: f64) -> f64 {
    (latitude.sin() * OBLIQUITY.cos() + latitude.cos() * OBLIQUITY.sin() * longitude.sin()).asin()
}

fn sun_position(days: f64) -> Equatorial {
    let mean_anomaly = RAD * (357.5291 + 0.985_600_28 * days);
    let center = RAD
        * (1.9148 * mean_anomaly.sin()
            + 0.02 * (2.0 * mean_anomaly).sin()
            + 0.0003 * (3.0 * mean_anomaly).sin());
    let perihelion = RAD * 102.9372;
    let longitude = mean_anomaly + center + perihelion + PI;

    Equatorial {
        right_ascension: right_ascension(longitude, 0.0),
        declination: declination(longitude, 0.0),
        distance_km: SUN_DISTANCE_KM,
    }
}

fn moon_position(days: f64) -> Equatorial {
    let mean_longitude = RAD * (218.316 + 13.176_396 * days);
    let mean_anomaly = RAD * (134.963 + 13.064_993 * days);
    let argument_of_latitude = RAD * (93.272 + 13.229_350 * days);

    let longitude = mean_longitude + RAD * 6.289 * mean_anomaly.sin();
    let latitude = RAD * 5.128 * argument_of_latitude.sin();

    Equatorial {
        right_ascension: right_ascension(longitude, latitude),
        declination: declination(longitude, latitude),
        distance_km: 385_001.0 - 20_905.0 * mean_anomaly.cos(),
    }
}

/// Illumination from low-precision solar and lunar theory
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemerisProvider;

impl EphemerisProvider {
    pub const NAME: &'static str = "ephemeris";

    pub fn new() -> Self {
        Self
    }

    fn sample(days: f64) -> IlluminationSample {
        let sun = sun_position(days);
        let moon = moon_position(days);
        let delta_ra = sun.right_ascension - moon.right_ascension;

        let cos_elongation = sun.declination.sin() * moon.declination.sin()
            + sun.declination.cos() * moon.declination.cos() * delta_ra.cos();
        let elongation = cos_elongation.clamp(-1.0, 1.0).acos();

        let phase_angle = (sun.distance_km * elongation.sin())
            .atan2(moon.distance_km - sun.distance_km * elongation.cos());
        let limb_angle = (sun.declination.cos() * delta_ra.sin()).atan2(
            sun.declination.sin() * moon.declination.cos()
                - sun.declination.cos() * moon.declination.sin() * delta_ra.cos(),
        );

        let sign = if limb_angle < 0.0 { -1.0 } else { 1.0 };
        let phase = (0.5 + 0.5 * phase_angle * sign / PI).rem_euclid(1.0);
        let fraction = (1.0 + phase_angle.cos()) / 2.0;

        IlluminationSample::new(phase, fraction)
    }
}

impl IlluminationProvider for EphemerisProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample> {
        let sample = Self::sample(days_since_j2000(instant));
        if !sample.phase.is_finite() || !sample.fraction.is_finite() {
            return Err(Error::provider(
                Self::NAME,
                format!("non-finite illumination at {}", instant.to_rfc3339()),
            ));
        }
        Ok(sample)
    }
}
