//! Illumination providers for tests.
//!
//! All providers here are deterministic and count how often they are
//! called, so tests can verify that a calculation ran exactly once.

use chrono::{DateTime, NaiveDate, Utc};
use moonphase_engine::{Error, IlluminationProvider, Result};
use moonphase_types::IlluminationSample;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same sample for every instant.
#[derive(Debug)]
pub struct FixedProvider {
    sample: IlluminationSample,
    calls: AtomicUsize,
}

impl FixedProvider {
    pub const NAME: &'static str = "fixed";

    pub fn new(phase: f64, fraction: f64) -> Self {
        Self {
            sample: IlluminationSample::new(phase, fraction),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IlluminationProvider for FixedProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn illumination(&self, _instant: DateTime<Utc>) -> Result<IlluminationSample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.sample)
    }
}

/// Returns a pre-recorded sample per UTC calendar day.
///
/// Days without a sample fail with a provider error.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    samples: HashMap<NaiveDate, IlluminationSample>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub const NAME: &'static str = "scripted";

    pub fn new() -> Self {
        Self::default()
    }

    /// # Example
    /// ```
    /// # use moonphase_testing::ScriptedProvider;
    /// let provider = ScriptedProvider::new().with_sample(2024, 1, 25, 0.5, 1.0);
    /// assert_eq!(provider.calls(), 0);
    /// ```
    pub fn with_sample(mut self, year: i32, month: u32, day: u32, phase: f64, fraction: f64) -> Self {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.samples
                .insert(date, IlluminationSample::new(phase, fraction));
        }
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IlluminationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let day = instant.date_naive();
        self.samples
            .get(&day)
            .copied()
            .ok_or_else(|| Error::provider(Self::NAME, format!("no sample for {}", day)))
    }
}

/// Fails every call with the configured message.
#[derive(Debug)]
pub struct FailingProvider {
    message: String,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub const NAME: &'static str = "failing";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IlluminationProvider for FailingProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn illumination(&self, _instant: DateTime<Utc>) -> Result<IlluminationSample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::provider(Self::NAME, self.message.clone()))
    }
}
