mod ephemeris;
mod synodic;

pub use ephemeris::EphemerisProvider;
pub use synodic::SynodicProvider;

use crate::Result;
use chrono::{DateTime, Utc};
use moonphase_types::IlluminationSample;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of illumination data for a single instant.
///
/// The calculator relies only on the output contract: `phase` in `[0, 1)`
/// and `fraction` in `[0, 1]`. Failures are reported as
/// [`crate::Error::Provider`] and are never retried.
pub trait IlluminationProvider: Send + Sync {
    fn name(&self) -> &str;
    fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample>;
}

impl<P: IlluminationProvider + ?Sized> IlluminationProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn illumination(&self, instant: DateTime<Utc>) -> Result<IlluminationSample> {
        (**self).illumination(instant)
    }
}

/// Bundled provider selection, as named in configuration and on the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Ephemeris,
    Synodic,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Ephemeris => EphemerisProvider::NAME,
            ProviderKind::Synodic => SynodicProvider::NAME,
        }
    }

    pub fn build(&self) -> Arc<dyn IlluminationProvider> {
        match self {
            ProviderKind::Ephemeris => Arc::new(EphemerisProvider::new()),
            ProviderKind::Synodic => Arc::new(SynodicProvider::new()),
        }
    }
}
