// Engine module - Core calculation logic (classification, formatting, providers)
// This layer sits between the data model (types) and the staged runtime

pub mod calculator;
pub mod classifier;
pub mod error;
pub mod format;
pub mod provider;

pub use calculator::{MoonPhaseCalculator, assemble_result};
pub use classifier::classify;
pub use error::{Error, Result};
pub use format::{MAX_DIGITS, format_fixed, format_percentage};
pub use provider::{EphemerisProvider, IlluminationProvider, ProviderKind, SynodicProvider};
