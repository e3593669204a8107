use crate::runtime::StageTimings;
use crate::{Error, Result};
use moonphase_engine::{MoonPhaseCalculator, ProviderKind};
use moonphase_types::{DatePolicy, MidnightZone, Precision};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the config file based on priority:
/// 1. Explicit file path (with tilde expansion)
/// 2. `config.toml` in the MOONPHASE_PATH directory (with tilde expansion)
/// 3. `config.toml` in the platform config directory
/// 4. `~/.moonphase/config.toml` (fallback for systems without one)
pub fn resolve_config_path(explicit_file: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_file {
        return Ok(expand_tilde(path));
    }
    Ok(resolve_config_dir()?.join(CONFIG_FILE))
}

fn resolve_config_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("MOONPHASE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("moonphase"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".moonphase"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or platform config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub animation_ms: u64,
    pub loading_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let defaults = StageTimings::default();
        Self {
            animation_ms: defaults.animation.as_millis() as u64,
            loading_ms: defaults.loading.as_millis() as u64,
        }
    }
}

impl TimingConfig {
    pub fn timings(&self) -> StageTimings {
        StageTimings::new(
            Duration::from_millis(self.animation_ms),
            Duration::from_millis(self.loading_ms),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    pub precision: Precision,
    pub provider: ProviderKind,
    pub timezone: MidnightZone,
    pub date_policy: DatePolicy,
}

impl CalculationConfig {
    pub fn calculator(&self) -> MoonPhaseCalculator {
        MoonPhaseCalculator::new(self.provider.build())
            .with_zone(self.timezone)
            .with_date_policy(self.date_policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub calculation: CalculationConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
