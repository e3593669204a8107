pub mod config;
pub mod error;
pub mod machine;
pub mod runtime;
pub mod stream;

pub use config::{CONFIG_FILE, CalculationConfig, Config, TimingConfig, resolve_config_path};
pub use error::{Error, Result};
pub use machine::{StageMachine, Timer, TimerFired};
pub use runtime::{CalculationRuntime, StageTimings};
pub use stream::StageStream;
