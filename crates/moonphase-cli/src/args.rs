use crate::types::{LogLevel, OutputFormat, ProviderName};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moonphase")]
#[command(about = "Compute the moon phase for any calendar date", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one calculation through the staged lifecycle and print the result
    Calc {
        #[arg(long)]
        day: u32,

        #[arg(long)]
        month: u32,

        #[arg(long, allow_hyphen_values = true)]
        year: i32,

        /// Fractional digits, clamped to 1..=20
        #[arg(long)]
        precision: Option<u32>,

        #[arg(long)]
        provider: Option<ProviderName>,

        /// Anchor the date to UTC midnight instead of local midnight
        #[arg(long)]
        utc: bool,

        /// Reject dates that are not real calendar days
        #[arg(long)]
        strict: bool,

        /// Skip the animation and loading delays
        #[arg(long)]
        no_delay: bool,
    },

    /// Classify a raw phase value (0 = new moon, 0.5 = full moon)
    Classify {
        #[arg(allow_hyphen_values = true)]
        phase: f64,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        #[arg(long)]
        force: bool,
    },
}
