use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use super::handlers::calc::CalcOptions;
use super::logging;
use anyhow::Result;
use moonphase_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Calc {
            day,
            month,
            year,
            precision,
            provider,
            utc,
            strict,
            no_delay,
        } => {
            let config = Config::load_from(&config_path)?;
            let options = CalcOptions {
                day,
                month,
                year,
                precision,
                provider,
                utc,
                strict,
                no_delay,
            };
            handlers::calc::handle(&config, options, cli.format)
        }

        Commands::Classify { phase } => handlers::classify::handle(phase, cli.format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config_path, cli.format),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}
