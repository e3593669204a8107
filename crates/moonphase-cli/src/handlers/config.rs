use crate::types::OutputFormat;
use anyhow::{Result, bail};
use moonphase_runtime::Config;
use std::path::Path;

pub fn show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Plain => {
            let source = if config_path.exists() {
                config_path.display().to_string()
            } else {
                format!("{} (not found, using defaults)", config_path.display())
            };
            println!("# {}", source);
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
