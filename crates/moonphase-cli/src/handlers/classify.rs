use crate::presentation;
use crate::types::OutputFormat;
use anyhow::Result;
use moonphase_engine::classify;

pub fn handle(phase: f64, format: OutputFormat) -> Result<()> {
    let classification = classify(phase);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classification)?),
        OutputFormat::Plain => println!("{}", presentation::classification_text(&classification)),
    }

    Ok(())
}
