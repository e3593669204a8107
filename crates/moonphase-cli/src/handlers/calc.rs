use crate::presentation;
use crate::types::{OutputFormat, ProviderName};
use anyhow::{Result, anyhow};
use futures::StreamExt;
use is_terminal::IsTerminal;
use moonphase_engine::MoonPhaseCalculator;
use moonphase_runtime::{CalculationRuntime, Config, StageTimings};
use moonphase_types::{
    CalculationRequest, CalculationStage, CalendarDate, DatePolicy, MidnightZone,
    MoonPhaseResult, Precision, StageSnapshot,
};
use tracing::debug;

pub struct CalcOptions {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub precision: Option<u32>,
    pub provider: Option<ProviderName>,
    pub utc: bool,
    pub strict: bool,
    pub no_delay: bool,
}

pub fn handle(config: &Config, options: CalcOptions, format: OutputFormat) -> Result<()> {
    let mut calculation = config.calculation.clone();
    if let Some(provider) = options.provider {
        calculation.provider = provider.into();
    }
    if options.utc {
        calculation.timezone = MidnightZone::Utc;
    }
    if options.strict {
        calculation.date_policy = DatePolicy::Strict;
    }

    let precision = options
        .precision
        .map(Precision::new)
        .unwrap_or(calculation.precision);
    let request = CalculationRequest::new(
        CalendarDate::new(options.day, options.month, options.year),
        precision,
    );
    let timings = if options.no_delay {
        StageTimings::immediate()
    } else {
        config.timing.timings()
    };

    debug!(provider = calculation.provider.name(), ?timings, "starting calculation");

    let executor = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let (snapshot, outcome) = executor.block_on(run_staged(
        calculation.calculator(),
        timings,
        request,
        format,
    ))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Plain => {
            if snapshot.stage == CalculationStage::Visible {
                println!("{}", presentation::result_text(&snapshot));
            }
        }
    }

    outcome?;
    Ok(())
}

async fn run_staged(
    calculator: MoonPhaseCalculator,
    timings: StageTimings,
    request: CalculationRequest,
    format: OutputFormat,
) -> Result<(StageSnapshot, moonphase_runtime::Result<MoonPhaseResult>)> {
    let runtime = CalculationRuntime::start(calculator, timings);
    let mut stages = runtime.stream()?;
    let generation = runtime.request(request).await?;

    let show_progress = format == OutputFormat::Plain;
    let color = std::io::stderr().is_terminal();

    let mut settled = None;
    while let Some(snapshot) = stages.next().await {
        if snapshot.generation != generation {
            continue;
        }
        if show_progress {
            eprintln!("{}", presentation::stage_line(&snapshot, color));
        }
        if snapshot.stage.is_settled() {
            settled = Some(snapshot);
            break;
        }
    }

    let settled =
        settled.ok_or_else(|| anyhow!("calculation stopped before a result was available"))?;
    let outcome = runtime.wait_result(generation).await;
    runtime.shutdown().await;
    Ok((settled, outcome))
}
