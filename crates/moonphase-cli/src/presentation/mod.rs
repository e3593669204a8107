//! Text rendering for terminal output.
//!
//! Renderers return strings so they can be tested without a terminal;
//! callers decide where to print them.

use moonphase_types::{CalculationStage, PhaseClassification, StageSnapshot};
use owo_colors::OwoColorize;

/// One progress line per stage transition
pub fn stage_line(snapshot: &StageSnapshot, color: bool) -> String {
    let label = match snapshot.stage {
        CalculationStage::Idle => "idle",
        CalculationStage::Animating => "animating...",
        CalculationStage::Loading => "loading...",
        CalculationStage::Visible => "done",
        CalculationStage::Failed => "failed",
    };

    if !color {
        return format!("[{}] {}", snapshot.generation, label);
    }

    let label = match snapshot.stage {
        CalculationStage::Visible => label.green().bold().to_string(),
        CalculationStage::Failed => label.red().bold().to_string(),
        _ => label.dimmed().to_string(),
    };
    format!("[{}] {}", snapshot.generation, label)
}

/// Result block for a settled snapshot; empty for anything else
pub fn result_text(snapshot: &StageSnapshot) -> String {
    let Some(result) = &snapshot.result else {
        return String::new();
    };

    let date = snapshot
        .request
        .map(|request| request.date.to_string())
        .unwrap_or_default();

    format!(
        "Date:         {}\nPhase:        {} ({})\nAge:          {} days\nIllumination: {}",
        date,
        result.phase_name,
        result.phase_description,
        result.age_in_days,
        result.age_as_percentage,
    )
}

pub fn classification_text(classification: &PhaseClassification) -> String {
    format!("{} ({})", classification.name, classification.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonphase_types::{
        CalculationRequest, CalendarDate, Direction, Generation, MoonPhaseResult, PhaseName,
        Precision,
    };

    fn visible_snapshot() -> StageSnapshot {
        StageSnapshot {
            generation: Generation::ZERO.next(),
            stage: CalculationStage::Visible,
            animating: false,
            loading: false,
            request: Some(CalculationRequest::new(
                CalendarDate::new(18, 2, 2007),
                Precision::new(2),
            )),
            result: Some(MoonPhaseResult {
                age_in_days: "14.77".to_string(),
                age_as_percentage: "100.00%".to_string(),
                phase_name: "Full Moon".to_string(),
                phase_description: "waning".to_string(),
            }),
            error: None,
        }
    }

    #[test]
    fn test_result_text() {
        insta::assert_snapshot!(result_text(&visible_snapshot()), @r###"
        Date:         2007-02-18
        Phase:        Full Moon (waning)
        Age:          14.77 days
        Illumination: 100.00%
        "###);
    }

    #[test]
    fn test_result_text_empty_without_result() {
        assert_eq!(result_text(&StageSnapshot::default()), "");
    }

    #[test]
    fn test_stage_line_plain() {
        let mut snapshot = visible_snapshot();
        assert_eq!(stage_line(&snapshot, false), "[#1] done");
        snapshot.stage = CalculationStage::Loading;
        assert_eq!(stage_line(&snapshot, false), "[#1] loading...");
    }

    #[test]
    fn test_classification_text() {
        let classification = PhaseClassification::new(PhaseName::OldMoon, Direction::Waning);
        assert_eq!(classification_text(&classification), "Old Moon (waning)");
    }
}
