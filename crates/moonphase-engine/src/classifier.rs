use moonphase_types::{Direction, PhaseClassification, PhaseName};

/// Map a phase in `[0, 1)` to its named category and direction.
///
/// Quarter points are matched exactly and take priority over the open
/// ranges between them. Anything that matches no earlier branch, including
/// negative, `>= 1` and NaN inputs, lands in the Old Moon bucket.
#[allow(clippy::float_cmp)]
pub fn classify(phase: f64) -> PhaseClassification {
    use Direction::{Waning, Waxing};

    let (name, direction) = if phase == 0.0 {
        (PhaseName::NewMoon, Waxing)
    } else if phase > 0.0 && phase < 0.25 {
        (PhaseName::YoungMoon, Waxing)
    } else if phase == 0.25 {
        (PhaseName::FirstQuarter, Waxing)
    } else if phase > 0.25 && phase < 0.5 {
        (PhaseName::WaxingGibbous, Waxing)
    } else if phase == 0.5 {
        (PhaseName::FullMoon, Waning)
    } else if phase > 0.5 && phase < 0.75 {
        (PhaseName::WaningGibbous, Waning)
    } else if phase == 0.75 {
        (PhaseName::LastQuarter, Waning)
    } else {
        (PhaseName::OldMoon, Waning)
    };

    PhaseClassification::new(name, direction)
}
