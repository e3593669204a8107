use crate::{Error, Result};
use moonphase_engine::MoonPhaseCalculator;
use moonphase_types::{
    CalculationRequest, CalculationStage, Generation, MoonPhaseResult, StageSnapshot,
};
use tracing::{debug, info, warn};

/// The two delays armed by every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Decorative transition; never gates the result
    Animation,
    /// Artificial latency; the result becomes observable when it elapses
    Loading,
}

/// Timer completion, tagged with the generation it was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub generation: Generation,
    pub timer: Timer,
}

impl TimerFired {
    pub fn new(generation: Generation, timer: Timer) -> Self {
        Self { generation, timer }
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Ready(MoonPhaseResult),
    Failed(moonphase_engine::Error),
}

/// Owner of the current stage and latest result.
///
/// Holds no timers itself: callers arm them for the generation returned by
/// [`StageMachine::begin`] and report completions through
/// [`StageMachine::timer_elapsed`]. Completions for any other generation
/// are ignored, so a superseded request can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct StageMachine {
    generation: Generation,
    animating: bool,
    loading: bool,
    request: Option<CalculationRequest>,
    outcome: Option<Outcome>,
}

impl StageMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Start (or restart) the sequence for a new request.
    ///
    /// The previous result is discarded immediately.
    pub fn begin(&mut self, request: CalculationRequest) -> Generation {
        if self.stage().is_busy() {
            debug!(superseded = %self.generation, "request superseded before loading finished");
        }

        self.generation = self.generation.next();
        self.animating = true;
        self.loading = true;
        self.request = Some(request);
        self.outcome = None;

        info!(
            generation = %self.generation,
            date = %request.date,
            precision = %request.precision,
            "calculation requested"
        );
        self.generation
    }

    /// Apply a timer completion. Returns `true` when the snapshot changed.
    ///
    /// The calculation itself runs when the loading timer of the current
    /// generation elapses.
    pub fn timer_elapsed(&mut self, fired: TimerFired, calculator: &MoonPhaseCalculator) -> bool {
        if fired.generation != self.generation {
            debug!(
                timer = ?fired.timer,
                fired = %fired.generation,
                current = %self.generation,
                "stale timer ignored"
            );
            return false;
        }

        match fired.timer {
            Timer::Animation => {
                if !self.animating {
                    return false;
                }
                self.animating = false;
                debug!(generation = %self.generation, "animation finished");
                true
            }
            Timer::Loading => {
                if !self.loading {
                    return false;
                }
                self.loading = false;

                let Some(request) = self.request else {
                    return false;
                };

                self.outcome = Some(match calculator.compute_request(&request) {
                    Ok(result) => {
                        info!(
                            generation = %self.generation,
                            phase = %result.phase_name,
                            "result visible"
                        );
                        Outcome::Ready(result)
                    }
                    Err(err) => {
                        warn!(generation = %self.generation, error = %err, "calculation failed");
                        Outcome::Failed(err)
                    }
                });
                true
            }
        }
    }

    pub fn stage(&self) -> CalculationStage {
        if self.loading {
            return if self.animating {
                CalculationStage::Animating
            } else {
                CalculationStage::Loading
            };
        }

        match &self.outcome {
            Some(Outcome::Ready(_)) => CalculationStage::Visible,
            Some(Outcome::Failed(_)) => CalculationStage::Failed,
            None => CalculationStage::Idle,
        }
    }

    pub fn result(&self) -> Option<&MoonPhaseResult> {
        match &self.outcome {
            Some(Outcome::Ready(result)) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&moonphase_engine::Error> {
        match &self.outcome {
            Some(Outcome::Failed(err)) => Some(err),
            _ => None,
        }
    }

    /// Typed outcome of `generation` once it has settled.
    pub fn outcome_for(&self, generation: Generation) -> Result<MoonPhaseResult> {
        if generation != self.generation {
            return Err(Error::Superseded {
                requested: generation,
                current: self.generation,
            });
        }

        match &self.outcome {
            Some(Outcome::Ready(result)) => Ok(result.clone()),
            Some(Outcome::Failed(err)) => Err(Error::Engine(err.clone())),
            None => Err(Error::NotSettled(generation)),
        }
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            generation: self.generation,
            stage: self.stage(),
            animating: self.animating,
            loading: self.loading,
            request: self.request,
            result: self.result().cloned(),
            error: self.error().map(|err| err.to_failure()),
        }
    }
}
