use crate::machine::{StageMachine, Timer, TimerFired};
use crate::stream::StageStream;
use crate::{Error, Result};
use moonphase_engine::MoonPhaseCalculator;
use moonphase_types::{
    CalculationRequest, CalculationStage, Generation, MoonPhaseResult, StageSnapshot,
};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// Delays armed for every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTimings {
    pub animation: Duration,
    pub loading: Duration,
}

impl StageTimings {
    pub fn new(animation: Duration, loading: Duration) -> Self {
        Self { animation, loading }
    }

    /// Both timers elapse on the next scheduler turn
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for StageTimings {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(1500))
    }
}

enum Command {
    Request {
        request: CalculationRequest,
        reply: oneshot::Sender<Generation>,
    },
    Subscribe(mpsc::UnboundedSender<StageSnapshot>),
    Outcome {
        generation: Generation,
        reply: oneshot::Sender<Result<MoonPhaseResult>>,
    },
}

/// Handle to the task that owns the [`StageMachine`].
///
/// All transitions happen on that one task; timers only send tagged
/// completions back to it. Dropping every handle stops the task.
pub struct CalculationRuntime {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<StageSnapshot>,
    task: JoinHandle<()>,
}

impl CalculationRuntime {
    /// Spawn the owning task on the current tokio runtime.
    pub fn start(calculator: MoonPhaseCalculator, timings: StageTimings) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(StageSnapshot::default());

        let driver = Driver {
            machine: StageMachine::new(),
            calculator,
            timings,
            snapshots: snapshot_tx,
            subscribers: Vec::new(),
            last_transition: (Generation::ZERO, CalculationStage::Idle),
        };
        let task = tokio::spawn(driver.run(command_rx));

        Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    /// Submit a request, superseding any request still in flight.
    pub async fn request(&self, request: CalculationRequest) -> Result<Generation> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::Request {
                request,
                reply: reply_tx,
            })
            .map_err(|_| Error::Stopped)?;
        reply_rx.await.map_err(|_| Error::Stopped)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> StageSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<StageSnapshot> {
        self.snapshots.clone()
    }

    /// Stream of every snapshot published after this call.
    pub fn stream(&self) -> Result<StageStream> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.commands
            .send(Command::Subscribe(tx))
            .map_err(|_| Error::Stopped)?;
        Ok(StageStream::new(rx))
    }

    /// Wait until `generation` is Visible or Failed.
    ///
    /// Fails with [`Error::Superseded`] if a newer request starts first.
    pub async fn wait_settled(&self, generation: Generation) -> Result<StageSnapshot> {
        let mut receiver = self.snapshots.clone();
        let snapshot = receiver
            .wait_for(|snapshot| {
                snapshot.generation > generation
                    || (snapshot.generation == generation && snapshot.stage.is_settled())
            })
            .await
            .map_err(|_| Error::Stopped)?
            .clone();

        if snapshot.generation != generation {
            return Err(Error::Superseded {
                requested: generation,
                current: snapshot.generation,
            });
        }
        Ok(snapshot)
    }

    /// Wait for `generation` to settle and return its typed outcome.
    ///
    /// A failed calculation comes back as [`Error::Engine`] with the
    /// original engine error.
    pub async fn wait_result(&self, generation: Generation) -> Result<MoonPhaseResult> {
        self.wait_settled(generation).await?;

        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::Outcome {
                generation,
                reply: reply_tx,
            })
            .map_err(|_| Error::Stopped)?;
        reply_rx.await.map_err(|_| Error::Stopped)?
    }

    /// Stop the owning task. Pending timers become no-ops.
    pub async fn shutdown(self) {
        drop(self.commands);
        let _ = self.task.await;
    }
}

struct Driver {
    machine: StageMachine,
    calculator: MoonPhaseCalculator,
    timings: StageTimings,
    snapshots: watch::Sender<StageSnapshot>,
    subscribers: Vec<mpsc::UnboundedSender<StageSnapshot>>,
    last_transition: (Generation, CalculationStage),
}

impl Driver {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Request { request, reply }) => {
                        let generation = self.machine.begin(request);
                        self.arm(generation, &timer_tx);
                        self.publish();
                        let _ = reply.send(generation);
                    }
                    Some(Command::Subscribe(subscriber)) => {
                        self.subscribers.push(subscriber);
                    }
                    Some(Command::Outcome { generation, reply }) => {
                        let _ = reply.send(self.machine.outcome_for(generation));
                    }
                    None => break,
                },
                Some(fired) = timer_rx.recv() => {
                    if self.machine.timer_elapsed(fired, &self.calculator) {
                        self.publish();
                    }
                }
            }
        }

        debug!("calculation runtime stopped");
    }

    fn arm(&self, generation: Generation, timers: &mpsc::UnboundedSender<TimerFired>) {
        for (timer, delay) in [
            (Timer::Animation, self.timings.animation),
            (Timer::Loading, self.timings.loading),
        ] {
            let tx = timers.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(TimerFired::new(generation, timer));
            });
        }
    }

    /// The watch channel always gets the latest snapshot; streams only
    /// see changes of stage or generation.
    fn publish(&mut self) {
        let snapshot = self.machine.snapshot();
        let transition = (snapshot.generation, snapshot.stage);
        if transition != self.last_transition {
            self.last_transition = transition;
            self.subscribers
                .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
        }
        self.snapshots.send_replace(snapshot);
    }
}
