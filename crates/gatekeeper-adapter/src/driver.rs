//! Real-time driver - Runs a session scheduler on the tokio clock
//!
//! The scheduler itself only knows a virtual clock. The driver is an
//! actor task that owns it, maps `tokio::time::Instant` onto that clock,
//! and serializes every command through one channel.
//!
//! ```text
//! EngineHandle ──mpsc<EngineCommand>──▶ EngineDriver ──owns──▶ SessionScheduler
//!      ▲                                     │
//!      └──────────watch<SessionSnapshot>─────┘
//! ```

use std::time::Duration;

use gatekeeper_domain::{
    Action, Feedback, GameError, SessionEvent, SessionPhase, SessionScheduler, SessionSnapshot,
};
use shared::{GatekeeperError, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

const COMMAND_BUFFER: usize = 32;

type Reply<T> = oneshot::Sender<T>;

/// Requests handled by the driver task
#[derive(Debug)]
pub enum EngineCommand {
    Start(Reply<std::result::Result<(), GameError>>),
    Restart(Reply<()>),
    Pause(Reply<std::result::Result<(), GameError>>),
    Resume(Reply<std::result::Result<(), GameError>>),
    TogglePause(Reply<std::result::Result<SessionPhase, GameError>>),
    Choose(Action, Reply<std::result::Result<Feedback, GameError>>),
    Snapshot(Reply<SessionSnapshot>),
    Shutdown,
}

/// The actor owning the scheduler
pub struct EngineDriver {
    scheduler: SessionScheduler,
    commands: mpsc::Receiver<EngineCommand>,
    snapshots: watch::Sender<SessionSnapshot>,
    /// Wall-clock instant matching virtual time zero
    origin: Instant,
    /// Longest the driver sleeps without re-syncing the clock
    tick: Duration,
}

impl EngineDriver {
    /// Run until `Shutdown` or until every handle is dropped
    pub async fn run(mut self) {
        info!(tick_ms = self.tick.as_millis() as u64, "Engine driver started");

        loop {
            self.sync_clock();
            self.publish();

            let wake = self.next_wake();
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(EngineCommand::Shutdown) | None => break,
                    Some(command) => self.handle(command),
                },
                _ = tokio::time::sleep_until(wake) => {}
            }
        }

        self.publish();
        info!(phase = %self.scheduler.phase(), "Engine driver stopped");
    }

    fn handle(&mut self, command: EngineCommand) {
        // commands apply at the moment they arrive
        self.sync_clock();

        // a dropped reply receiver only means the caller stopped waiting
        match command {
            EngineCommand::Start(reply) => {
                let _ = reply.send(self.scheduler.start());
            }
            EngineCommand::Restart(reply) => {
                self.scheduler.restart();
                let _ = reply.send(());
            }
            EngineCommand::Pause(reply) => {
                let _ = reply.send(self.scheduler.pause());
            }
            EngineCommand::Resume(reply) => {
                let _ = reply.send(self.scheduler.resume());
            }
            EngineCommand::TogglePause(reply) => {
                let _ = reply.send(self.scheduler.toggle_pause());
            }
            EngineCommand::Choose(action, reply) => {
                let result = self.scheduler.choose(action);
                if let Err(err) = &result {
                    debug!(%action, error = %err, "Choice refused");
                }
                let _ = reply.send(result);
            }
            EngineCommand::Snapshot(reply) => {
                let _ = reply.send(self.scheduler.snapshot());
            }
            EngineCommand::Shutdown => {}
        }
    }

    fn sync_clock(&mut self) {
        self.scheduler.advance_to(self.origin.elapsed());
    }

    fn next_wake(&self) -> Instant {
        let idle = Instant::now() + self.tick;
        match self.scheduler.next_deadline() {
            Some(deadline) => (self.origin + deadline).min(idle),
            None => idle,
        }
    }

    fn publish(&mut self) {
        for event in self.scheduler.drain_events() {
            log_event(&event);
        }

        let snapshot = self.scheduler.snapshot();
        self.snapshots.send_if_modified(|current| {
            // elapsed time alone is not worth waking subscribers for
            let changed = current.phase != snapshot.phase
                || current.epoch != snapshot.epoch
                || current.state != snapshot.state
                || current.current_visitor != snapshot.current_visitor
                || current.feedback != snapshot.feedback
                || current.queue != snapshot.queue;
            *current = snapshot;
            changed
        });
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::SessionStarted { epoch } => info!(epoch, "Session started"),
        SessionEvent::VisitorPresented { visitor_id, name } => {
            debug!(visitor = %visitor_id, %name, "Visitor at the gate")
        }
        SessionEvent::ChoiceResolved {
            visitor_id,
            action,
            correct,
            score_delta,
            ..
        } => info!(visitor = %visitor_id, %action, correct, score_delta, "Choice resolved"),
        SessionEvent::FeedbackCleared => debug!("Feedback cleared"),
        SessionEvent::Paused => info!("Session paused"),
        SessionEvent::Resumed => info!("Session resumed"),
        SessionEvent::StaleTimerDiscarded { kind, epoch } => {
            warn!(%kind, epoch, "Discarded timer from an earlier session")
        }
        SessionEvent::GameOver { summary } => info!(
            score = summary.score,
            level = summary.level,
            accuracy = summary.accuracy,
            "Game over"
        ),
        SessionEvent::Victory { summary } => info!(
            score = summary.score,
            level = summary.level,
            accuracy = summary.accuracy,
            "Victory"
        ),
    }
}

/// Cloneable front door to a running driver
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::Sender<EngineCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl EngineHandle {
    /// Spawn a driver task for `scheduler` on the current runtime
    pub fn spawn(scheduler: SessionScheduler, tick: Duration) -> (Self, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(scheduler.snapshot());

        let driver = EngineDriver {
            scheduler,
            commands: command_rx,
            snapshots: snapshot_tx,
            origin: Instant::now(),
            tick,
        };
        let task = tokio::spawn(driver.run());

        (
            Self {
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            task,
        )
    }

    pub async fn start(&self) -> Result<()> {
        Ok(self.request(EngineCommand::Start).await??)
    }

    pub async fn restart(&self) -> Result<()> {
        self.request(EngineCommand::Restart).await
    }

    pub async fn pause(&self) -> Result<()> {
        Ok(self.request(EngineCommand::Pause).await??)
    }

    pub async fn resume(&self) -> Result<()> {
        Ok(self.request(EngineCommand::Resume).await??)
    }

    pub async fn toggle_pause(&self) -> Result<SessionPhase> {
        Ok(self.request(EngineCommand::TogglePause).await??)
    }

    pub async fn choose(&self, action: Action) -> Result<Feedback> {
        Ok(self
            .request(|reply| EngineCommand::Choose(action, reply))
            .await??)
    }

    /// Fresh snapshot taken by the driver (clock synced first)
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        self.request(EngineCommand::Snapshot).await
    }

    /// Last published snapshot, without a round trip
    pub fn latest(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified whenever the visible session changes
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.commands
            .send(EngineCommand::Shutdown)
            .await
            .map_err(|_| stopped())
    }

    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> EngineCommand) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(build(reply_tx))
            .await
            .map_err(|_| stopped())?;
        reply_rx.await.map_err(|_| stopped())
    }
}

fn stopped() -> GatekeeperError {
    GatekeeperError::EngineStopped("driver task is no longer running".to_string())
}
