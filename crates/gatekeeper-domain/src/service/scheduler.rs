//! Session Scheduler - Lifecycle and timing of one play session
//!
//! The scheduler is the only owner of the mutable session: state,
//! lookahead queue, presented visitor, feedback and pending timers.
//! It runs on its own virtual clock. Nothing happens between calls;
//! the host moves time forward with [`SessionScheduler::advance`] and
//! due timers fire inside that call, in deadline order.
//!
//! ```text
//! NotStarted ──start──▶ Running ◀──resume── Paused
//!                          │   ──pause───▶
//!                          ├──▶ GameOver  (health or calm hits 0)
//!                          └──▶ Victory   (level > 10, both > 80)
//! any phase ──restart──▶ Running
//! ```
//!
//! Like the rest of the domain this has no I/O. Notable transitions are
//! recorded as [`SessionEvent`]s for the host to drain and log.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use super::resolution::{ChoiceResolver, Feedback};
use super::snapshot::{SessionSnapshot, SessionSummary};
use super::timer::{PendingTimer, TimerKind, TimerSet};
use super::visitor_queue::VisitorQueue;
use crate::catalog::Catalog;
use crate::error::GameError;
use crate::model::action::{Action, ChallengePolicy};
use crate::model::session_state::SessionState;
use crate::model::visitor::Visitor;
use crate::port::random::RandomSource;

/// Victory needs a level strictly above this
pub const VICTORY_LEVEL: u32 = 10;

/// ...and both resources strictly above this
pub const VICTORY_RESOURCE_THRESHOLD: u8 = 80;

/// Oldest events are dropped once this many are waiting to be drained
pub const MAX_BUFFERED_EVENTS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
    Victory,
}

impl SessionPhase {
    /// Only `restart` leaves a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::GameOver | SessionPhase::Victory)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::Running => "running",
            SessionPhase::Paused => "paused",
            SessionPhase::GameOver => "game over",
            SessionPhase::Victory => "victory",
        }
    }
}

impl core::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timings and rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSettings {
    pub start_delay: Duration,
    pub feedback_duration: Duration,
    pub auto_advance_delay: Duration,
    pub resume_delay: Duration,
    pub challenge_policy: ChallengePolicy,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(1000),
            feedback_duration: Duration::from_millis(2000),
            auto_advance_delay: Duration::from_millis(3000),
            resume_delay: Duration::from_millis(500),
            challenge_policy: ChallengePolicy::ComplexOnly,
        }
    }
}

/// Events recorded by the scheduler
///
/// Used for logging and UI notifications. The scheduler never reads
/// them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A fresh session began (start or restart)
    SessionStarted { epoch: u64 },
    VisitorPresented {
        visitor_id: String,
        name: String,
    },
    ChoiceResolved {
        visitor_id: String,
        action: Action,
        correct: bool,
        score_delta: i64,
        feedback: String,
    },
    FeedbackCleared,
    Paused,
    Resumed,
    /// A timer from an earlier session reached the clock and was dropped
    StaleTimerDiscarded { kind: TimerKind, epoch: u64 },
    GameOver { summary: SessionSummary },
    Victory { summary: SessionSummary },
}

pub struct SessionScheduler {
    settings: SchedulerSettings,
    resolver: ChoiceResolver,
    queue: VisitorQueue,
    phase: SessionPhase,
    state: SessionState,
    current_visitor: Option<Arc<Visitor>>,
    feedback: Option<Feedback>,
    timers: TimerSet,
    clock: Duration,
    /// Bumped by every start/restart; timers carry the epoch that armed them
    epoch: u64,
    events: VecDeque<SessionEvent>,
}

impl SessionScheduler {
    pub fn new(
        catalog: Arc<Catalog>,
        rng: Box<dyn RandomSource>,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            resolver: ChoiceResolver::new(settings.challenge_policy),
            settings,
            queue: VisitorQueue::new(catalog, rng),
            phase: SessionPhase::NotStarted,
            state: SessionState::initial(),
            current_visitor: None,
            feedback: None,
            timers: TimerSet::new(),
            clock: Duration::ZERO,
            epoch: 0,
            events: VecDeque::new(),
        }
    }

    // ========== Lifecycle ==========

    /// Begin the first session
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(self.invalid("start", "session already started, use restart"));
        }
        self.begin_session();
        Ok(())
    }

    /// Drop every pending timer and begin a fresh session, from any phase
    pub fn restart(&mut self) {
        self.begin_session();
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        match self.phase {
            SessionPhase::Running => {}
            SessionPhase::Paused => return Err(self.invalid("pause", "already paused")),
            _ => return Err(self.invalid("pause", "session is not running")),
        }

        self.phase = SessionPhase::Paused;
        // feedback keeps counting down; nothing may present a visitor
        self.timers.cancel(TimerKind::AutoAdvance);
        self.timers.cancel(TimerKind::StartDelay);
        self.timers.cancel(TimerKind::ResumeDelay);
        self.record(SessionEvent::Paused);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), GameError> {
        if self.phase != SessionPhase::Paused {
            return Err(self.invalid("resume", "session is not paused"));
        }

        self.phase = SessionPhase::Running;
        if self.current_visitor.is_none() && self.feedback.is_none() {
            self.arm(TimerKind::ResumeDelay, self.settings.resume_delay);
        }
        self.record(SessionEvent::Resumed);
        self.sync_auto_advance();
        Ok(())
    }

    /// Pause when running, resume when paused; returns the new phase
    pub fn toggle_pause(&mut self) -> Result<SessionPhase, GameError> {
        if self.phase == SessionPhase::Paused {
            self.resume()?;
        } else {
            self.pause()?;
        }
        Ok(self.phase)
    }

    /// Resolve the presented visitor with `action`
    ///
    /// On success the visitor is cleared together with the state commit,
    /// so the same visitor can never be resolved twice.
    pub fn choose(&mut self, action: Action) -> Result<Feedback, GameError> {
        match self.phase {
            SessionPhase::Running => {}
            SessionPhase::Paused => return Err(self.invalid("choose", "session is paused")),
            SessionPhase::NotStarted => {
                return Err(self.invalid("choose", "session has not started"))
            }
            SessionPhase::GameOver | SessionPhase::Victory => {
                return Err(self.invalid("choose", "session has ended, restart to play again"))
            }
        }
        if self.feedback.is_some() {
            return Err(self.invalid("choose", "feedback is still displayed"));
        }
        let visitor = match &self.current_visitor {
            Some(visitor) => Arc::clone(visitor),
            None => return Err(self.invalid("choose", "no visitor at the gate")),
        };

        let resolution = self.resolver.resolve(&self.state, &visitor, action)?;

        self.state = resolution.state;
        self.current_visitor = None;
        self.feedback = Some(resolution.feedback.clone());
        self.arm(TimerKind::FeedbackDisplay, self.settings.feedback_duration);
        self.record(SessionEvent::ChoiceResolved {
            visitor_id: resolution.feedback.visitor_id.clone(),
            action,
            correct: resolution.feedback.correct,
            score_delta: resolution.feedback.score_delta,
            feedback: resolution.feedback.text.clone(),
        });

        self.check_termination();
        self.sync_auto_advance();
        Ok(resolution.feedback)
    }

    // ========== Clock ==========

    /// Move the virtual clock forward, firing every timer that comes due
    ///
    /// Timers armed while firing are honoured within the same call if
    /// they fall inside the window.
    pub fn advance(&mut self, delta: Duration) {
        let target = self.clock.saturating_add(delta);
        while let Some(timer) = self.timers.pop_due(target) {
            self.clock = self.clock.max(timer.due);
            self.fire(timer);
        }
        self.clock = target;
    }

    /// Advance to an absolute clock reading; earlier readings are ignored
    pub fn advance_to(&mut self, elapsed: Duration) {
        if elapsed > self.clock {
            self.advance(elapsed - self.clock);
        }
    }

    /// Clock time of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    // ========== Accessors ==========

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_visitor(&self) -> Option<&Arc<Visitor>> {
        self.current_visitor.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Lookahead queue, nearest first
    pub fn upcoming(&self) -> Vec<Arc<Visitor>> {
        self.queue.upcoming()
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.queue.catalog()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Kinds of the pending timers, earliest first
    pub fn pending_timers(&self) -> Vec<TimerKind> {
        self.timers.kinds()
    }

    /// Actions `choose` would accept right now (empty when it would fail)
    pub fn allowed_actions(&self) -> Vec<Action> {
        match (&self.current_visitor, self.phase) {
            (Some(visitor), SessionPhase::Running) => self.resolver.allowed_actions(visitor),
            _ => Vec::new(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.phase, &self.state)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            state: self.state.clone(),
            current_visitor: self.current_visitor.clone(),
            feedback: self.feedback.clone(),
            queue: self.queue.upcoming(),
            allowed_actions: self.allowed_actions(),
            elapsed: self.clock,
            epoch: self.epoch,
        }
    }

    /// Take every recorded event, oldest first
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    // ========== Internals ==========

    fn begin_session(&mut self) {
        self.epoch += 1;
        self.timers.cancel_all();
        self.state = SessionState::initial();
        self.current_visitor = None;
        self.feedback = None;
        self.queue.initialize();
        self.phase = SessionPhase::Running;
        self.arm(TimerKind::StartDelay, self.settings.start_delay);
        self.record(SessionEvent::SessionStarted { epoch: self.epoch });
        self.sync_auto_advance();
    }

    fn fire(&mut self, timer: PendingTimer) {
        if timer.epoch != self.epoch {
            self.record(SessionEvent::StaleTimerDiscarded {
                kind: timer.kind,
                epoch: timer.epoch,
            });
            return;
        }

        if timer.kind == TimerKind::FeedbackDisplay {
            self.feedback = None;
            self.record(SessionEvent::FeedbackCleared);
        }
        // A presentation timer that finds the gate occupied is a no-op
        if self.can_present() {
            self.present_next();
        }
        self.sync_auto_advance();
    }

    /// Running, nobody at the gate and no feedback on screen
    fn can_present(&self) -> bool {
        self.phase == SessionPhase::Running
            && self.current_visitor.is_none()
            && self.feedback.is_none()
    }

    fn present_next(&mut self) {
        let visitor = self.queue.next();
        self.record(SessionEvent::VisitorPresented {
            visitor_id: visitor.id().as_str().to_string(),
            name: visitor.name().to_string(),
        });
        self.current_visitor = Some(visitor);
    }

    /// Arm the idle-gate timer when its preconditions hold, cancel it when they don't
    fn sync_auto_advance(&mut self) {
        let wanted = self.can_present();
        let armed = self.timers.is_armed(TimerKind::AutoAdvance);
        if wanted && !armed {
            self.arm(TimerKind::AutoAdvance, self.settings.auto_advance_delay);
        } else if !wanted && armed {
            self.timers.cancel(TimerKind::AutoAdvance);
        }
    }

    fn check_termination(&mut self) {
        let outcome = if self.state.is_depleted() {
            SessionPhase::GameOver
        } else if self.state.level() > VICTORY_LEVEL
            && self.state.structure_health() > VICTORY_RESOURCE_THRESHOLD
            && self.state.inner_calm() > VICTORY_RESOURCE_THRESHOLD
        {
            SessionPhase::Victory
        } else {
            return;
        };

        self.phase = outcome;
        self.timers.cancel(TimerKind::AutoAdvance);
        self.timers.cancel(TimerKind::StartDelay);
        self.timers.cancel(TimerKind::ResumeDelay);

        let summary = self.summary();
        self.record(match outcome {
            SessionPhase::Victory => SessionEvent::Victory { summary },
            _ => SessionEvent::GameOver { summary },
        });
    }

    fn arm(&mut self, kind: TimerKind, delay: Duration) {
        let due = self.clock.saturating_add(delay);
        self.timers.arm(kind, due, self.epoch);
    }

    fn record(&mut self, event: SessionEvent) {
        if self.events.len() >= MAX_BUFFERED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn invalid(&self, operation: &'static str, reason: &'static str) -> GameError {
        GameError::InvalidState {
            operation,
            phase: self.phase,
            reason,
        }
    }
}

impl core::fmt::Debug for SessionScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionScheduler")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field(
                "current_visitor",
                &self.current_visitor.as_ref().map(|v| v.id().as_str()),
            )
            .field("feedback", &self.feedback.as_ref().map(|fb| fb.text.as_str()))
            .field("timers", &self.timers.kinds())
            .field("clock", &self.clock)
            .field("epoch", &self.epoch)
            .finish()
    }
}
