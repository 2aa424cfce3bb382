//! Read-only views handed to the presentation layer
//!
//! Everything here is a value copy (visitors are immutable and shared
//! by `Arc`), so holding a snapshot never blocks or aliases the engine.

use std::sync::Arc;
use std::time::Duration;

use super::resolution::Feedback;
use super::scheduler::SessionPhase;
use crate::model::action::Action;
use crate::model::session_state::SessionState;
use crate::model::visitor::Visitor;

/// How many queued visitors the "approaching" panel shows by name
pub const APPROACHING_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub state: SessionState,
    pub current_visitor: Option<Arc<Visitor>>,
    pub feedback: Option<Feedback>,
    /// Lookahead queue, nearest first
    pub queue: Vec<Arc<Visitor>>,
    /// Actions `choose` would currently accept
    pub allowed_actions: Vec<Action>,
    pub elapsed: Duration,
    pub epoch: u64,
}

impl SessionSnapshot {
    pub fn approaching(&self) -> Approaching {
        let shown: Vec<_> = self
            .queue
            .iter()
            .take(APPROACHING_PREVIEW)
            .cloned()
            .collect();
        Approaching {
            more: self.queue.len() - shown.len(),
            shown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.phase, &self.state)
    }
}

/// The first few queued visitors plus a count of the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approaching {
    pub shown: Vec<Arc<Visitor>>,
    pub more: usize,
}

/// End-of-session figures for game-over and victory screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: SessionPhase,
    pub score: u32,
    pub level: u32,
    pub total_visitors: u32,
    pub correct_choices: u32,
    /// Rounded percentage
    pub accuracy: u32,
}

impl SessionSummary {
    pub fn new(outcome: SessionPhase, state: &SessionState) -> Self {
        Self {
            outcome,
            score: state.score(),
            level: state.level(),
            total_visitors: state.total_visitors(),
            correct_choices: state.correct_choices(),
            accuracy: state.accuracy(),
        }
    }
}
