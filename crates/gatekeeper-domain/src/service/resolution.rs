//! Choice Resolution - Apply an action to a visitor and the session
//!
//! Pure: takes the current state by reference and returns the next one.
//! Committing it (and showing the feedback) is the scheduler's job.

use crate::error::GameError;
use crate::model::action::{Action, ChallengePolicy};
use crate::model::session_state::{SessionState, MAX_RESOURCE};
use crate::model::visitor::Visitor;

/// Extra score for picking the visitor's best choice
pub const CORRECT_CHOICE_BONUS: i64 = 10;

/// Text and context shown after a visitor is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// "✅ " or "❌ " followed by the effect message
    pub text: String,
    pub correct: bool,
    pub visitor_id: String,
    pub action: Action,
    /// Applied score change, bonus included
    pub score_delta: i64,
    pub insight: Option<String>,
}

/// Outcome of resolving one visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: SessionState,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceResolver {
    policy: ChallengePolicy,
}

impl ChoiceResolver {
    pub fn new(policy: ChallengePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ChallengePolicy {
        self.policy
    }

    /// Fails with `InvalidChoice` when the policy forbids `action` for this visitor
    pub fn check(&self, visitor: &Visitor, action: Action) -> Result<(), GameError> {
        if self.policy.permits(visitor.category(), action) {
            Ok(())
        } else {
            Err(GameError::InvalidChoice {
                visitor_id: visitor.id().as_str().to_string(),
                category: visitor.category(),
                action,
            })
        }
    }

    /// Actions the gatekeeper may take against `visitor`
    pub fn allowed_actions(&self, visitor: &Visitor) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.policy.permits(visitor.category(), *action))
            .collect()
    }

    /// Resolve `visitor` with `action`, producing the next state and feedback
    pub fn resolve(
        &self,
        state: &SessionState,
        visitor: &Visitor,
        action: Action,
    ) -> Result<Resolution, GameError> {
        self.check(visitor, action)?;

        let effect = visitor.effect(action);
        let correct = action == visitor.best_choice();
        let bonus = if correct { CORRECT_CHOICE_BONUS } else { 0 };
        let score_delta = i64::from(effect.score_delta) + bonus;

        let health = apply_delta(state.structure_health(), effect.health_delta);
        let calm = apply_delta(state.inner_calm(), effect.calm_delta);
        let score = (i64::from(state.score()) + score_delta).clamp(0, i64::from(u32::MAX)) as u32;
        let total = state.total_visitors().saturating_add(1);
        let correct_choices = state.correct_choices() + u32::from(correct);

        let marker = if correct { "✅ " } else { "❌ " };

        Ok(Resolution {
            state: SessionState::compose(health, calm, score, total, correct_choices),
            feedback: Feedback {
                text: format!("{}{}", marker, effect.message),
                correct,
                visitor_id: visitor.id().as_str().to_string(),
                action,
                score_delta,
                insight: visitor.insight().map(str::to_string),
            },
        })
    }
}

/// `clamp(value + delta, 0, 100)`
fn apply_delta(value: u8, delta: i32) -> u8 {
    (i64::from(value) + i64::from(delta)).clamp(0, i64::from(MAX_RESOURCE)) as u8
}
