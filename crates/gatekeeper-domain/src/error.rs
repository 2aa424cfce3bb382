//! Errors raised by the engine
//!
//! Every variant is a contract violation by the caller (or a catalog
//! data bug). None are transient, so none should be retried.

use crate::model::action::Action;
use crate::model::visitor::VisitorCategory;
use crate::service::scheduler::SessionPhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation not allowed in the current lifecycle phase
    InvalidState {
        operation: &'static str,
        phase: SessionPhase,
        reason: &'static str,
    },
    /// Action not legal for this visitor under the active policy
    InvalidChoice {
        visitor_id: String,
        category: VisitorCategory,
        action: Action,
    },
    /// Catalog lookup by an unknown id
    NotFound { visitor_id: String },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidState {
                operation,
                phase,
                reason,
            } => {
                write!(f, "Cannot {} while {}: {}", operation, phase, reason)
            }
            GameError::InvalidChoice {
                visitor_id,
                category,
                action,
            } => {
                write!(
                    f,
                    "Cannot {} visitor '{}': not allowed for {} visitors",
                    action, visitor_id, category
                )
            }
            GameError::NotFound { visitor_id } => {
                write!(f, "Visitor '{}' not found in catalog", visitor_id)
            }
        }
    }
}

impl std::error::Error for GameError {}
