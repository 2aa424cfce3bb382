//! # Gatekeeper Domain Layer
//!
//! The engine of the Inner Gatekeeper: pure game rules with zero
//! external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Visitors, actions, session state, climate       ││
//! │  │  catalog/ - The visitor catalog (builtin or loaded)         ││
//! │  │  port/    - Traits the outside world implements (random)    ││
//! │  │  service/ - Queue, resolution, environment, scheduler       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Time is a virtual clock advanced by the host, randomness comes in
//! through [`RandomSource`]. Swap the terminal for a GUI or tokio for a
//! game loop and nothing in here changes.

pub mod catalog;
pub mod error;
pub mod model;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use error::GameError;

pub use model::{
    action::{Action, ChallengePolicy, ParseActionError},
    climate::{Mood, Weather},
    session_state::{SessionState, MAX_RESOURCE, VISITORS_PER_LEVEL},
    visitor::{Effect, EffectTable, Visitor, VisitorCategory, VisitorId},
};

pub use port::random::{RandomSource, ScriptedRandom};

pub use service::{
    environment::derive_environment,
    resolution::{ChoiceResolver, Feedback, Resolution},
    scheduler::{SchedulerSettings, SessionEvent, SessionPhase, SessionScheduler},
    snapshot::{Approaching, SessionSnapshot, SessionSummary},
    timer::TimerKind,
    visitor_queue::{VisitorQueue, QUEUE_SIZE},
};
