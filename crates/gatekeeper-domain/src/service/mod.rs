//! Domain Services - The verbs of the game
//!
//! `SessionScheduler` owns a session and drives the other services.

pub mod environment;
pub mod resolution;
pub mod scheduler;
pub mod snapshot;
pub mod timer;
pub mod visitor_queue;
