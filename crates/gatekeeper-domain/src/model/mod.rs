//! Domain Models - The vocabulary of the gate
//!
//! Visitors knock, the gatekeeper answers with an action, and the
//! castle's health and calm show up as weather and mood.

pub mod action;
pub mod climate;
pub mod session_state;
pub mod visitor;
