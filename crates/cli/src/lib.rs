//! # Inner Gatekeeper CLI
//!
//! Library half of the `gatekeeper` binary, split out so the command
//! implementations can be tested.

pub mod commands;
pub mod interactive;
pub mod render;
