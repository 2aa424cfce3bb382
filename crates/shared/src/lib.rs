//! # Inner Gatekeeper Shared
//!
//! Types used across the adapter and CLI crates: configuration,
//! file formats for custom catalogs and the application error type.

pub mod catalog;
pub mod config;
pub mod error;

// Re-exports
pub use catalog::*;
pub use config::*;
pub use error::*;
