//! # Gatekeeper Adapter Layer
//!
//! Implementations of what the domain leaves abstract (Hexagonal
//! Architecture adapters).
//!
//! ## Structure
//!
//! - `random` - `RandomSource` backed by `rand::rngs::StdRng`
//! - `catalog_loader` - Custom catalogs from YAML/JSON files
//! - `session` - Wiring a `SessionScheduler` from a `GameConfig`
//! - `driver` - Tokio task that runs a session in real time

pub mod catalog_loader;
pub mod driver;
pub mod random;
pub mod session;

pub use catalog_loader::CatalogLoader;
pub use driver::{EngineCommand, EngineDriver, EngineHandle};
pub use random::SeededRandom;
pub use session::build_scheduler;
