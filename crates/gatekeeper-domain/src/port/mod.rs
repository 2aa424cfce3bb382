//! Ports - What the domain needs from the outside world
//!
//! These traits define WHAT the domain wants (e.g. a source of random
//! picks) but NOT how it's provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RandomSource    │  SeededRandom (rand::StdRng)
//!   fn pick()           │  ScriptedRandom (tests, replays)
//! ```

pub mod random;
