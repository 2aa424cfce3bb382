//! SessionState - Resources, environment and progress of one play-through
//!
//! Fields are private so the invariants hold for every value that can be
//! observed:
//!
//! - `0 <= structure_health <= 100` and `0 <= inner_calm <= 100`
//! - `weather` / `mood` always match the two resources
//! - `correct_choices <= total_visitors`
//! - `level == total_visitors / 10 + 1`

use super::climate::{Mood, Weather};
use crate::service::environment::derive_environment;

/// Upper bound of both resources
pub const MAX_RESOURCE: u8 = 100;

/// Visitors resolved per level
pub const VISITORS_PER_LEVEL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    structure_health: u8,
    inner_calm: u8,
    weather: Weather,
    mood: Mood,
    score: u32,
    level: u32,
    total_visitors: u32,
    correct_choices: u32,
}

impl SessionState {
    /// The state every session starts from
    pub fn initial() -> Self {
        Self::compose(MAX_RESOURCE, MAX_RESOURCE, 0, 0, 0)
    }

    /// Replace both resources, clamping to `0..=100`
    pub fn with_resources(self, structure_health: u8, inner_calm: u8) -> Self {
        Self::compose(
            structure_health.min(MAX_RESOURCE),
            inner_calm.min(MAX_RESOURCE),
            self.score,
            self.total_visitors,
            self.correct_choices,
        )
    }

    pub fn with_score(self, score: u32) -> Self {
        Self { score, ..self }
    }

    /// Replace the progress counters; `correct_choices` is capped at `total_visitors`
    pub fn with_progress(self, total_visitors: u32, correct_choices: u32) -> Self {
        Self::compose(
            self.structure_health,
            self.inner_calm,
            self.score,
            total_visitors,
            correct_choices.min(total_visitors),
        )
    }

    /// Builds a state and fills in every derived field.
    /// Callers must pass resources already within bounds.
    pub(crate) fn compose(
        structure_health: u8,
        inner_calm: u8,
        score: u32,
        total_visitors: u32,
        correct_choices: u32,
    ) -> Self {
        let (weather, mood) = derive_environment(structure_health, inner_calm);
        Self {
            structure_health,
            inner_calm,
            weather,
            mood,
            score,
            level: level_for(total_visitors),
            total_visitors,
            correct_choices,
        }
    }

    // ========== Getters ==========

    pub fn structure_health(&self) -> u8 {
        self.structure_health
    }

    pub fn inner_calm(&self) -> u8 {
        self.inner_calm
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_visitors(&self) -> u32 {
        self.total_visitors
    }

    pub fn correct_choices(&self) -> u32 {
        self.correct_choices
    }

    /// Share of correct choices as a rounded percentage (0 before any visitor)
    pub fn accuracy(&self) -> u32 {
        if self.total_visitors == 0 {
            return 0;
        }
        // round-half-up of correct * 100 / total
        let correct = u64::from(self.correct_choices);
        let total = u64::from(self.total_visitors);
        ((correct * 200 + total) / (total * 2)) as u32
    }

    /// Either resource has run out
    pub fn is_depleted(&self) -> bool {
        self.structure_health == 0 || self.inner_calm == 0
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// `floor(total / 10) + 1`
pub fn level_for(total_visitors: u32) -> u32 {
    total_visitors / VISITORS_PER_LEVEL + 1
}
