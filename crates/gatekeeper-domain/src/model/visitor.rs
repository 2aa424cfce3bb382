//! Visitor - A thought or feeling arriving at the castle gate
//!
//! Visitors are Value Objects: immutable once built, shared by reference
//! between the catalog, the lookahead queue and the scheduler.

use super::action::Action;

/// Unique identifier for a Visitor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad nature of a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitorCategory {
    Positive,
    Negative,
    Complex,
}

impl VisitorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorCategory::Positive => "positive",
            VisitorCategory::Negative => "negative",
            VisitorCategory::Complex => "complex",
        }
    }
}

impl core::fmt::Display for VisitorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to the session when an action is taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub health_delta: i32,
    pub calm_delta: i32,
    pub score_delta: i32,
    pub message: String,
}

impl Effect {
    pub fn new(health_delta: i32, calm_delta: i32, score_delta: i32, message: impl Into<String>) -> Self {
        Self {
            health_delta,
            calm_delta,
            score_delta,
            message: message.into(),
        }
    }
}

/// Effects for all three actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTable {
    pub accept: Effect,
    pub reject: Effect,
    pub challenge: Effect,
    /// How hard the challenge is, shown as stars (1-5)
    pub challenge_difficulty: u8,
}

impl EffectTable {
    pub fn get(&self, action: Action) -> &Effect {
        match action {
            Action::Accept => &self.accept,
            Action::Reject => &self.reject,
            Action::Challenge => &self.challenge,
        }
    }
}

/// Visitor - one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    id: VisitorId,
    category: VisitorCategory,
    name: String,
    description: String,
    emoji: String,
    color: String,
    effects: EffectTable,
    best_choice: Action,
    /// Shown after the visitor has been resolved
    insight: Option<String>,
}

impl Visitor {
    /// Create a visitor with the mandatory fields
    pub fn new(
        id: VisitorId,
        category: VisitorCategory,
        name: impl Into<String>,
        effects: EffectTable,
        best_choice: Action,
    ) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            description: String::new(),
            emoji: String::new(),
            color: String::new(),
            effects,
            best_choice,
            insight: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &VisitorId {
        &self.id
    }

    pub fn category(&self) -> VisitorCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn effects(&self) -> &EffectTable {
        &self.effects
    }

    pub fn best_choice(&self) -> Action {
        self.best_choice
    }

    pub fn insight(&self) -> Option<&str> {
        self.insight.as_deref()
    }

    /// Preview the effect of an action without resolving it
    pub fn effect(&self, action: Action) -> &Effect {
        self.effects.get(action)
    }

    pub fn challenge_difficulty(&self) -> u8 {
        self.effects.challenge_difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Visitor {
        Visitor::new(
            VisitorId::new("joy"),
            VisitorCategory::Positive,
            "Joy",
            EffectTable {
                accept: Effect::new(10, 25, 10, "warm"),
                reject: Effect::new(0, -15, 0, "dim"),
                challenge: Effect::new(5, 20, 12, "simple"),
                challenge_difficulty: 1,
            },
            Action::Accept,
        )
    }

    #[test]
    fn test_builder_defaults() {
        let visitor = sample();
        assert_eq!(visitor.id().as_str(), "joy");
        assert_eq!(visitor.description(), "");
        assert!(visitor.insight().is_none());
    }

    #[test]
    fn test_builder_with_presentation() {
        let visitor = sample()
            .with_description("Pure happiness")
            .with_emoji("🌈")
            .with_color("#FF69B4")
            .with_insight("Embrace it");
        assert_eq!(visitor.description(), "Pure happiness");
        assert_eq!(visitor.emoji(), "🌈");
        assert_eq!(visitor.color(), "#FF69B4");
        assert_eq!(visitor.insight(), Some("Embrace it"));
    }

    #[test]
    fn test_effect_lookup() {
        let visitor = sample();
        assert_eq!(visitor.effect(Action::Reject).calm_delta, -15);
        assert_eq!(visitor.effect(Action::Challenge).score_delta, 12);
        assert_eq!(visitor.challenge_difficulty(), 1);
    }
}
