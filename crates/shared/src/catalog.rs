//! Catalog file format
//!
//! A custom catalog is a list of visitor definitions:
//!
//! ```yaml
//! visitors:
//!   - id: curiosity
//!     category: positive
//!     name: Curiosity
//!     emoji: "🔍"
//!     bestChoice: accept
//!     insight: Questions open doors.
//!     effects:
//!       accept: { health: 5, calm: 5, score: 10, message: "Your world widens." }
//!       reject: { health: -5, calm: 0, score: 0, message: "A door stays shut." }
//!       challenge: { health: 0, calm: 5, score: 5, message: "You ask why." }
//!       challengeDifficulty: 2
//! ```

use gatekeeper_domain::{
    Action, Catalog, Effect, EffectTable, Visitor, VisitorCategory, VisitorId,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDefinition {
    Positive,
    Negative,
    Complex,
}

impl From<CategoryDefinition> for VisitorCategory {
    fn from(category: CategoryDefinition) -> Self {
        match category {
            CategoryDefinition::Positive => VisitorCategory::Positive,
            CategoryDefinition::Negative => VisitorCategory::Negative,
            CategoryDefinition::Complex => VisitorCategory::Complex,
        }
    }
}

impl From<VisitorCategory> for CategoryDefinition {
    fn from(category: VisitorCategory) -> Self {
        match category {
            VisitorCategory::Positive => CategoryDefinition::Positive,
            VisitorCategory::Negative => CategoryDefinition::Negative,
            VisitorCategory::Complex => CategoryDefinition::Complex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionDefinition {
    Accept,
    Reject,
    Challenge,
}

impl From<ActionDefinition> for Action {
    fn from(action: ActionDefinition) -> Self {
        match action {
            ActionDefinition::Accept => Action::Accept,
            ActionDefinition::Reject => Action::Reject,
            ActionDefinition::Challenge => Action::Challenge,
        }
    }
}

impl From<Action> for ActionDefinition {
    fn from(action: Action) -> Self {
        match action {
            Action::Accept => ActionDefinition::Accept,
            Action::Reject => ActionDefinition::Reject,
            Action::Challenge => ActionDefinition::Challenge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDefinition {
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub calm: i32,
    #[serde(default)]
    pub score: i32,
    pub message: String,
}

impl From<&Effect> for EffectDefinition {
    fn from(effect: &Effect) -> Self {
        Self {
            health: effect.health_delta,
            calm: effect.calm_delta,
            score: effect.score_delta,
            message: effect.message.clone(),
        }
    }
}

impl EffectDefinition {
    fn to_effect(&self) -> Effect {
        Effect::new(self.health, self.calm, self.score, self.message.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsDefinition {
    pub accept: EffectDefinition,
    pub reject: EffectDefinition,
    pub challenge: EffectDefinition,
    #[serde(default = "default_challenge_difficulty")]
    pub challenge_difficulty: u8,
}

fn default_challenge_difficulty() -> u8 {
    1
}

/// One visitor as written in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDefinition {
    pub id: String,
    pub category: CategoryDefinition,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub color: String,
    pub effects: EffectsDefinition,
    pub best_choice: ActionDefinition,
    pub insight: Option<String>,
}

impl VisitorDefinition {
    pub fn to_visitor(&self) -> Visitor {
        let visitor = Visitor::new(
            VisitorId::new(self.id.clone()),
            self.category.into(),
            self.name.clone(),
            EffectTable {
                accept: self.effects.accept.to_effect(),
                reject: self.effects.reject.to_effect(),
                challenge: self.effects.challenge.to_effect(),
                challenge_difficulty: self.effects.challenge_difficulty,
            },
            self.best_choice.into(),
        )
        .with_description(self.description.clone())
        .with_emoji(self.emoji.clone())
        .with_color(self.color.clone());

        match &self.insight {
            Some(insight) => visitor.with_insight(insight.clone()),
            None => visitor,
        }
    }
}

impl From<&Visitor> for VisitorDefinition {
    fn from(visitor: &Visitor) -> Self {
        let effects = visitor.effects();
        Self {
            id: visitor.id().as_str().to_string(),
            category: visitor.category().into(),
            name: visitor.name().to_string(),
            description: visitor.description().to_string(),
            emoji: visitor.emoji().to_string(),
            color: visitor.color().to_string(),
            effects: EffectsDefinition {
                accept: (&effects.accept).into(),
                reject: (&effects.reject).into(),
                challenge: (&effects.challenge).into(),
                challenge_difficulty: effects.challenge_difficulty,
            },
            best_choice: visitor.best_choice().into(),
            insight: visitor.insight().map(str::to_string),
        }
    }
}

/// A whole catalog file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDefinition {
    #[serde(default)]
    pub visitors: Vec<VisitorDefinition>,
}

impl CatalogDefinition {
    /// Build a domain catalog; fails on an empty list, duplicate ids or a
    /// `challengeDifficulty` outside 1-5
    pub fn to_catalog(&self) -> Result<Catalog> {
        let visitors = self.visitors.iter().map(VisitorDefinition::to_visitor).collect();
        Ok(Catalog::new(visitors)?)
    }
}

impl From<&Catalog> for CatalogDefinition {
    fn from(catalog: &Catalog) -> Self {
        Self {
            visitors: catalog
                .all()
                .iter()
                .map(|visitor| VisitorDefinition::from(visitor.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentFormat;
    use crate::error::GatekeeperError;
    use gatekeeper_domain::CatalogError;

    const CURIOSITY: &str = r#"
visitors:
  - id: curiosity
    category: positive
    name: Curiosity
    emoji: "🔍"
    bestChoice: accept
    insight: Questions open doors.
    effects:
      accept: { health: 5, calm: 5, score: 10, message: "Your world widens." }
      reject: { health: -5, message: "A door stays shut." }
      challenge: { calm: 5, score: 5, message: "You ask why." }
      challengeDifficulty: 2
"#;

    #[test]
    fn test_yaml_catalog_parse() {
        let definition: CatalogDefinition = DocumentFormat::Yaml.parse(CURIOSITY).unwrap();
        let catalog = definition.to_catalog().unwrap();

        assert_eq!(catalog.len(), 1);
        let curiosity = catalog.by_id("curiosity").unwrap();
        assert_eq!(curiosity.category(), VisitorCategory::Positive);
        assert_eq!(curiosity.best_choice(), Action::Accept);
        assert_eq!(curiosity.insight(), Some("Questions open doors."));
        assert_eq!(curiosity.effect(Action::Reject).health_delta, -5);
        assert_eq!(curiosity.effect(Action::Reject).calm_delta, 0);
        assert_eq!(curiosity.challenge_difficulty(), 2);
        assert_eq!(curiosity.description(), "");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let definition = CatalogDefinition::default();
        assert!(matches!(
            definition.to_catalog(),
            Err(GatekeeperError::Catalog(CatalogError::Empty))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut definition: CatalogDefinition = DocumentFormat::Yaml.parse(CURIOSITY).unwrap();
        definition.visitors.push(definition.visitors[0].clone());
        assert!(matches!(
            definition.to_catalog(),
            Err(GatekeeperError::Catalog(CatalogError::DuplicateId { .. }))
        ));
    }

    #[test]
    fn test_zero_difficulty_rejected() {
        let yaml = CURIOSITY.replace("challengeDifficulty: 2", "challengeDifficulty: 0");
        let definition: CatalogDefinition = DocumentFormat::Yaml.parse(&yaml).unwrap();
        assert!(matches!(
            definition.to_catalog(),
            Err(GatekeeperError::Catalog(CatalogError::InvalidDifficulty { difficulty: 0, .. }))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let yaml = CURIOSITY.replace("category: positive", "category: neutral");
        let result: Result<CatalogDefinition> = DocumentFormat::Yaml.parse(&yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_catalog_survives_json_export() {
        let builtin = Catalog::builtin();
        let json = serde_json::to_string(&CatalogDefinition::from(&builtin)).unwrap();
        let parsed: CatalogDefinition = DocumentFormat::Json.parse(&json).unwrap();
        let rebuilt = parsed.to_catalog().unwrap();

        assert_eq!(rebuilt.len(), builtin.len());
        for (expected, copy) in builtin.all().iter().zip(rebuilt.all()) {
            assert_eq!(expected.as_ref(), copy.as_ref());
        }
    }
}
