//! CatalogLoader - Load visitor catalogs from YAML/JSON files

use std::path::Path;

use gatekeeper_domain::Catalog;
use shared::{load_document, CatalogDefinition, GameConfig, Result};
use tracing::{debug, info};

/// Catalog loader
#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file; the extension picks the format
    pub fn load_from_file(path: &Path) -> Result<Catalog> {
        let definition: CatalogDefinition = load_document(path)?;
        let catalog = definition.to_catalog()?;
        info!(
            path = %path.display(),
            visitors = catalog.len(),
            "Loaded custom catalog"
        );
        Ok(catalog)
    }

    /// The configured catalog, or the built-in one
    pub fn for_config(config: &GameConfig) -> Result<Catalog> {
        match &config.catalog_path {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("Using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GatekeeperError;

    const TWO_VISITORS: &str = r#"
visitors:
  - id: hope
    category: positive
    name: Hope
    bestChoice: accept
    effects:
      accept: { health: 10, calm: 10, score: 10, message: "Light returns." }
      reject: { health: -10, calm: -10, message: "The dark deepens." }
      challenge: { score: 5, message: "You test it gently." }
  - id: dread
    category: complex
    name: Dread
    bestChoice: challenge
    effects:
      accept: { health: -20, calm: -20, message: "Dread settles in." }
      reject: { calm: -5, message: "It lingers outside." }
      challenge: { health: 5, calm: 10, score: 20, message: "You name it and it shrinks." }
      challengeDifficulty: 4
"#;

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitors.yaml");
        std::fs::write(&path, TWO_VISITORS).unwrap();

        let catalog = CatalogLoader::load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_id("dread").unwrap().challenge_difficulty(), 4);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitors.json");
        std::fs::write(
            &path,
            r#"{"visitors":[{"id":"x","category":"negative","name":"X","bestChoice":"reject",
            "effects":{"accept":{"message":"a"},"reject":{"message":"r"},"challenge":{"message":"c"}}}]}"#,
        )
        .unwrap();

        let catalog = CatalogLoader::load_from_file(&path).unwrap();
        assert_eq!(catalog.all()[0].id().as_str(), "x");
    }

    #[test]
    fn test_empty_file_catalog_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitors.yaml");
        std::fs::write(&path, "visitors: []\n").unwrap();

        assert!(matches!(
            CatalogLoader::load_from_file(&path),
            Err(GatekeeperError::Catalog(_))
        ));
    }

    #[test]
    fn test_for_config_defaults_to_builtin() {
        let catalog = CatalogLoader::for_config(&GameConfig::default()).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_for_config_uses_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitors.yml");
        std::fs::write(&path, TWO_VISITORS).unwrap();

        let config = GameConfig {
            catalog_path: Some(path),
            ..GameConfig::default()
        };
        assert_eq!(CatalogLoader::for_config(&config).unwrap().len(), 2);
    }
}
