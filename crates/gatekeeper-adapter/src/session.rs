//! Wiring a scheduler from configuration

use std::sync::Arc;

use gatekeeper_domain::SessionScheduler;
use shared::{GameConfig, Result};
use tracing::info;

use crate::catalog_loader::CatalogLoader;
use crate::random::SeededRandom;

/// Build an unstarted scheduler with the configured catalog, seed and timings
pub fn build_scheduler(config: &GameConfig) -> Result<SessionScheduler> {
    config.validate()?;
    let catalog = Arc::new(CatalogLoader::for_config(config)?);
    let settings = config.to_settings();

    info!(
        seed = ?config.seed,
        policy = ?settings.challenge_policy,
        visitors = catalog.len(),
        "Session scheduler ready"
    );

    Ok(SessionScheduler::new(
        catalog,
        Box::new(SeededRandom::new(config.seed)),
        settings,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_domain::SessionPhase;
    use std::time::Duration;

    #[test]
    fn test_build_scheduler_from_defaults() {
        let scheduler = build_scheduler(&GameConfig::default()).unwrap();
        assert_eq!(scheduler.phase(), SessionPhase::NotStarted);
        assert_eq!(scheduler.catalog().len(), 9);
    }

    #[test]
    fn test_same_seed_same_visitors() {
        let config = GameConfig::default().with_seed(11);
        let mut a = build_scheduler(&config).unwrap();
        let mut b = build_scheduler(&config).unwrap();
        a.start().unwrap();
        b.start().unwrap();

        let ids = |s: &SessionScheduler| {
            s.upcoming()
                .iter()
                .map(|v| v.id().as_str().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&a), ids(&b));

        a.advance(Duration::from_secs(1));
        b.advance(Duration::from_secs(1));
        assert_eq!(
            a.current_visitor().map(|v| v.id().clone()),
            b.current_visitor().map(|v| v.id().clone())
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.timings.start_delay_ms = 0;
        assert!(build_scheduler(&config).is_err());
    }
}
