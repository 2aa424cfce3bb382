//! Configuration types for the Inner Gatekeeper
//!
//! A `gatekeeper.yaml` (or `.json`) looks like:
//!
//! ```yaml
//! seed: 42
//! challengePolicy: complexOnly
//! timings:
//!   startDelayMs: 1000
//!   feedbackMs: 2000
//!   autoAdvanceMs: 3000
//!   resumeDelayMs: 500
//! catalogPath: visitors.yaml
//! tickMs: 50
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use gatekeeper_domain::{ChallengePolicy, SchedulerSettings};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GatekeeperError, Result, UnsupportedFormatError};

/// Default file name written by `gatekeeper init`
pub const DEFAULT_CONFIG_FILE: &str = "gatekeeper.yaml";

/// On-disk document formats, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(UnsupportedFormatError {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Read and parse a YAML or JSON file
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    format.parse(&content)
}

/// Which visitors may be challenged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengePolicyConfig {
    /// Only complex visitors (default)
    #[default]
    ComplexOnly,
    /// Every visitor
    Universal,
}

impl From<ChallengePolicyConfig> for ChallengePolicy {
    fn from(config: ChallengePolicyConfig) -> Self {
        match config {
            ChallengePolicyConfig::ComplexOnly => ChallengePolicy::ComplexOnly,
            ChallengePolicyConfig::Universal => ChallengePolicy::Universal,
        }
    }
}

/// Session timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingConfig {
    /// Delay before the first visitor of a session
    pub start_delay_ms: u64,
    /// How long feedback stays on screen
    pub feedback_ms: u64,
    /// Idle time before a visitor is presented anyway
    pub auto_advance_ms: u64,
    /// Delay before the next visitor after resuming
    pub resume_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            feedback_ms: 2000,
            auto_advance_ms: 3000,
            resume_delay_ms: 500,
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// RNG seed; absent means OS entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub challenge_policy: ChallengePolicyConfig,

    #[serde(default)]
    pub timings: TimingConfig,

    /// Replace the built-in catalog with this YAML/JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Poll granularity of the real-time driver
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    50
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            challenge_policy: ChallengePolicyConfig::default(),
            timings: TimingConfig::default(),
            catalog_path: None,
            tick_ms: default_tick_ms(),
        }
    }
}

impl GameConfig {
    /// Load and validate a configuration file
    ///
    /// A relative `catalogPath` is resolved against the config file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config: Self = load_document(path)?;
        config.validate()?;

        if let (Some(catalog), Some(base)) = (&config.catalog_path, path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(base.join(catalog));
            }
        }
        Ok(config)
    }

    /// Load `path` if given, else `gatekeeper.yaml` in the working
    /// directory if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let timings = [
            ("startDelayMs", self.timings.start_delay_ms),
            ("feedbackMs", self.timings.feedback_ms),
            ("autoAdvanceMs", self.timings.auto_advance_ms),
            ("resumeDelayMs", self.timings.resume_delay_ms),
            ("tickMs", self.tick_ms),
        ];
        for (name, value) in timings {
            if value == 0 {
                return Err(GatekeeperError::Config(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn to_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            start_delay: Duration::from_millis(self.timings.start_delay_ms),
            feedback_duration: Duration::from_millis(self.timings.feedback_ms),
            auto_advance_delay: Duration::from_millis(self.timings.auto_advance_ms),
            resume_delay: Duration::from_millis(self.timings.resume_delay_ms),
            challenge_policy: self.challenge_policy.into(),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    // ============== Parsing Tests ==============

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: GameConfig = DocumentFormat::Yaml.parse("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.tick_ms, 50);
    }

    #[test]
    fn test_yaml_parse() {
        let yaml = r#"
seed: 42
challengePolicy: universal
timings:
  feedbackMs: 1500
tickMs: 10
"#;
        let config: GameConfig = DocumentFormat::Yaml.parse(yaml).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.challenge_policy, ChallengePolicyConfig::Universal);
        assert_eq!(config.timings.feedback_ms, 1500);
        // unspecified timings keep their defaults
        assert_eq!(config.timings.start_delay_ms, 1000);
        assert_eq!(config.tick_ms, 10);
    }

    #[test]
    fn test_json_parse() {
        let json = r#"{ "challengePolicy": "complexOnly", "timings": { "autoAdvanceMs": 4000 } }"#;
        let config: GameConfig = DocumentFormat::Json.parse(json).unwrap();
        assert_eq!(config.challenge_policy, ChallengePolicyConfig::ComplexOnly);
        assert_eq!(config.timings.auto_advance_ms, 4000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<GameConfig> = DocumentFormat::Yaml.parse("challengePolicy: sometimes");
        assert!(matches!(result, Err(GatekeeperError::Yaml(_))));
    }

    // ============== Validation Tests ==============

    #[test]
    fn test_zero_timing_rejected() {
        let mut config = GameConfig::default();
        config.timings.resume_delay_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resumeDelayMs"));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GatekeeperError::Config(_))));
    }

    #[test]
    fn test_to_settings() {
        let config = GameConfig {
            challenge_policy: ChallengePolicyConfig::Universal,
            ..GameConfig::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.start_delay, Duration::from_millis(1000));
        assert_eq!(settings.feedback_duration, Duration::from_millis(2000));
        assert_eq!(settings.auto_advance_delay, Duration::from_millis(3000));
        assert_eq!(settings.resume_delay, Duration::from_millis(500));
        assert_eq!(settings.challenge_policy, ChallengePolicy::Universal);
    }

    #[test]
    fn test_default_settings_match_domain_defaults() {
        assert_eq!(GameConfig::default().to_settings(), SchedulerSettings::default());
    }

    // ============== File Loading Tests ==============

    #[test]
    fn test_from_file_resolves_relative_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "gatekeeper.yml", "catalogPath: visitors.yaml\n");

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_path, Some(dir.path().join("visitors.yaml")));
    }

    #[test]
    fn test_from_file_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "gatekeeper.json", r#"{ "seed": 7 }"#);
        assert_eq!(GameConfig::from_file(&path).unwrap().seed, Some(7));
    }

    #[test]
    fn test_from_file_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "gatekeeper.yaml", "timings:\n  feedbackMs: 0\n");
        assert!(matches!(
            GameConfig::from_file(&path),
            Err(GatekeeperError::Config(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "gatekeeper.toml", "seed = 1");
        assert!(matches!(
            GameConfig::from_file(&path),
            Err(GatekeeperError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_file(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(GatekeeperError::Io(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = GameConfig::default().with_seed(9);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("challengePolicy: complexOnly"));
        let parsed: GameConfig = DocumentFormat::Yaml.parse(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
