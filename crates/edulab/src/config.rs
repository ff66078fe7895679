//! Application configuration stored in `{data_dir}/config.yaml`.
//!
//! ```yaml
//! seed: 42
//! lotto_sets: 5
//! reference:
//!   round: 1195
//!   numbers: [3, 15, 27, 33, 34, 36]
//! statistics_trials: 100000
//! reward_image: reward.png
//! ```

use std::path::{Path, PathBuf};

use edulab_core::controls::LOTTO_SETS;
use edulab_core::lotto::WinningReference;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_STATISTICS_TRIALS: usize = 100_000;
const MAX_STATISTICS_TRIALS: usize = 10_000_000;

/// Error types for config file operations
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed seed for lotto draws and statistics; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Initial value of the set count control
    pub lotto_sets: usize,
    pub reference: WinningReference,
    /// Draws per statistics run
    pub statistics_trials: usize,
    /// Image shown when a page's quiz is fully correct; relative to the data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_image: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lotto_sets: LOTTO_SETS.default,
            reference: WinningReference::LATEST,
            statistics_trials: DEFAULT_STATISTICS_TRIALS,
            reward_image: None,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load the config file, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(e.to_string()))
            .and_then(|content| {
                Self::from_yaml(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            });

        match loaded {
            Ok(config) => config.sanitized(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Invalid config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Like [`load_or_default`](Self::load_or_default), but writes the defaults
    /// out on first start so there is a file to edit.
    pub fn load_or_init(data_dir: &Path) -> Self {
        if Self::path(data_dir).exists() {
            return Self::load_or_default(data_dir);
        }

        let config = Self::default();
        if let Err(e) = config.save(data_dir) {
            tracing::warn!(error = %e, "Could not write default config");
        }
        config
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let yaml = self
            .to_yaml()
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;

        std::fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create data dir: {}", e)))?;
        std::fs::write(Self::path(data_dir), yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }

    /// Reward image path with relative paths resolved against the data dir
    pub fn reward_image_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.reward_image.as_ref().map(|path| {
            if path.is_relative() {
                data_dir.join(path)
            } else {
                path.clone()
            }
        })
    }

    /// Clamp out-of-range values, logging what was changed
    fn sanitized(mut self) -> Self {
        if let Err(e) = LOTTO_SETS.validate(self.lotto_sets) {
            tracing::warn!(error = %e, "lotto_sets out of range, clamping");
            self.lotto_sets = LOTTO_SETS.clamp(self.lotto_sets);
        }
        if self.statistics_trials == 0 || self.statistics_trials > MAX_STATISTICS_TRIALS {
            tracing::warn!(
                trials = self.statistics_trials,
                "statistics_trials out of range, clamping"
            );
            self.statistics_trials = self.statistics_trials.clamp(1, MAX_STATISTICS_TRIALS);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig {
            seed: Some(42),
            lotto_sets: 3,
            reward_image: Some(PathBuf::from("reward.png")),
            ..AppConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("lotto_sets: 8\n").unwrap();
        assert_eq!(config.lotto_sets, 8);
        assert_eq!(config.reference, WinningReference::LATEST);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_reference_is_rejected() {
        let yaml = "reference:\n  round: 1\n  numbers: [1, 1, 2, 3, 4, 5]\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_init(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(AppConfig::path(dir.path()).exists());
        assert_eq!(AppConfig::load_or_default(dir.path()), config);
    }

    #[test]
    fn test_load_clamps_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            AppConfig::path(dir.path()),
            "lotto_sets: 50\nstatistics_trials: 0\n",
        )
        .unwrap();
        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.lotto_sets, 10);
        assert_eq!(config.statistics_trials, 1);

        std::fs::write(AppConfig::path(dir.path()), "lotto_sets: [not a number").unwrap();
        assert_eq!(AppConfig::load_or_default(dir.path()), AppConfig::default());
    }

    #[test]
    fn test_reward_image_resolves_relative_paths() {
        let data_dir = Path::new("/data");
        let config = AppConfig {
            reward_image: Some(PathBuf::from("reward.png")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.reward_image_path(data_dir),
            Some(PathBuf::from("/data/reward.png"))
        );
        assert_eq!(AppConfig::default().reward_image_path(data_dir), None);
    }
}
