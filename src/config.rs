// Configuration management for the cycle simulator

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{DEFAULT_XP_REWARD, INITIAL_BALANCE, MAX_DAYS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub initial_balance: f64,
    pub max_days: u32,
    pub xp_reward: u32,
    /// Streak length of highly negative events before the draw prefers
    /// calmer candidates.
    pub negative_streak_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            max_days: MAX_DAYS,
            xp_reward: DEFAULT_XP_REWARD,
            negative_streak_threshold: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Gates the hidden arcade unlock predicate.
    pub hidden_unlock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub enable_event_logging: bool,
    pub enable_outcome_logging: bool,
    pub enable_sentiment_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_event_logging: true,
            enable_outcome_logging: true,
            enable_sentiment_logging: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub features: FeatureConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Load configuration from file, or create default if file doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.to_file(&path)?;
            tracing::info!("📁 Created default config file: {}", path.as_ref().display());
            Ok(config)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.initial_balance <= 0.0 {
            return Err(ConfigError::Validation(
                "initial_balance must be positive".to_string(),
            ));
        }

        if self.game.max_days == 0 {
            return Err(ConfigError::Validation(
                "max_days must be greater than 0".to_string(),
            ));
        }

        if self.game.xp_reward == 0 {
            return Err(ConfigError::Validation(
                "xp_reward must be greater than 0".to_string(),
            ));
        }

        if self.game.negative_streak_threshold == 0 {
            return Err(ConfigError::Validation(
                "negative_streak_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(String),

    #[error("Failed to write config file: {0}")]
    FileWrite(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
