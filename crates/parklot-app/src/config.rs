//! Configuration management for parklot
//!
//! Config stored at: ~/.config/parklot/config.json

use parklot_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Slot count used by the original twelve-bay dashboard
pub const DEFAULT_CAPACITY: usize = 12;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of slots in a new lot
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Prefix used when printing fees
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            output_format: OutputFormat::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("parklot");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.capacity < 1 {
            return Err(ConfigError::ParseError(format!(
                "capacity must be at least 1 (got {})",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parklot Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Capacity:       {}", self.capacity)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Currency:       {}", self.currency_symbol)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.capacity, 12);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            capacity: 30,
            output_format: OutputFormat::Json,
            currency_symbol: "EUR ".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "capacity": 4 }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "capacity": 0 }"#).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
