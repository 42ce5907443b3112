use crate::models::hand::TrackerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeConfig {
    /// Where the folder-backed photo library keeps imported assets
    pub library_path: PathBuf,
    /// Hand tracking backend settings
    pub tracker: TrackerConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());

        let mut library_path = PathBuf::from(home);
        library_path.push(".nuyna");
        library_path.push("library");

        Self {
            library_path,
            tracker: TrackerConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from file, creating with defaults if it doesn't exist
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: BridgeConfig = serde_json::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.validate()?;

        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reset to defaults and persist them
    pub fn reset() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.library_path.as_os_str().is_empty() {
            return Err("library_path must not be empty".into());
        }

        self.tracker.validate()?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| "Could not determine home directory")?;

        let mut path = PathBuf::from(home);
        path.push(".nuyna");
        path.push("config.json");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.library_path.to_string_lossy().contains(".nuyna"));
    }

    #[test]
    fn test_invalid_tracker_settings_fail_validation() {
        let mut config = BridgeConfig::default();
        config.tracker.max_hands = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_library_path_fails_validation() {
        let mut config = BridgeConfig::default();
        config.library_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = BridgeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
