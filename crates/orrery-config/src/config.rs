//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Scene settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory holding the planet, moon, and star-sprite images.
    pub asset_dir: PathBuf,
    /// Seed for star field placement. Same seed, same sky.
    pub star_seed: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            star_seed: 42,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: String::new(),
        }
    }
}

/// Default platform config directory (`<platform config dir>/orrery`).
///
/// Falls back to the current directory when the platform reports no
/// config location.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("orrery"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("star_seed: 42"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // Config missing the `scene` section entirely
        let ron_str = "(window: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.window.height = 1080;
        config.scene.star_seed = 7;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }
}
