// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[display]` - Knob size
//! - `[[channels]]` - One mixer channel per entry (name, range, default value)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_KNOB_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_knob::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Write it out on first run so users have a file to edit
//! config::init_if_missing(&config).expect("Failed to write config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::knob::{KnobConfig, KnobRange};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Knob diameter in logical pixels.
    #[serde(default = "default_knob_size", skip_serializing_if = "Option::is_none")]
    pub knob_size: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            knob_size: default_knob_size(),
        }
    }
}

impl DisplayConfig {
    /// Returns the knob size clamped to the supported range.
    #[must_use]
    pub fn knob_size(&self) -> f32 {
        self.knob_size
            .filter(|size| size.is_finite())
            .unwrap_or(DEFAULT_KNOB_SIZE)
            .clamp(MIN_KNOB_SIZE, MAX_KNOB_SIZE)
    }
}

/// A mixer channel controlled by one knob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelConfig {
    /// Label shown above the knob.
    pub name: String,

    /// Lower bound of the channel value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,

    /// Upper bound of the channel value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,

    /// Starting value; defaults to the middle of the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f32>,
}

impl ChannelConfig {
    /// Creates a channel over the default range with a midpoint start.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
            default_value: None,
        }
    }

    /// Builds the knob configuration for this channel.
    ///
    /// Fails when the configured bounds do not form a valid range.
    pub fn knob_config(&self) -> Result<KnobConfig> {
        let range = KnobRange::new(
            self.min.unwrap_or(DEFAULT_CHANNEL_MIN),
            self.max.unwrap_or(DEFAULT_CHANNEL_MAX),
        )?;
        let config = KnobConfig::new(range);
        Ok(match self.default_value {
            Some(value) => config.with_default_value(value),
            None => config,
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Mixer channels, in display order.
    #[serde(default = "default_channels")]
    pub channels: Vec<ChannelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            display: DisplayConfig::default(),
            channels: default_channels(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_knob_size() -> Option<f32> {
    Some(DEFAULT_KNOB_SIZE)
}

fn default_channels() -> Vec<ChannelConfig> {
    DEFAULT_CHANNEL_NAMES
        .iter()
        .map(|name| ChannelConfig::named(*name))
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes `config` to the default path unless a settings file already exists.
///
/// Returns whether a file was written.
pub fn init_if_missing(config: &Config) -> Result<bool> {
    init_if_missing_with_override(config, None)
}

/// Writes `config` to a custom directory unless a settings file already exists.
pub fn init_if_missing_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<bool> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(config, &path)?;
            tracing::info!(path = %path.display(), "wrote default settings");
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::KnobError;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            display: DisplayConfig {
                knob_size: Some(120.0),
            },
            channels: vec![ChannelConfig {
                name: "Master".to_string(),
                min: Some(-60.0),
                max: Some(6.0),
                default_value: Some(0.0),
            }],
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_uses_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\nknob_size = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.channels.len(), DEFAULT_CHANNEL_NAMES.len());
    }

    #[test]
    fn channels_parse_from_array_of_tables() {
        let content = r#"
[[channels]]
name = "Low"
min = -12.0
max = 12.0

[[channels]]
name = "High"
default_value = 80.0
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.channels.len(), 2);
        assert_eq!(config.channels[0].name, "Low");
        assert_eq!(config.channels[1].default_value, Some(80.0));
    }

    #[test]
    fn knob_size_is_clamped() {
        let small = DisplayConfig {
            knob_size: Some(1.0),
        };
        let large = DisplayConfig {
            knob_size: Some(10_000.0),
        };
        let unset = DisplayConfig { knob_size: None };
        assert_abs_diff_eq!(small.knob_size(), MIN_KNOB_SIZE);
        assert_abs_diff_eq!(large.knob_size(), MAX_KNOB_SIZE);
        assert_abs_diff_eq!(unset.knob_size(), DEFAULT_KNOB_SIZE);
    }

    #[test]
    fn channel_knob_config_uses_defaults() {
        let knob = ChannelConfig::named("Gain").knob_config().unwrap();
        assert_abs_diff_eq!(knob.range().min(), DEFAULT_CHANNEL_MIN);
        assert_abs_diff_eq!(knob.range().max(), DEFAULT_CHANNEL_MAX);
        assert_abs_diff_eq!(knob.default_value(), 50.0);
    }

    #[test]
    fn channel_knob_config_rejects_inverted_range() {
        let channel = ChannelConfig {
            name: "Broken".to_string(),
            min: Some(10.0),
            max: Some(0.0),
            default_value: None,
        };
        assert!(matches!(
            channel.knob_config(),
            Err(Error::Knob(KnobError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn init_if_missing_writes_defaults_once() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        assert!(init_if_missing_with_override(&Config::default(), base.clone())
            .expect("failed to write settings"));
        let (loaded, warning) = load_with_override(base.clone());
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());

        let mut changed = Config::default();
        changed.display.knob_size = Some(200.0);
        save_to_path(&changed, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");
        assert!(!init_if_missing_with_override(&Config::default(), base.clone())
            .expect("failed to check settings"));
        assert_eq!(load_with_override(base).0, changed);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(content.contains("theme_mode = \"system\""));
    }
}
