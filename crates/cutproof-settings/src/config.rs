//! Configuration and settings management for Cutproof
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Playback settings (traversal duration)
//! - Viewer preferences (colors, grid, line widths)
//! - File defaults (default program/model overrides)

use crate::error::{Result, SettingsError};
use cutproof_core::constants;
use cutproof_core::units::Units;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Playback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Wall-clock duration of a full toolpath traversal, in milliseconds
    pub duration_ms: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            duration_ms: constants::DEFAULT_PLAYBACK_DURATION_MS,
        }
    }
}

/// Viewer preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Units used for coordinate display
    pub display_units: Units,
    /// Whether to draw the reference grid
    pub show_grid: bool,
    /// Toolpath overlay color (RGBA, 0.0-1.0)
    pub path_color: [f32; 4],
    /// Toolpath overlay line width in pixels
    pub path_width: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            display_units: Units::Mm,
            show_grid: true,
            path_color: [0.9, 0.35, 0.1, 1.0],
            path_width: 2.0,
        }
    }
}

/// File defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSettings {
    /// Program file substituted when none is selected; `None` uses the
    /// embedded default asset
    pub default_program: Option<PathBuf>,
    /// Model file substituted when none is selected; `None` uses the
    /// generated stock plate
    pub default_model: Option<PathBuf>,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playback settings
    pub playback: PlaybackSettings,
    /// Viewer preferences
    pub viewer: ViewerSettings,
    /// File defaults
    pub files: FileSettings,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific configuration file path
    /// (`<config_dir>/cutproof/config.toml`)
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("No config directory".to_string()))?;
        Ok(dir.join("cutproof").join("config.toml"))
    }

    /// Load configuration from a file, dispatching on extension
    /// (`.json` or `.toml`)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        Ok(config)
    }

    /// Save configuration to a file, dispatching on extension
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Load from the platform config path, falling back to defaults when
    /// the file does not exist
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        if !self.playback.duration_ms.is_finite() || self.playback.duration_ms <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "playback.duration_ms".to_string(),
                reason: format!("must be a positive duration, got {}", self.playback.duration_ms),
            });
        }

        if self.viewer.path_width <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "viewer.path_width".to_string(),
                reason: format!("must be positive, got {}", self.viewer.path_width),
            });
        }

        for (i, c) in self.viewer.path_color.iter().enumerate() {
            if !(0.0..=1.0).contains(c) {
                return Err(SettingsError::InvalidSetting {
                    key: "viewer.path_color".to_string(),
                    reason: format!("component {} out of range [0,1]: {}", i, c),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.playback.duration_ms, 5000.0);
    }

    #[test]
    fn toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.playback.duration_ms = 8000.0;
        config.viewer.show_grid = false;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.playback.duration_ms, 8000.0);
        assert!(!loaded.viewer.show_grid);
    }

    #[test]
    fn json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.files.default_program = Some(PathBuf::from("/tmp/part.gcode"));
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(
            loaded.files.default_program,
            Some(PathBuf::from("/tmp/part.gcode"))
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[playback]\nduration_ms = 2500.0\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.playback.duration_ms, 2500.0);
        assert!(loaded.viewer.show_grid);
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut config = Config::default();
        config.playback.duration_ms = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }
}
