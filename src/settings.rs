//! Settings
//!
//! User-editable TOML file in the platform config directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, SETTINGS_FILE_NAME};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::theme::{Palette, ThemePreference};

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemePreference,
    pub window: WindowSettings,
    /// Extra colors for `bg-*` classes, name -> `#rrggbb`
    pub colors: BTreeMap<String, String>,
}

impl AppSettings {
    /// Settings file path inside the config directory
    pub fn path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
    }

    /// Load settings, falling back to defaults on any failure
    ///
    /// A missing file is created with the defaults so it can be edited.
    pub fn load_or_default() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "Could not locate settings file, using defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save_to(&path) {
                error!(error = %e, path = ?path, "Failed to write default settings");
            }
            return settings;
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            error!(error = %e, path = ?path, "Failed to load settings, using defaults");
            Self::default()
        })
    }

    /// Load settings from a file; an empty file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(&value)?)
    }

    /// Write settings to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Palette with the user colors added
    pub fn palette(&self) -> Palette {
        Palette::with_custom(self.colors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn test_parse_partial_file() {
        let settings: AppSettings = toml::from_str(
            r##"
theme = "dark"

[colors]
me = "#123456"
"##,
        )
        .unwrap_or_default();

        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.window, WindowSettings::default());
        assert_eq!(settings.colors.get("me").map(String::as_str), Some("#123456"));
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        assert!(toml::from_str::<AppSettings>(r#"theme = "sepia""#).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        let mut settings = AppSettings {
            theme: ThemePreference::Light,
            window: WindowSettings {
                width: 1024.0,
                height: 768.0,
            },
            ..Default::default()
        };
        settings.colors.insert("me".to_string(), "#abcdef".to_string());

        settings.save_to(&path).expect("save");
        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(AppSettings::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_palette_uses_custom_colors() {
        let mut settings = AppSettings::default();
        settings.colors.insert("me".to_string(), "#0f0".to_string());
        let palette = settings.palette();
        assert_eq!(palette.resolve("me").ok().flatten(), Some(rgb(0x00ff00)));
    }
}
