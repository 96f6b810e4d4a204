//! Persistent settings, read from the user's configuration directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::common::constants::window;
use crate::common::types::Corner;

/// User-facing settings for the trigger window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen corner hosting the trigger window
    pub corner: Corner,
    /// Edge length of the trigger window in pixels
    pub size: u16,
    /// Title presented to the window manager
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corner: Corner::TopLeft,
            size: window::TRIGGER_SIZE,
            title: window::TITLE.to_string(),
        }
    }
}

/// Default on-disk location of the settings file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xhotcorners").join("config.json"))
}

impl Settings {
    /// Loads settings from the default location; without a resolvable config
    /// directory the built-in defaults are used
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads settings from the given path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.size > 0, "trigger window size must be at least 1 pixel");
        ensure!(!self.title.is_empty(), "window title must not be empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings.corner, Corner::TopLeft);
        assert_eq!(settings.size, 1);
        assert_eq!(settings.title, "xhotcorners");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "corner": "bottom-right" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.corner, Corner::BottomRight);
        assert_eq!(settings.size, 1);
        assert_eq!(settings.title, "xhotcorners");
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "corner": "top-right", "size": 4, "title": "corner-trigger" }"#,
        )
        .unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.corner, Corner::TopRight);
        assert_eq!(settings.size, 4);
        assert_eq!(settings.title, "corner-trigger");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "size": 0 }"#).unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_corner_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "corner": "middle" }"#).unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ corner:").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
