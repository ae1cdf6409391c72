//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web and as a JSON file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::ControlMode;

/// Errors from reading or writing a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A player preference that can be flipped during play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Diagnostic status line
    StatusLine,
    /// High contrast palette
    HighContrast,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the diagnostic line (position, speed, dash, fps)
    pub show_fps: bool,
    /// Control mode a fresh session starts in
    pub start_mode: ControlMode,
    /// High contrast palette
    pub high_contrast: bool,
    /// Level file to load (native only); `None` generates one
    pub level_path: Option<String>,
    /// Seed for generated levels
    pub level_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            start_mode: ControlMode::Auto,
            high_contrast: false,
            level_path: None,
            level_seed: 1,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "unicorn_attack_settings";

    /// Default settings file next to the binary
    pub const FILE_NAME: &'static str = "settings.json";

    /// Flip a preference and return its new value
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let value = match preference {
            Preference::StatusLine => &mut self.show_fps,
            Preference::HighContrast => &mut self.high_contrast,
        };
        *value = !*value;
        *value
    }

    /// Remember the mode the player last chose; returns true if it changed
    pub fn remember_mode(&mut self, mode: ControlMode) -> bool {
        let changed = self.start_mode != mode;
        self.start_mode = mode;
        changed
    }

    /// Parse settings JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from `path`, falling back to defaults (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json));

        match result {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "start_mode": "Manual" }"#).unwrap();
        assert_eq!(settings.start_mode, ControlMode::Manual);
        assert!(settings.show_fps);
        assert_eq!(settings.level_path, None);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            show_fps: false,
            start_mode: ControlMode::Manual,
            high_contrast: true,
            level_path: Some("levels/lvl1.txt".into()),
            level_seed: 99,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from("definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "unicorn_attack_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            level_seed: 7,
            ..Settings::default()
        };
        std::fs::write(&path, settings.to_json().unwrap()).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_toggle_flips_one_preference() {
        let mut settings = Settings::default();
        assert!(!settings.toggle(Preference::StatusLine));
        assert!(!settings.show_fps);
        assert!(!settings.high_contrast);
        assert!(settings.toggle(Preference::HighContrast));
        assert!(settings.toggle(Preference::StatusLine));
        assert!(settings.show_fps && settings.high_contrast);
    }

    #[test]
    fn test_remember_mode_reports_changes() {
        let mut settings = Settings::default();
        assert!(!settings.remember_mode(ControlMode::Auto));
        assert!(settings.remember_mode(ControlMode::Manual));
        assert_eq!(settings.start_mode, ControlMode::Manual);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap().start_mode, ControlMode::Manual);
    }
}
