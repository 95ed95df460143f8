//! User settings stored as settings.json in the app data directory

use crate::types::ViewMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub view_mode: ViewMode,

    // Season file path or http(s) URL
    pub data_source: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Configured data source, with `env_override` taking precedence
    pub fn effective_source(&self, env_override: Option<String>) -> Option<String> {
        env_override
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.data_source.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.view_mode, ViewMode::Final);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1200.0),
            window_h: Some(700.0),
            view_mode: ViewMode::Raw,
            data_source: Some("https://example.org/season.json".to_string()),
            ..Default::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"view_mode": "raw"}"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.view_mode, ViewMode::Raw);
        assert_eq!(settings.data_source, None);

        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn env_override_wins_unless_blank() {
        let settings = Settings {
            data_source: Some("season.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            settings.effective_source(Some("other.json".to_string())).as_deref(),
            Some("other.json")
        );
        assert_eq!(
            settings.effective_source(Some("  ".to_string())).as_deref(),
            Some("season.json")
        );
        assert_eq!(settings.effective_source(None).as_deref(), Some("season.json"));
    }
}
