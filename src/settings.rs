//! User settings stored as settings.json in the app data directory

use crate::constants::{API_BASE_URL, ENDPOINT_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Analysis service
    pub endpoint: String,
    /// Show demo predictions when the service fails instead of an error
    pub demo_fallback: bool,

    // Host behaviour
    pub expand_on_start: bool,

    // Paths
    pub last_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            endpoint: API_BASE_URL.to_string(),
            demo_fallback: true,
            expand_on_start: false,
            last_dir: None,
        }
    }
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

    /// Endpoint for this session: the environment override wins over the saved value.
    pub fn effective_endpoint(&self) -> String {
        Self::pick_endpoint(std::env::var(ENDPOINT_ENV).ok(), &self.endpoint)
    }

    fn pick_endpoint(env_value: Option<String>, saved: &str) -> String {
        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                info!(endpoint = %v, "Using endpoint from {}", ENDPOINT_ENV);
                v
            }
            None => saved.to_string(),
        }
    }

    pub fn last_dir_or_default(&self) -> Option<PathBuf> {
        self.last_dir
            .as_ref()
            .map(PathBuf::from)
            .filter(|p| p.is_dir())
            .or_else(dirs::picture_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sports-analyzer-settings-{}-{}", std::process::id(), tag));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_then_load() {
        let dir = temp_dir("roundtrip");
        let settings = Settings {
            endpoint: "http://localhost:5000".into(),
            demo_fallback: false,
            expand_on_start: true,
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = temp_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"demo_fallback": false}"#).unwrap();
        let settings = Settings::load(&dir);
        assert!(!settings.demo_fallback);
        assert_eq!(settings.endpoint, API_BASE_URL);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn env_override_wins_unless_blank() {
        assert_eq!(
            Settings::pick_endpoint(Some("http://override".into()), "http://saved"),
            "http://override"
        );
        assert_eq!(Settings::pick_endpoint(Some("  ".into()), "http://saved"), "http://saved");
        assert_eq!(Settings::pick_endpoint(None, "http://saved"), "http://saved");
    }
}
