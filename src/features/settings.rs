//! Application settings
//!
//! Settings are resolved once at startup: built-in defaults, then the
//! optional `settings.json` in the platform config directory, then
//! environment overrides. The resolved values are handed to the app
//! explicitly; nothing else reads the process environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Default minimum time the loading indicator stays up after a fetch settles
pub const DEFAULT_MIN_DISPLAY_MS: u64 = 1000;

/// Environment variable for the backend base URL
pub const ENV_BACKEND_URL: &str = "AMANA_BACKEND_URL";
/// Name used by the web build; honoured when the native one is absent
pub const ENV_BACKEND_URL_LEGACY: &str = "VITE_BACKEND_URL";
pub const ENV_MIN_LOADING_MS: &str = "AMANA_MIN_LOADING_MS";
pub const ENV_LANG: &str = "AMANA_LANG";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Loading indicator behaviour
    #[serde(default)]
    pub loading: LoadingSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Amana backend (without `/api/flowers`)
    pub base_url: String,
    /// Optional proxy URL (http, https or socks5)
    pub proxy: Option<String>,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Language code ("en" or "zh")
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingSettings {
    /// Minimum loading indicator time after the request settles, in ms
    pub min_display_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            proxy: None,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            min_display_ms: DEFAULT_MIN_DISPLAY_MS,
        }
    }
}

impl LoadingSettings {
    pub fn min_display(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.min_display_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "amana", "Amana")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Resolve settings from file and process environment
    pub fn load() -> Self {
        let mut settings = match Self::file_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save the display section to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_display_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Update only the display section of the file at `path`
    ///
    /// The in-memory settings carry environment overrides; those must not be
    /// written back, so the other sections keep whatever the file holds.
    pub fn save_display_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let mut on_disk = match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => return Err(e),
        };
        on_disk.display = self.display.clone();
        on_disk.save_to_file(path)
    }

    /// Apply environment overrides through `lookup`
    ///
    /// Blank values are ignored, as are unparsable numbers (with a warning).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(ENV_BACKEND_URL).or_else(|| non_blank(ENV_BACKEND_URL_LEGACY))
        {
            self.api.base_url = url.trim().to_string();
        }

        if let Some(ms) = non_blank(ENV_MIN_LOADING_MS) {
            match ms.trim().parse::<u64>() {
                Ok(ms) => self.loading.min_display_ms = ms,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_MIN_LOADING_MS, ms, e),
            }
        }

        if let Some(lang) = non_blank(ENV_LANG) {
            self.display.language = lang.trim().to_lowercase();
        }
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(settings.api.proxy, None);
        assert_eq!(settings.loading.min_display_ms, 1000);
        assert_eq!(settings.display.language, "en");
    }

    #[test]
    fn native_env_var_wins_over_legacy() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[
            (ENV_BACKEND_URL, "https://api.amana.example"),
            (ENV_BACKEND_URL_LEGACY, "https://legacy.example"),
        ]));
        assert_eq!(settings.api.base_url, "https://api.amana.example");
    }

    #[test]
    fn legacy_env_var_is_honoured() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[(ENV_BACKEND_URL_LEGACY, " https://legacy.example ")]));
        assert_eq!(settings.api.base_url, "https://legacy.example");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[(ENV_BACKEND_URL, "   "), (ENV_LANG, "")]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn min_loading_override() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[(ENV_MIN_LOADING_MS, "250")]));
        assert_eq!(settings.loading.min_display_ms, 250);
        assert_eq!(
            settings.loading.min_display(),
            std::time::Duration::from_millis(250)
        );
    }

    #[test]
    fn invalid_min_loading_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(env(&[(ENV_MIN_LOADING_MS, "soon")]));
        assert_eq!(settings.loading.min_display_ms, DEFAULT_MIN_DISPLAY_MS);
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.api.base_url = "https://flowers.example".to_string();
        settings.api.proxy = Some("socks5://127.0.0.1:1080".to_string());
        settings.display.language = "zh".to_string();
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn display_save_keeps_env_overrides_out_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api": {"base_url": "https://file.example"}}"#).unwrap();

        let mut settings = Settings::load_from_file(&path).unwrap();
        settings.apply_env(env(&[(ENV_BACKEND_URL, "https://env.example")]));
        settings.display.dark_mode = true;
        settings.save_display_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, "https://file.example");
        assert!(loaded.display.dark_mode);
    }

    #[test]
    fn display_save_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.json");

        let mut settings = Settings::default();
        settings.display.language = "zh".to_string();
        settings.save_display_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.display.language, "zh");
        assert_eq!(loaded.api, ApiConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api": {"base_url": "https://b.example"}}"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, "https://b.example");
        assert_eq!(loaded.loading, LoadingSettings::default());
        assert_eq!(loaded.display, DisplaySettings::default());
    }

    #[test]
    fn partial_sections_fill_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"api": {"proxy": "http://127.0.0.1:8080"}, "display": {"dark_mode": true}, "loading": {}}"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(loaded.api.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.display.language, "en");
        assert_eq!(loaded.loading.min_display_ms, DEFAULT_MIN_DISPLAY_MS);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::load_from_file(&dir.path().join("absent.json")),
            Err(SettingsError::Io(_))
        ));
    }
}
