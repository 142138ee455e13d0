//! # Connection Profiles
//!
//! Read-only loader for the connection settings that seed the URL list.
//!
//! Settings live in an INI file with one section per profile:
//!
//! ```ini
//! [default]
//! ws_url = ws://192.168.1.20:9005
//! token = my-token
//! enable_token = true
//! ws_urls = ws://192.168.1.20:9005, wss://api.example.com/v1/ws
//! ```
//!
//! Every key is optional. A missing file or profile yields the defaults.

use crate::config::{DEFAULT_TOKEN, DEFAULT_WS_URL};
use anyhow::{Context, Result};
use ini::{Ini, Properties};
use serde::{Deserialize, Serialize};
use std::path::Path;

const KEY_WS_URL: &str = "ws_url";
const KEY_TOKEN: &str = "token";
const KEY_ENABLE_TOKEN: &str = "enable_token";
const KEY_WS_URLS: &str = "ws_urls";

/// Connection settings of one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub ws_url: String,
    pub token: String,
    pub enable_token: bool,
    /// Configured server list; `None` when the key is absent
    pub ws_urls: Option<Vec<String>>,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_WS_URL.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            enable_token: true,
            ws_urls: None,
        }
    }
}

impl ProfileSettings {
    /// Build settings from one INI section, defaulting missing keys
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let defaults = Self::default();

        let enable_token = match props.get(KEY_ENABLE_TOKEN) {
            Some(raw) => parse_bool(raw)
                .with_context(|| format!("invalid value for '{}'", KEY_ENABLE_TOKEN))?,
            None => defaults.enable_token,
        };

        Ok(Self {
            ws_url: props
                .get(KEY_WS_URL)
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.ws_url),
            token: props
                .get(KEY_TOKEN)
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.token),
            enable_token,
            ws_urls: props.get(KEY_WS_URLS).map(parse_url_list),
        })
    }

    /// URLs the list starts with: the configured list, or just the current
    /// server URL when no list was ever configured
    pub fn initial_urls(&self) -> Vec<String> {
        match &self.ws_urls {
            Some(urls) => urls.clone(),
            None => vec![self.ws_url.clone()],
        }
    }

    /// Token to present to the server, if token auth is enabled
    pub fn active_token(&self) -> Option<&str> {
        self.enable_token.then_some(self.token.as_str())
    }
}

/// INI-backed settings reader
#[derive(Debug, Clone)]
pub struct IniSettingsStore {
    path: String,
}

impl IniSettingsStore {
    /// `path` may contain `~` and environment variables
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Load `profile`. `Ok(None)` when the file or the section is missing.
    pub fn load(&self, profile: &str) -> Result<Option<ProfileSettings>> {
        let expanded = shellexpand::full(&self.path)
            .with_context(|| format!("failed to expand settings path '{}'", self.path))?;
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            tracing::debug!("settings file '{}' not found", path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("failed to read settings from '{}'", path.display()))?;

        match ini.section(Some(profile)) {
            Some(props) => ProfileSettings::from_properties(props)
                .with_context(|| format!("invalid profile '{}'", profile))
                .map(Some),
            None => {
                tracing::debug!("profile '{}' not found in '{}'", profile, path.display());
                Ok(None)
            }
        }
    }

    /// Load `profile`, falling back to the defaults when it does not exist
    pub fn load_or_default(&self, profile: &str) -> Result<ProfileSettings> {
        Ok(self.load(profile)?.unwrap_or_default())
    }
}

fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn store_for(file: &NamedTempFile) -> IniSettingsStore {
        IniSettingsStore::new(file.path().to_str().unwrap())
    }

    #[test]
    fn defaults_should_match_client_defaults() {
        let settings = ProfileSettings::default();
        assert_eq!(settings.ws_url, "ws://localhost:9005");
        assert_eq!(settings.token, "test-token");
        assert!(settings.enable_token);
        assert_eq!(settings.ws_urls, None);
    }

    #[test]
    fn initial_urls_should_seed_with_current_url_when_unset() {
        let settings = ProfileSettings {
            ws_url: "ws://10.0.0.2:9005".to_string(),
            ..ProfileSettings::default()
        };
        assert_eq!(settings.initial_urls(), vec!["ws://10.0.0.2:9005"]);
    }

    #[test]
    fn initial_urls_should_keep_configured_order_and_duplicates() {
        let settings = ProfileSettings {
            ws_urls: Some(vec!["ws://b".into(), "ws://a".into(), "ws://b".into()]),
            ..ProfileSettings::default()
        };
        assert_eq!(settings.initial_urls(), vec!["ws://b", "ws://a", "ws://b"]);
    }

    #[test]
    fn active_token_should_respect_switch() {
        let mut settings = ProfileSettings::default();
        assert_eq!(settings.active_token(), Some("test-token"));
        settings.enable_token = false;
        assert_eq!(settings.active_token(), None);
    }

    #[test]
    fn load_should_read_profile_section() {
        let file = settings_file(
            "[default]\nws_url = ws://a:9005\ntoken = secret\nenable_token = no\nws_urls = ws://a:9005, wss://b/ws\n\n[other]\nws_url = ws://c\n",
        );

        let settings = store_for(&file).load("default").unwrap().unwrap();

        assert_eq!(settings.ws_url, "ws://a:9005");
        assert_eq!(settings.token, "secret");
        assert!(!settings.enable_token);
        assert_eq!(
            settings.ws_urls,
            Some(vec!["ws://a:9005".to_string(), "wss://b/ws".to_string()])
        );
    }

    #[test]
    fn empty_url_list_should_stay_empty() {
        let file = settings_file("[default]\nws_urls =\n");

        let settings = store_for(&file).load_or_default("default").unwrap();

        assert_eq!(settings.ws_urls, Some(Vec::new()));
        assert!(settings.initial_urls().is_empty());
    }

    #[test]
    fn missing_profile_should_fall_back_to_defaults() {
        let file = settings_file("[other]\nws_url = ws://c\n");
        let store = store_for(&file);

        assert_eq!(store.load("default").unwrap(), None);
        assert_eq!(
            store.load_or_default("default").unwrap(),
            ProfileSettings::default()
        );
    }

    #[test]
    fn missing_file_should_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let store = IniSettingsStore::new(path.to_str().unwrap());

        assert_eq!(store.load("default").unwrap(), None);
    }

    #[test]
    fn invalid_boolean_should_be_reported() {
        let file = settings_file("[default]\nenable_token = maybe\n");

        let err = store_for(&file).load("default").unwrap_err();

        assert!(format!("{:#}", err).contains("enable_token"));
    }
}
