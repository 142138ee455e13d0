//! Configuration constants and utilities for wsurls
//!
//! Default locations and values used when loading connection settings.

/// Default settings file path
pub const DEFAULT_SETTINGS_PATH: &str = "~/.wsurls/settings";

/// Environment variable name for overriding the settings path
pub const SETTINGS_PATH_ENV_VAR: &str = "WSURLS_SETTINGS_PATH";

/// Profile section read when none is given
pub const DEFAULT_PROFILE: &str = "default";

/// Server URL used when the settings file has none
pub const DEFAULT_WS_URL: &str = "ws://localhost:9005";

/// Access token used when the settings file has none
pub const DEFAULT_TOKEN: &str = "test-token";

/// Get the settings file path, checking environment variable first, then falling back to default
pub fn get_settings_path() -> String {
    std::env::var_os(SETTINGS_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string())
}
