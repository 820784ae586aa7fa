//! Build-time Configuration
//!
//! A WASM bundle has no process environment, so settings are baked in
//! with `option_env!` when the bundle is built.

use std::str::FromStr;
use std::sync::OnceLock;

use log::LevelFilter;
use thiserror::Error;

/// Quiet period after the last search keystroke
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// How long a toast stays visible
pub const TOAST_TTL_MS: u32 = 4000;
pub const TOAST_FADE_MS: u32 = 300;
pub const TOAST_CAPACITY: usize = 5;
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1000;
pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for every backend URL, empty for same-origin
    pub api_base: String,
    pub log_level: LevelFilter,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct InvalidLogLevel(String);

impl Config {
    pub fn load() -> Self {
        Self::from_values(option_env!("LOSTFOUND_API_BASE"), option_env!("LOSTFOUND_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let log_level = log_level
            .map(parse_log_level)
            .and_then(Result::ok)
            .unwrap_or(LevelFilter::Info);
        Self {
            api_base: api_base.unwrap_or("").trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Absolute URL for a backend path such as `/items/approved`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

pub fn parse_log_level(value: &str) -> Result<LevelFilter, InvalidLogLevel> {
    LevelFilter::from_str(value.trim()).map_err(|_| InvalidLogLevel(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.url("/items/approved"), "/items/approved");
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = Config::from_values(Some("http://localhost:8000/"), None);
        assert_eq!(config.url("/auth/login"), "http://localhost:8000/auth/login");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse_log_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_log_level(" WARN "), Ok(LevelFilter::Warn));
        assert!(parse_log_level("loud").is_err());
        assert_eq!(parse_log_level("off").map(|l| l.to_level()), Ok(None));

        // invalid values fall back to info
        let config = Config::from_values(None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
