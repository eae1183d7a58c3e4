//! Centralized configuration for Marquee.
//!
//! All tunable parameters and credentials are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use marquee_search::tmdb::DEFAULT_TMDB_BASE_URL;

use crate::mode::RuntimeMode;

/// Configuration errors raised while reading the environment.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {name}")]
    MissingVariable { name: &'static str },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Credentials are read from the environment and checked up front.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub tmdb: TmdbConfig,
    pub appwrite: AppwriteConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// Movie API connection settings.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API base URL without trailing slash
    pub base_url: String,
    /// Bearer token; empty in development mode
    pub api_key: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Document store connection settings.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key, sent as `X-Appwrite-Key` when present
    pub api_key: Option<String>,
}

impl Default for AppwriteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project_id: String::new(),
            database_id: String::new(),
            collection_id: String::new(),
            api_key: None,
        }
    }
}

/// Search behaviour settings.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a fetch is issued
    pub debounce: Duration,
    /// Number of records shown in the trending strip
    pub trending_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            trending_limit: 5,
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: "marquee-web/static".to_string(),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingVariable` - A credential required in production is unset or empty
    /// - `ConfigError::InvalidValue` - A numeric override does not parse
    pub fn from_env(mode: RuntimeMode) -> Result<Self, ConfigError> {
        Self::from_lookup(mode, |name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingVariable` - A credential required in production is unset or empty
    /// - `ConfigError::InvalidValue` - A numeric override does not parse
    pub fn from_lookup<F>(mode: RuntimeMode, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match get(name) {
                Some(value) => Ok(value),
                None if mode.is_development() => Ok(String::new()),
                None => Err(ConfigError::MissingVariable { name }),
            }
        };

        let mut config = Self::default();

        config.tmdb.api_key = require("TMDB_API_KEY")?;
        if let Some(base_url) = get("TMDB_BASE_URL") {
            config.tmdb.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(endpoint) = get("APPWRITE_ENDPOINT") {
            config.appwrite.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        config.appwrite.project_id = require("APPWRITE_PROJECT_ID")?;
        config.appwrite.database_id = require("APPWRITE_DATABASE_ID")?;
        config.appwrite.collection_id = require("APPWRITE_COLLECTION_ID")?;
        config.appwrite.api_key = get("APPWRITE_API_KEY");

        if let Some(millis) = get("MARQUEE_DEBOUNCE_MS") {
            config.search.debounce =
                Duration::from_millis(parse_number("MARQUEE_DEBOUNCE_MS", &millis)?);
        }
        if let Some(limit) = get("MARQUEE_TRENDING_LIMIT") {
            config.search.trending_limit = parse_number("MARQUEE_TRENDING_LIMIT", &limit)?;
        }

        if let Some(host) = get("MARQUEE_HOST") {
            config.server.host = host;
        }
        if let Some(port) = get("MARQUEE_PORT") {
            config.server.port = parse_number("MARQUEE_PORT", &port)?;
        }
        if let Some(static_dir) = get("MARQUEE_STATIC_DIR") {
            config.server.static_dir = static_dir;
        }

        Ok(config)
    }

    /// Creates a configuration for tests: short debounce, no credentials.
    pub fn for_testing() -> Self {
        Self {
            search: SearchConfig {
                debounce: Duration::from_millis(50),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const PRODUCTION_VARS: &[(&str, &str)] = &[
        ("TMDB_API_KEY", "tmdb-token"),
        ("APPWRITE_PROJECT_ID", "project"),
        ("APPWRITE_DATABASE_ID", "database"),
        ("APPWRITE_COLLECTION_ID", "metrics"),
    ];

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.search.debounce, Duration::from_millis(500));
        assert_eq!(config.search.trending_limit, 5);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.appwrite.api_key, None);
    }

    #[test]
    fn test_production_requires_credentials() {
        let result = MarqueeConfig::from_lookup(RuntimeMode::Production, lookup(&[]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVariable {
                name: "TMDB_API_KEY"
            }
        );

        let result = MarqueeConfig::from_lookup(
            RuntimeMode::Production,
            lookup(&[("TMDB_API_KEY", "token"), ("APPWRITE_PROJECT_ID", "  ")]),
        );
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVariable {
                name: "APPWRITE_PROJECT_ID"
            }
        );
    }

    #[test]
    fn test_production_config_from_lookup() {
        let config =
            MarqueeConfig::from_lookup(RuntimeMode::Production, lookup(PRODUCTION_VARS)).unwrap();

        assert_eq!(config.tmdb.api_key, "tmdb-token");
        assert_eq!(config.appwrite.project_id, "project");
        assert_eq!(config.appwrite.database_id, "database");
        assert_eq!(config.appwrite.collection_id, "metrics");
    }

    #[test]
    fn test_development_tolerates_missing_credentials() {
        let config = MarqueeConfig::from_lookup(RuntimeMode::Development, lookup(&[])).unwrap();
        assert!(config.tmdb.api_key.is_empty());
        assert!(config.appwrite.project_id.is_empty());
    }

    #[test]
    fn test_overrides() {
        let mut vars = PRODUCTION_VARS.to_vec();
        vars.extend([
            ("TMDB_BASE_URL", "http://localhost:9000/3/"),
            ("APPWRITE_ENDPOINT", "http://localhost:8080/v1/"),
            ("APPWRITE_API_KEY", "secret"),
            ("MARQUEE_DEBOUNCE_MS", "250"),
            ("MARQUEE_TRENDING_LIMIT", "10"),
            ("MARQUEE_PORT", "8081"),
        ]);

        let config =
            MarqueeConfig::from_lookup(RuntimeMode::Production, lookup(&vars)).unwrap();

        assert_eq!(config.tmdb.base_url, "http://localhost:9000/3");
        assert_eq!(config.appwrite.endpoint, "http://localhost:8080/v1");
        assert_eq!(config.appwrite.api_key.as_deref(), Some("secret"));
        assert_eq!(config.search.debounce, Duration::from_millis(250));
        assert_eq!(config.search.trending_limit, 10);
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = MarqueeConfig::from_lookup(
            RuntimeMode::Development,
            lookup(&[("MARQUEE_PORT", "eighty")]),
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "MARQUEE_PORT",
                ..
            })
        ));
    }
}
