//! Portal configuration
//!
//! Defaults, then an optional TOML file, then `BPM_*` environment overrides.
//!
//! ```toml
//! [access]
//! remote_enabled = true
//! cache_ttl_secs = 600
//!
//! [access.remote]
//! dataset_id = "appXXXXXXXX"
//!
//! [mock]
//! seed = 42
//! request_count = 250
//! ```

use crate::error::ConfigError;
use bpm_access::AccessConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Number of mock requests generated per portal
pub const DEFAULT_REQUEST_COUNT: usize = 500;
/// Days of history covered by mock requests
pub const DEFAULT_HISTORY_DAYS: u32 = 180;

/// Top-level portal settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Data access switches and endpoint
    pub access: AccessConfig,
    /// Mock request generation
    pub mock: MockConfig,
    /// Log output
    pub log: LogConfig,
}

/// Mock request generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Fixed seed; `None` draws a fresh data set on every start
    pub seed: Option<u64>,
    /// Number of requests to generate
    pub request_count: usize,
    /// Creation dates fall within this many days before today
    pub history_days: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: None,
            request_count: DEFAULT_REQUEST_COUNT,
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl PortalConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from an optional TOML file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or an
    /// override has an unusable value.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML or mistyped keys, and
    /// [`ConfigError::Invalid`] on a zero request timeout.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.access.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "access.request_timeout_secs",
                reason: "must be at least 1",
            });
        }
        Ok(config)
    }

    /// Apply `BPM_*` overrides read through `lookup`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] for values that do not parse.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let access = &mut self.access;
        if let Some(v) = env_parsed(&lookup, "BPM_REMOTE_ENABLED", parse_bool)? {
            access.remote_enabled = v;
        }
        if let Some(v) = env_parsed(&lookup, "BPM_CACHE_ENABLED", parse_bool)? {
            access.cache_enabled = v;
        }
        if let Some(v) = env_parsed(&lookup, "BPM_CACHE_TTL_SECS", parse_from_str)? {
            access.cache_ttl_secs = v;
        }
        if let Some(v) = env_parsed(&lookup, "BPM_REQUEST_TIMEOUT_SECS", parse_positive)? {
            access.request_timeout_secs = v;
        }
        if let Some(v) = lookup("BPM_API_BASE_URL") {
            access.remote.base_url = v;
        }
        if let Some(v) = lookup("BPM_DATASET_ID") {
            access.remote.dataset_id = v;
        }
        if let Some(v) = lookup("BPM_API_TOKEN") {
            access.remote.api_token = v;
        }
        if let Some(v) = env_parsed(&lookup, "BPM_MOCK_SEED", parse_from_str)? {
            self.mock.seed = Some(v);
        }
        if let Some(v) = env_parsed(&lookup, "BPM_LOG_JSON", parse_bool)? {
            self.log.json = v;
        }
        Ok(self)
    }

    /// With data access settings
    #[inline]
    #[must_use]
    pub fn with_access(mut self, access: AccessConfig) -> Self {
        self.access = access;
        self
    }

    /// With a fixed mock seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.mock.seed = Some(seed);
        self
    }

    /// With mock request count
    #[inline]
    #[must_use]
    pub fn with_request_count(mut self, count: usize) -> Self {
        self.mock.request_count = count;
        self
    }

    /// With JSON log output
    #[inline]
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.log.json = json;
        self
    }
}

fn env_parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => parse(raw.trim())
            .map(Some)
            .ok_or(ConfigError::InvalidEnv { name, value: raw }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn parse_from_str<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

fn parse_positive(value: &str) -> Option<u64> {
    value.parse().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = PortalConfig::new();
        assert!(!config.access.remote_enabled);
        assert!(config.access.cache_enabled);
        assert_eq!(config.access.cache_ttl_secs, 300);
        assert_eq!(config.mock.seed, None);
        assert_eq!(config.mock.request_count, DEFAULT_REQUEST_COUNT);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PortalConfig::from_toml(
            r#"
            [access]
            cache_ttl_secs = 60

            [access.remote]
            dataset_id = "appBpm"

            [mock]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.access.cache_ttl_secs, 60);
        assert!(config.access.cache_enabled);
        assert_eq!(config.access.remote.dataset_id, "appBpm");
        assert_eq!(config.access.remote.services_table, "Services");
        assert_eq!(config.mock.seed, Some(7));
        assert_eq!(config.mock.history_days, DEFAULT_HISTORY_DAYS);
    }

    #[test]
    fn mistyped_toml_is_rejected() {
        let err = PortalConfig::from_toml("[access]\ncache_ttl_secs = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let config = PortalConfig::new()
            .with_env_overrides(env(&[
                ("BPM_REMOTE_ENABLED", "true"),
                ("BPM_CACHE_TTL_SECS", " 30 "),
                ("BPM_DATASET_ID", "appEnv"),
                ("BPM_API_TOKEN", "pat-env"),
                ("BPM_MOCK_SEED", "99"),
            ]))
            .unwrap();

        assert!(config.access.remote_enabled);
        assert_eq!(config.access.cache_ttl_secs, 30);
        assert_eq!(config.access.remote.dataset_id, "appEnv");
        assert_eq!(config.access.remote.api_token, "pat-env");
        assert_eq!(config.mock.seed, Some(99));
    }

    #[test]
    fn bad_env_value_names_the_variable() {
        let err = PortalConfig::new()
            .with_env_overrides(env(&[("BPM_CACHE_ENABLED", "maybe")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { name: "BPM_CACHE_ENABLED", .. }
        ));
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let err = PortalConfig::from_toml("[access]\nrequest_timeout_secs = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "access.request_timeout_secs", .. }
        ));

        let err = PortalConfig::new()
            .with_env_overrides(env(&[("BPM_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { name: "BPM_REQUEST_TIMEOUT_SECS", .. }
        ));

        let config = PortalConfig::new()
            .with_env_overrides(env(&[("BPM_REQUEST_TIMEOUT_SECS", "3")]))
            .unwrap();
        assert_eq!(config.access.request_timeout_secs, 3);
    }

    #[test]
    fn token_is_not_serialized() {
        let mut config = PortalConfig::new();
        config.access.remote.api_token = "pat-secret".to_string();
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("pat-secret"));
    }
}
