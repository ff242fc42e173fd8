//! Data access settings

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default Airtable REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";

/// Switches and bounds for the data access layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Fetch services and documents from the remote store
    pub remote_enabled: bool,
    /// Memoize remote results
    pub cache_enabled: bool,
    /// Cache time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Per-call bound on remote requests in seconds
    pub request_timeout_secs: u64,
    /// Endpoint settings
    pub remote: RemoteConfig,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            remote_enabled: false,
            cache_enabled: true,
            cache_ttl_secs: 5 * 60,
            request_timeout_secs: 10,
            remote: RemoteConfig::default(),
        }
    }
}

impl AccessConfig {
    /// Cache time-to-live
    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Remote request bound
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check the bounds are usable
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidConfig`] when the request timeout is
    /// zero, which would fail every remote call.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.request_timeout_secs == 0 {
            return Err(FetchError::InvalidConfig(
                "request timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// With remote mode on or off
    #[inline]
    #[must_use]
    pub fn with_remote_enabled(mut self, enabled: bool) -> Self {
        self.remote_enabled = enabled;
        self
    }

    /// With caching on or off
    #[inline]
    #[must_use]
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// With cache time-to-live (whole seconds)
    #[inline]
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_secs = ttl.as_secs();
        self
    }

    /// With remote request bound (whole seconds)
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs();
        self
    }

    /// With endpoint settings
    #[inline]
    #[must_use]
    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = remote;
        self
    }
}

/// Remote record store endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API root, e.g. `https://api.airtable.com/v0`
    pub base_url: String,
    /// Base (dataset) id
    pub dataset_id: String,
    /// Bearer token
    #[serde(skip_serializing)]
    pub api_token: String,
    /// Table holding services
    pub services_table: String,
    /// Table holding documents
    pub documents_table: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset_id: String::new(),
            api_token: String::new(),
            services_table: "Services".to_string(),
            documents_table: "Documents".to_string(),
        }
    }
}

impl RemoteConfig {
    /// With dataset id
    #[inline]
    #[must_use]
    pub fn with_dataset(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = dataset_id.into();
        self
    }

    /// With bearer token
    #[inline]
    #[must_use]
    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    /// With API root
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url)
            .field("dataset_id", &self.dataset_id)
            .field("api_token", &"<redacted>")
            .field("services_table", &self.services_table)
            .field("documents_table", &self.documents_table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_remote_off() {
        let config = AccessConfig::default();
        assert!(!config.remote_enabled);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.remote.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn zero_request_timeout_is_invalid() {
        assert!(AccessConfig::default().validate().is_ok());

        let config = AccessConfig::default().with_request_timeout(Duration::from_millis(900));
        assert_eq!(config.request_timeout_secs, 0);
        assert!(matches!(config.validate(), Err(FetchError::InvalidConfig(_))));
    }

    #[test]
    fn debug_redacts_token() {
        let remote = RemoteConfig::default().with_token("pat-secret");
        assert!(!format!("{remote:?}").contains("pat-secret"));
    }
}
