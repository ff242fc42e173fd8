//! Error types for remote record access
//!
//! These errors never reach portal callers. The repositories log them and
//! substitute the fallback dataset, but the remote client and its tests see
//! them in full.

use std::time::Duration;

/// Errors while fetching records from the remote store
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Remote mode is switched off
    #[error("remote access disabled")]
    Disabled,

    /// The request did not complete in time
    #[error("request timed out after {}ms", after.as_millis())]
    Timeout {
        /// Configured bound
        after: Duration,
    },

    /// Non-2xx response
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Connection-level failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Body was not the expected JSON shape
    #[error("malformed payload: {0}")]
    Decode(String),

    /// Endpoint settings are unusable
    #[error("invalid remote configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    /// Check if the failure was a timeout
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not report the configured bound
            Self::Timeout {
                after: Duration::ZERO,
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display() {
        let err = FetchError::Timeout {
            after: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "request timed out after 10000ms");
        assert!(err.is_timeout());
    }

    #[test]
    fn status_display() {
        let err = FetchError::Status {
            status: 503,
            url: "https://api.example.test/v0/app/Services".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(!err.is_timeout());
    }
}
