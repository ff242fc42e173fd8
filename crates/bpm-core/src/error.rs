//! Error types for the portal handle
//!
//! Covers:
//! - Configuration loading (file, TOML, environment)
//! - Data access construction
//! - Comparison selection limits

use bpm_access::FetchError;
use bpm_model::ItemId;
use std::path::PathBuf;

/// Main portal error type
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data access layer could not be built
    #[error("data access error: {0}")]
    Access(#[from] FetchError),

    /// Comparison selection rejected an item
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::PortalConfig`]
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file value is out of range
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Dotted key
        key: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Environment override has an unusable value
    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv {
        /// Variable name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Rejected comparison-selection change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Selection already holds the maximum number of items
    #[error("comparison is full ({limit} items)")]
    Full {
        /// Maximum selection size
        limit: usize,
    },

    /// An item with the same id is already selected
    #[error("item {0} is already selected")]
    Duplicate(ItemId),
}

impl SelectionError {
    /// Check if the selection was full
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }
}
