//! Error types for record construction

use chrono::NaiveDate;

/// Errors raised while building canonical records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A request was resolved before it was created
    #[error("resolved date {resolved} precedes creation date {created}")]
    ResolvedBeforeCreated {
        /// Creation date
        created: NaiveDate,
        /// Offending resolution date
        resolved: NaiveDate,
    },

    /// Numeric field outside its documented range
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Supplied value
        value: f64,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Text could not be parsed into an enumerated value
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant {
        /// Enumeration name
        kind: &'static str,
        /// Rejected text
        value: String,
    },
}

impl ModelError {
    /// Create unknown-variant error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
