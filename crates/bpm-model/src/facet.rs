//! Filter facets shared by the marketplace catalogs

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel selection meaning "no constraint on this facet"
pub const ALL: &str = "All";

/// One independently selectable filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    /// Item category
    Category,
    /// Owning department
    Department,
    /// Lifecycle status
    Status,
    /// Service, document or tool type
    Type,
    /// Document language
    Language,
    /// Document file format
    Format,
    /// Target industry
    Industry,
    /// Primary use case
    UseCase,
    /// Delivery or adoption complexity
    Complexity,
    /// Risk classification
    RiskLevel,
    /// Integration target
    Integration,
    /// Headline feature
    Feature,
    /// AI-assisted (Yes/No)
    AiPowered,
    /// Real-time capable (Yes/No)
    RealTime,
    /// Ease of use rating
    EaseOfUse,
    /// Regulatory jurisdiction
    Jurisdiction,
    /// Service priority
    Priority,
}

impl Facet {
    /// Every facet, in display order
    pub const ALL: [Facet; 17] = [
        Facet::Category,
        Facet::Department,
        Facet::Status,
        Facet::Type,
        Facet::Language,
        Facet::Format,
        Facet::Industry,
        Facet::UseCase,
        Facet::Complexity,
        Facet::RiskLevel,
        Facet::Integration,
        Facet::Feature,
        Facet::AiPowered,
        Facet::RealTime,
        Facet::EaseOfUse,
        Facet::Jurisdiction,
        Facet::Priority,
    ];

    /// Stable key used in query strings and unknown-field lookups
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::Department => "department",
            Facet::Status => "status",
            Facet::Type => "type",
            Facet::Language => "language",
            Facet::Format => "format",
            Facet::Industry => "industry",
            Facet::UseCase => "useCase",
            Facet::Complexity => "complexity",
            Facet::RiskLevel => "riskLevel",
            Facet::Integration => "integration",
            Facet::Feature => "feature",
            Facet::AiPowered => "aiPowered",
            Facet::RealTime => "realTime",
            Facet::EaseOfUse => "easeOfUse",
            Facet::Jurisdiction => "jurisdiction",
            Facet::Priority => "priority",
        }
    }

    /// Human label for filter dropdowns
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Category => "Category",
            Facet::Department => "Department",
            Facet::Status => "Status",
            Facet::Type => "Type",
            Facet::Language => "Language",
            Facet::Format => "Format",
            Facet::Industry => "Industry",
            Facet::UseCase => "Use Case",
            Facet::Complexity => "Complexity",
            Facet::RiskLevel => "Risk Level",
            Facet::Integration => "Integration",
            Facet::Feature => "Feature",
            Facet::AiPowered => "AI-Powered",
            Facet::RealTime => "Real-Time",
            Facet::EaseOfUse => "Ease of Use",
            Facet::Jurisdiction => "Jurisdiction",
            Facet::Priority => "Priority",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Facet::ALL
            .into_iter()
            .find(|f| f.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ModelError::unknown("facet", s))
    }
}
