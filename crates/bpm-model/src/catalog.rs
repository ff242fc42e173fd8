//! Marketplace catalog records
//!
//! Every catalog entry shares a [`CommonFields`] header and carries a
//! per-catalog [`ItemDetails`] variant. Remote fields the transformer does not
//! recognise survive in [`CatalogItem::extra`] untouched.

use crate::facet::Facet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Catalog item identifier, unique within one catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id (fixtures, used as a recency proxy)
    Numeric(u64),
    /// Opaque text id (remote record ids)
    Text(String),
}

impl ItemId {
    /// Numeric value, if this id is numeric
    #[inline]
    #[must_use]
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            ItemId::Numeric(n) => Some(*n),
            ItemId::Text(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<u64>()
            .map_or_else(|_| ItemId::Text(trimmed.to_string()), ItemId::Numeric))
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Numeric(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// The marketplace catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogKind {
    /// Business services
    Services,
    /// Documents and templates
    Documents,
    /// Regulations
    Regulations,
    /// Performance-management tools
    PerformanceTools,
    /// Process-mining tools
    ProcessMiningTools,
    /// Risk-management tools
    RiskTools,
}

impl CatalogKind {
    /// All catalogs
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Services,
        CatalogKind::Documents,
        CatalogKind::Regulations,
        CatalogKind::PerformanceTools,
        CatalogKind::ProcessMiningTools,
        CatalogKind::RiskTools,
    ];

    /// Entity name used in cache keys and log fields
    #[inline]
    #[must_use]
    pub fn entity(&self) -> &'static str {
        match self {
            CatalogKind::Services => "services",
            CatalogKind::Documents => "documents",
            CatalogKind::Regulations => "regulations",
            CatalogKind::PerformanceTools => "performance_tools",
            CatalogKind::ProcessMiningTools => "process_mining_tools",
            CatalogKind::RiskTools => "risk_tools",
        }
    }

    /// Facets offered by this catalog's filter panel
    #[must_use]
    pub fn facets(&self) -> &'static [Facet] {
        match self {
            CatalogKind::Services => &[
                Facet::Category,
                Facet::Department,
                Facet::Status,
                Facet::Type,
                Facet::Complexity,
                Facet::Priority,
            ],
            CatalogKind::Documents => &[
                Facet::Category,
                Facet::Department,
                Facet::Status,
                Facet::Type,
                Facet::Language,
                Facet::Format,
            ],
            CatalogKind::Regulations => &[
                Facet::Category,
                Facet::Department,
                Facet::Status,
                Facet::Jurisdiction,
                Facet::Industry,
                Facet::RiskLevel,
            ],
            CatalogKind::PerformanceTools => &[
                Facet::Category,
                Facet::Type,
                Facet::Industry,
                Facet::UseCase,
                Facet::Complexity,
                Facet::Integration,
                Facet::AiPowered,
                Facet::RealTime,
            ],
            CatalogKind::ProcessMiningTools => &[
                Facet::Category,
                Facet::Type,
                Facet::Industry,
                Facet::Feature,
                Facet::Integration,
                Facet::EaseOfUse,
                Facet::AiPowered,
                Facet::RealTime,
            ],
            CatalogKind::RiskTools => &[
                Facet::Category,
                Facet::Type,
                Facet::Industry,
                Facet::RiskLevel,
                Facet::Complexity,
                Facet::Integration,
                Facet::AiPowered,
            ],
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity())
    }
}

impl FromStr for CatalogKind {
    type Err = crate::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        CatalogKind::ALL
            .into_iter()
            .find(|k| k.entity() == wanted)
            .ok_or_else(|| crate::ModelError::unknown("catalog", s))
    }
}

/// Fields every catalog item carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    /// Identifier, unique within the catalog
    pub id: ItemId,
    /// Display title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Category
    pub category: String,
    /// Owning department
    pub department: String,
    /// Lifecycle status
    pub status: String,
    /// Version label
    pub version: String,
}

impl CommonFields {
    /// Create header with portal defaults
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            department: crate::ALL.to_string(),
            status: "Active".to_string(),
            version: "1.0".to_string(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// With department
    #[inline]
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// With version
    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Service catalog fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    /// Service type, e.g. "Request"
    pub service_type: String,
    /// Priority label
    pub priority: String,
    /// Complexity label
    pub complexity: String,
    /// Expected delivery time as displayed
    pub delivery_time: String,
    /// Owning team or person
    pub owner: String,
    /// Feature bullet points
    pub features: Vec<String>,
    /// Prerequisites for requesting the service
    pub requirements: Vec<String>,
    /// Fulfilment steps in order
    pub process_steps: Vec<String>,
}

/// Document catalog fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetails {
    /// Document type, e.g. "Policy"
    pub document_type: String,
    /// Document language
    pub language: String,
    /// File format
    pub format: String,
    /// Author name
    pub author: String,
    /// Last update date as stored
    pub last_updated: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Related document references, kept as raw JSON
    pub related_documents: Vec<Value>,
}

/// Regulation catalog fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationDetails {
    /// Issuing jurisdiction
    pub jurisdiction: String,
    /// Industry the regulation targets
    pub industry: String,
    /// Risk level label
    pub risk_level: String,
    /// Effective date as stored
    pub effective_date: String,
    /// Compliance requirements
    pub requirements: Vec<String>,
}

/// Which tool marketplace a tool belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolFamily {
    /// Performance-management tools
    #[default]
    PerformanceManagement,
    /// Process-mining tools
    ProcessMining,
    /// Risk-management tools
    RiskManagement,
}

/// Tool catalog fields (all three tool marketplaces)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDetails {
    /// Marketplace the tool is listed in
    pub family: ToolFamily,
    /// Tool type
    pub tool_type: String,
    /// Target industry
    pub industry: String,
    /// Primary use case
    pub use_case: String,
    /// Complexity label
    pub complexity: String,
    /// Risk level label
    pub risk_level: String,
    /// Integration style
    pub integration: String,
    /// Headline feature
    pub feature: String,
    /// Tool offers AI-driven capabilities
    pub ai_powered: bool,
    /// Tool processes data in real time
    pub real_time: bool,
    /// Ease-of-use rating
    pub ease_of_use: String,
}

/// Per-catalog payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemDetails {
    /// Service entry
    Service(ServiceDetails),
    /// Document entry
    Document(DocumentDetails),
    /// Regulation entry
    Regulation(RegulationDetails),
    /// Tool entry
    Tool(ToolDetails),
}

/// A marketplace entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Shared header
    #[serde(flatten)]
    pub common: CommonFields,
    /// Catalog-specific fields
    pub details: ItemDetails,
    /// Unrecognised remote fields, passed through verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl CatalogItem {
    /// Create item without extension fields
    #[inline]
    #[must_use]
    pub fn new(common: CommonFields, details: ItemDetails) -> Self {
        Self {
            common,
            details,
            extra: BTreeMap::new(),
        }
    }

    /// With an unrecognised field
    #[inline]
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Item id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.common.id
    }

    /// Item title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.common.title
    }

    /// Catalog this item belongs to
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        match &self.details {
            ItemDetails::Service(_) => CatalogKind::Services,
            ItemDetails::Document(_) => CatalogKind::Documents,
            ItemDetails::Regulation(_) => CatalogKind::Regulations,
            ItemDetails::Tool(t) => match t.family {
                ToolFamily::PerformanceManagement => CatalogKind::PerformanceTools,
                ToolFamily::ProcessMining => CatalogKind::ProcessMiningTools,
                ToolFamily::RiskManagement => CatalogKind::RiskTools,
            },
        }
    }

    /// Service fields, if this is a service
    #[inline]
    #[must_use]
    pub fn as_service(&self) -> Option<&ServiceDetails> {
        match &self.details {
            ItemDetails::Service(s) => Some(s),
            _ => None,
        }
    }

    /// Document fields, if this is a document
    #[inline]
    #[must_use]
    pub fn as_document(&self) -> Option<&DocumentDetails> {
        match &self.details {
            ItemDetails::Document(d) => Some(d),
            _ => None,
        }
    }

    /// Regulation fields, if this is a regulation
    #[inline]
    #[must_use]
    pub fn as_regulation(&self) -> Option<&RegulationDetails> {
        match &self.details {
            ItemDetails::Regulation(r) => Some(r),
            _ => None,
        }
    }

    /// Tool fields, if this is a tool
    #[inline]
    #[must_use]
    pub fn as_tool(&self) -> Option<&ToolDetails> {
        match &self.details {
            ItemDetails::Tool(t) => Some(t),
            _ => None,
        }
    }

    /// Value of `facet` for this item
    ///
    /// Boolean facets render as `"Yes"` / `"No"`. Facets the variant does not
    /// define fall back to a string-valued extension field of the same key.
    #[must_use]
    pub fn facet_value(&self, facet: Facet) -> Option<Cow<'_, str>> {
        let typed: Option<&str> = match (facet, &self.details) {
            (Facet::Category, _) => Some(self.common.category.as_str()),
            (Facet::Department, _) => Some(self.common.department.as_str()),
            (Facet::Status, _) => Some(self.common.status.as_str()),
            (Facet::Type, ItemDetails::Service(s)) => Some(s.service_type.as_str()),
            (Facet::Type, ItemDetails::Document(d)) => Some(d.document_type.as_str()),
            (Facet::Type, ItemDetails::Tool(t)) => Some(t.tool_type.as_str()),
            (Facet::Priority, ItemDetails::Service(s)) => Some(s.priority.as_str()),
            (Facet::Complexity, ItemDetails::Service(s)) => Some(s.complexity.as_str()),
            (Facet::Complexity, ItemDetails::Tool(t)) => Some(t.complexity.as_str()),
            (Facet::Language, ItemDetails::Document(d)) => Some(d.language.as_str()),
            (Facet::Format, ItemDetails::Document(d)) => Some(d.format.as_str()),
            (Facet::Industry, ItemDetails::Regulation(r)) => Some(r.industry.as_str()),
            (Facet::Industry, ItemDetails::Tool(t)) => Some(t.industry.as_str()),
            (Facet::RiskLevel, ItemDetails::Regulation(r)) => Some(r.risk_level.as_str()),
            (Facet::RiskLevel, ItemDetails::Tool(t)) => Some(t.risk_level.as_str()),
            (Facet::Jurisdiction, ItemDetails::Regulation(r)) => Some(r.jurisdiction.as_str()),
            (Facet::UseCase, ItemDetails::Tool(t)) => Some(t.use_case.as_str()),
            (Facet::Integration, ItemDetails::Tool(t)) => Some(t.integration.as_str()),
            (Facet::Feature, ItemDetails::Tool(t)) => Some(t.feature.as_str()),
            (Facet::EaseOfUse, ItemDetails::Tool(t)) => Some(t.ease_of_use.as_str()),
            (Facet::AiPowered, ItemDetails::Tool(t)) => Some(yes_no(t.ai_powered)),
            (Facet::RealTime, ItemDetails::Tool(t)) => Some(yes_no(t.real_time)),
            _ => None,
        };

        match typed {
            Some(v) => Some(Cow::Borrowed(v)),
            None => self.extra.get(facet.key()).and_then(|v| match v {
                Value::String(s) => Some(Cow::Borrowed(s.as_str())),
                Value::Bool(b) => Some(Cow::Borrowed(yes_no(*b))),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                _ => None,
            }),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
