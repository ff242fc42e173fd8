use super::rules::{Rule, RuleTable};
use bpm_model::{
    CatalogItem, DocumentDetails, Facet, RegulationDetails, ServiceDetails, ToolDetails, ALL,
};
use serde::Serialize;

/// Question and answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    /// Question
    pub question: String,
    /// Answer
    pub answer: String,
}

impl Faq {
    fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Labelled specification row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specification {
    /// Row label
    pub label: String,
    /// Row value
    pub value: String,
}

impl Specification {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Every presentation list for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPresentation {
    /// Benefit statements
    pub benefits: Vec<String>,
    /// Use-case labels
    pub use_cases: Vec<String>,
    /// Feature labels
    pub features: Vec<String>,
    /// FAQ entries
    pub faqs: Vec<Faq>,
    /// Specification rows
    pub specifications: Vec<Specification>,
    /// Card tags
    pub display_tags: Vec<String>,
}

/// Build every list for `item`
#[must_use]
pub fn present(item: &CatalogItem) -> ItemPresentation {
    ItemPresentation {
        benefits: benefits(item),
        use_cases: use_cases(item),
        features: features(item),
        faqs: faqs(item),
        specifications: specifications(item),
        display_tags: display_tags(item),
    }
}

/// Benefits (3 to 4 entries)
#[must_use]
pub fn benefits(item: &CatalogItem) -> Vec<String> {
    BENEFITS.generate(item)
}

/// Use cases (exactly 3 entries)
#[must_use]
pub fn use_cases(item: &CatalogItem) -> Vec<String> {
    USE_CASES.generate(item)
}

/// Features (exactly 4 entries)
#[must_use]
pub fn features(item: &CatalogItem) -> Vec<String> {
    FEATURES.generate(item)
}

/// FAQs (3 to 4 entries)
#[must_use]
pub fn faqs(item: &CatalogItem) -> Vec<Faq> {
    FAQS.generate(item)
}

/// Specification rows (exactly 4 entries)
#[must_use]
pub fn specifications(item: &CatalogItem) -> Vec<Specification> {
    SPECIFICATIONS.generate(item)
}

/// Card tags (at most 3 entries)
#[must_use]
pub fn display_tags(item: &CatalogItem) -> Vec<String> {
    DISPLAY_TAGS.generate(item)
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn tool(item: &CatalogItem) -> ToolDetails {
    item.as_tool().cloned().unwrap_or_default()
}

fn service(item: &CatalogItem) -> ServiceDetails {
    item.as_service().cloned().unwrap_or_default()
}

fn document(item: &CatalogItem) -> DocumentDetails {
    item.as_document().cloned().unwrap_or_default()
}

fn regulation(item: &CatalogItem) -> RegulationDetails {
    item.as_regulation().cloned().unwrap_or_default()
}

fn is_tool_where(item: &CatalogItem, check: impl Fn(&ToolDetails) -> bool) -> bool {
    item.as_tool().is_some_and(check)
}

fn is_service_where(item: &CatalogItem, check: impl Fn(&ServiceDetails) -> bool) -> bool {
    item.as_service().is_some_and(check)
}

fn is_document_where(item: &CatalogItem, check: impl Fn(&DocumentDetails) -> bool) -> bool {
    item.as_document().is_some_and(check)
}

fn is_regulation_where(item: &CatalogItem, check: impl Fn(&RegulationDetails) -> bool) -> bool {
    item.as_regulation().is_some_and(check)
}

fn facet(item: &CatalogItem, facet: Facet) -> String {
    item.facet_value(facet)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn has_facet(item: &CatalogItem, which: Facet) -> bool {
    filled(&facet(item, which))
}

fn facet_row(item: &CatalogItem, which: Facet) -> Specification {
    Specification::new(which.label(), facet(item, which))
}

fn is_urgent(priority: &str) -> bool {
    matches!(priority, "Critical" | "High")
}

/// Benefit rules
pub static BENEFITS: RuleTable<String> = RuleTable {
    rules: &[
        Rule::new(
            |i| is_tool_where(i, |t| t.ai_powered),
            |_| "AI-driven insights that surface issues before they escalate".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.real_time),
            |_| "Real-time visibility into process performance".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.ease_of_use == "High"),
            |_| "Intuitive interface with minimal training required".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| filled(&t.integration)),
            |i| format!("Seamless integration with {}", tool(i).integration),
        ),
        Rule::new(
            |i| is_service_where(i, |s| filled(&s.delivery_time)),
            |i| format!("Delivered within {}", service(i).delivery_time),
        ),
        Rule::new(
            |i| is_service_where(i, |s| is_urgent(&s.priority)),
            |_| "Prioritised handling for business-critical requests".to_string(),
        ),
        Rule::new(
            |i| is_document_where(i, |d| filled(&d.language) && d.language != "English"),
            |i| format!("Available in {}", document(i).language),
        ),
        Rule::new(
            |i| is_regulation_where(i, |r| r.risk_level == "High"),
            |_| "Reduces exposure to high-impact compliance risk".to_string(),
        ),
        Rule::new(
            |i| facet(i, Facet::Complexity) == "Low",
            |_| "Quick to adopt with low implementation effort".to_string(),
        ),
    ],
    fillers: &[
        Rule::always(|_| "Improves process efficiency and consistency".to_string()),
        Rule::always(|_| "Increases transparency across teams".to_string()),
        Rule::always(|_| "Supports data-driven decision making".to_string()),
    ],
    min: 3,
    max: 4,
};

/// Use-case rules
pub static USE_CASES: RuleTable<String> = RuleTable {
    rules: &[
        Rule::new(
            |i| is_tool_where(i, |t| filled(&t.use_case)),
            |i| tool(i).use_case,
        ),
        Rule::new(
            |i| {
                let industry = facet(i, Facet::Industry);
                filled(&industry) && industry != "All Industries"
            },
            |i| format!("{} operations", facet(i, Facet::Industry)),
        ),
        Rule::new(
            |i| is_service_where(i, |s| filled(&s.service_type)),
            |i| format!("{} requests", service(i).service_type),
        ),
        Rule::new(
            |i| is_document_where(i, |d| filled(&d.document_type)),
            |i| format!("{} reference for daily work", document(i).document_type),
        ),
        Rule::new(
            |i| is_regulation_where(i, |r| filled(&r.jurisdiction)),
            |i| format!("Compliance in {}", regulation(i).jurisdiction),
        ),
        Rule::new(
            |i| filled(&i.common.category),
            |i| format!("{} initiatives", i.common.category),
        ),
    ],
    fillers: &[
        Rule::always(|_| "Process standardisation".to_string()),
        Rule::always(|_| "Cross-team collaboration".to_string()),
        Rule::always(|_| "Continuous improvement programmes".to_string()),
    ],
    min: 3,
    max: 3,
};

/// Feature rules
pub static FEATURES: RuleTable<String> = RuleTable {
    rules: &[
        Rule::new(
            |i| is_tool_where(i, |t| filled(&t.feature)),
            |i| tool(i).feature,
        ),
        Rule::new(
            |i| is_service_where(i, |s| !s.features.is_empty()),
            |i| service(i).features.into_iter().next().unwrap_or_default(),
        ),
        Rule::new(
            |i| is_service_where(i, |s| s.features.len() > 1),
            |i| service(i).features.into_iter().nth(1).unwrap_or_default(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.ai_powered),
            |_| "AI-powered analytics".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.real_time),
            |_| "Real-time monitoring".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| filled(&t.integration)),
            |i| format!("{} connector", tool(i).integration),
        ),
        Rule::new(
            |i| is_service_where(i, |s| !s.process_steps.is_empty()),
            |i| format!("Guided {}-step process", service(i).process_steps.len()),
        ),
        Rule::new(
            |i| is_document_where(i, |d| filled(&d.format)),
            |i| format!("{} download", document(i).format),
        ),
        Rule::new(
            |i| is_document_where(i, |d| !d.tags.is_empty()),
            |_| "Tagged for quick search".to_string(),
        ),
        Rule::new(
            |i| is_regulation_where(i, |r| !r.requirements.is_empty()),
            |i| format!("{} key requirements mapped", regulation(i).requirements.len()),
        ),
    ],
    fillers: &[
        Rule::always(|_| "Role-based access".to_string()),
        Rule::always(|_| "Audit trail".to_string()),
        Rule::always(|_| "Configurable workflows".to_string()),
        Rule::always(|_| "Reporting dashboard".to_string()),
    ],
    min: 4,
    max: 4,
};

/// FAQ rules
pub static FAQS: RuleTable<Faq> = RuleTable {
    rules: &[
        Rule::new(
            |i| is_service_where(i, |s| filled(&s.delivery_time)),
            |i| {
                Faq::new(
                    format!("How long does {} take?", i.title()),
                    format!("Typical delivery time is {}.", service(i).delivery_time),
                )
            },
        ),
        Rule::new(
            |i| is_service_where(i, |s| !s.requirements.is_empty()),
            |i| {
                Faq::new(
                    format!("What do I need before requesting {}?", i.title()),
                    format!("{}.", service(i).requirements.join(", ")),
                )
            },
        ),
        Rule::new(
            |i| is_tool_where(i, |t| filled(&t.integration)),
            |i| {
                let integration = tool(i).integration;
                Faq::new(
                    format!("Does {} integrate with {integration}?", i.title()),
                    format!("Yes, {} ships with a {integration} connector.", i.title()),
                )
            },
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.ai_powered),
            |i| {
                Faq::new(
                    format!("How does {} use AI?", i.title()),
                    "It applies machine learning to highlight patterns and anomalies in process data.",
                )
            },
        ),
        Rule::new(
            |i| is_document_where(i, |d| filled(&d.format)),
            |i| {
                let doc = document(i);
                Faq::new(
                    format!("What format is {} available in?", i.title()),
                    format!("{}, in {}.", doc.format, doc.language),
                )
            },
        ),
        Rule::new(
            |i| is_regulation_where(i, |r| filled(&r.jurisdiction)),
            |i| {
                let reg = regulation(i);
                let answer = if filled(&reg.effective_date) {
                    format!("{}, effective {}.", reg.jurisdiction, reg.effective_date)
                } else {
                    format!("{}.", reg.jurisdiction)
                };
                Faq::new(format!("Where does {} apply?", i.title()), answer)
            },
        ),
    ],
    fillers: &[
        Rule::always(|i| {
            let answer = if i.common.department == ALL || !filled(&i.common.department) {
                "Every department can use it.".to_string()
            } else {
                format!("Members of the {} department.", i.common.department)
            };
            Faq::new(format!("Who can use {}?", i.title()), answer)
        }),
        Rule::always(|_| {
            Faq::new(
                "How do I get support?",
                "Contact the portal support team or the listed owner.",
            )
        }),
        Rule::always(|_| {
            Faq::new(
                "Is there a cost?",
                "No, it is available to internal teams at no charge.",
            )
        }),
    ],
    min: 3,
    max: 4,
};

/// Specification rules
pub static SPECIFICATIONS: RuleTable<Specification> = RuleTable {
    rules: &[
        Rule::new(
            |i| has_facet(i, Facet::Type),
            |i| facet_row(i, Facet::Type),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Complexity),
            |i| facet_row(i, Facet::Complexity),
        ),
        Rule::new(
            |i| is_service_where(i, |s| filled(&s.delivery_time)),
            |i| Specification::new("Delivery Time", service(i).delivery_time),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Format),
            |i| facet_row(i, Facet::Format),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Language),
            |i| facet_row(i, Facet::Language),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Jurisdiction),
            |i| facet_row(i, Facet::Jurisdiction),
        ),
        Rule::new(
            |i| is_regulation_where(i, |r| filled(&r.effective_date)),
            |i| Specification::new("Effective Date", regulation(i).effective_date),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Integration),
            |i| facet_row(i, Facet::Integration),
        ),
        Rule::new(
            |i| has_facet(i, Facet::Industry),
            |i| facet_row(i, Facet::Industry),
        ),
    ],
    fillers: &[
        Rule::always(|i| Specification::new("Version", i.common.version.clone())),
        Rule::always(|i| Specification::new("Status", i.common.status.clone())),
        Rule::always(|i| Specification::new("Department", i.common.department.clone())),
        Rule::always(|i| Specification::new("Catalog", i.kind().entity())),
    ],
    min: 4,
    max: 4,
};

/// Display-tag rules
pub static DISPLAY_TAGS: RuleTable<String> = RuleTable {
    rules: &[
        Rule::new(
            |i| is_tool_where(i, |t| t.ai_powered),
            |_| "AI-Powered".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.real_time),
            |_| "Real-Time".to_string(),
        ),
        Rule::new(
            |i| is_tool_where(i, |t| t.ease_of_use == "High"),
            |_| "Easy to Use".to_string(),
        ),
        Rule::new(
            |i| is_service_where(i, |s| is_urgent(&s.priority)),
            |_| "High Priority".to_string(),
        ),
        Rule::new(
            |i| facet(i, Facet::RiskLevel) == "High",
            |_| "High Risk".to_string(),
        ),
        Rule::new(
            |i| facet(i, Facet::Complexity) == "Low",
            |_| "Quick Start".to_string(),
        ),
        Rule::new(
            |i| is_document_where(i, |d| !d.tags.is_empty()),
            |i| document(i).tags.into_iter().next().unwrap_or_default(),
        ),
        Rule::new(
            |i| filled(&i.common.status) && i.common.status != "Active",
            |i| i.common.status.clone(),
        ),
    ],
    fillers: &[],
    min: 0,
    max: 3,
};
