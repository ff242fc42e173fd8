use super::strings;
use bpm_model::{CatalogItem, CommonFields, ItemDetails, RegulationDetails};

fn regulation(
    id: u64,
    title: &str,
    description: &str,
    category: &str,
    (jurisdiction, industry, risk_level): (&str, &str, &str),
    effective_date: &str,
    requirements: &[&str],
) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(id, title)
            .with_description(description)
            .with_category(category)
            .with_department("Compliance"),
        ItemDetails::Regulation(RegulationDetails {
            jurisdiction: jurisdiction.to_string(),
            industry: industry.to_string(),
            risk_level: risk_level.to_string(),
            effective_date: effective_date.to_string(),
            requirements: strings(requirements),
        }),
    )
}

/// Regulation catalog
#[must_use]
pub fn regulations() -> Vec<CatalogItem> {
    vec![
        regulation(
            1,
            "General Data Protection Regulation",
            "EU regulation on the processing of personal data.",
            "Data Privacy",
            ("European Union", "All Industries", "High"),
            "2018-05-25",
            &["Lawful basis", "Data subject rights", "Breach notification"],
        ),
        regulation(
            2,
            "Sarbanes-Oxley Act",
            "Financial reporting and internal control requirements for listed companies.",
            "Financial Reporting",
            ("United States", "Financial Services", "High"),
            "2002-07-30",
            &["Internal controls", "Management certification"],
        ),
        regulation(
            3,
            "ISO 9001",
            "Quality management system standard.",
            "Quality",
            ("International", "Manufacturing", "Medium"),
            "2015-09-15",
            &["Process approach", "Continual improvement"],
        ),
        regulation(
            4,
            "Basel III",
            "Capital adequacy and liquidity framework for banks.",
            "Financial Reporting",
            ("International", "Banking", "High"),
            "2013-01-01",
            &["Capital ratios", "Liquidity coverage"],
        ),
        regulation(
            5,
            "HIPAA",
            "Protection of health information in the United States.",
            "Data Privacy",
            ("United States", "Healthcare", "High"),
            "1996-08-21",
            &["Privacy rule", "Security rule"],
        ),
        regulation(
            6,
            "ISO 14001",
            "Environmental management system standard.",
            "Environmental",
            ("International", "Manufacturing", "Low"),
            "2015-09-15",
            &["Environmental policy", "Compliance obligations"],
        ),
    ]
}
