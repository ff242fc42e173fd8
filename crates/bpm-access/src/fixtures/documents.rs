use super::strings;
use bpm_model::{CatalogItem, CommonFields, DocumentDetails, ItemDetails};
use serde_json::Value;

#[allow(clippy::too_many_arguments)]
fn document(
    id: u64,
    title: &str,
    description: &str,
    (category, department): (&str, &str),
    (document_type, format, language): (&str, &str, &str),
    author: &str,
    last_updated: &str,
    tags: &[&str],
    related: &[&str],
) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(id, title)
            .with_description(description)
            .with_category(category)
            .with_department(department),
        ItemDetails::Document(DocumentDetails {
            document_type: document_type.to_string(),
            language: language.to_string(),
            format: format.to_string(),
            author: author.to_string(),
            last_updated: last_updated.to_string(),
            tags: strings(tags),
            related_documents: related.iter().map(|r| Value::from(*r)).collect(),
        }),
    )
}

/// Fallback document catalog
#[must_use]
pub fn documents() -> Vec<CatalogItem> {
    vec![
        document(
            1,
            "Travel Policy",
            "Rules for booking, approving and reimbursing business travel.",
            ("Policy", "Finance"),
            ("Policy", "PDF", "English"),
            "Michael Chen",
            "2024-03-15",
            &["travel", "expenses", "finance"],
            &["Expense Reimbursement Procedure"],
        ),
        document(
            2,
            "Expense Reimbursement Procedure",
            "Step-by-step procedure for submitting expense claims.",
            ("Procedure", "Finance"),
            ("Procedure", "DOCX", "English"),
            "Michael Chen",
            "2024-02-01",
            &["expenses", "claims"],
            &["Travel Policy"],
        ),
        document(
            3,
            "Onboarding Checklist",
            "Checklist used by managers during the first week of a new hire.",
            ("Template", "HR"),
            ("Checklist", "XLSX", "English"),
            "Sarah Johnson",
            "2024-01-20",
            &["onboarding", "hr"],
            &[],
        ),
        document(
            4,
            "Information Security Standard",
            "Minimum security controls for all business applications.",
            ("Standard", "IT"),
            ("Standard", "PDF", "English"),
            "David Kim",
            "2023-11-30",
            &["security", "it", "controls"],
            &["Access Management Procedure"],
        ),
        document(
            5,
            "Access Management Procedure",
            "How access is requested, approved, reviewed and revoked.",
            ("Procedure", "IT"),
            ("Procedure", "PDF", "English"),
            "David Kim",
            "2024-04-02",
            &["access", "security"],
            &["Information Security Standard"],
        ),
        document(
            6,
            "Procédure d'achat",
            "Procédure d'achat pour les filiales francophones.",
            ("Procedure", "Procurement"),
            ("Procedure", "PDF", "French"),
            "Lisa Anderson",
            "2023-09-12",
            &["procurement", "purchasing"],
            &[],
        ),
        document(
            7,
            "Contract Template",
            "Standard services agreement template with approved clauses.",
            ("Template", "Legal"),
            ("Template", "DOCX", "English"),
            "Emily Davis",
            "2024-05-10",
            &["legal", "contracts"],
            &[],
        ),
    ]
}
