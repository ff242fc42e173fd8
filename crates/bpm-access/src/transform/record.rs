//! Remote record → canonical catalog item
//!
//! Column names differ between bases ("Service Type", "serviceType",
//! "service_type"), so lookups go through a normalised key. Whatever the
//! transformer does not consume is kept in [`CatalogItem::extra`].

use super::fields::{parse_array_field, parse_json_field, value_to_text};
use crate::remote::RemoteRecord;
use bpm_model::{
    CatalogItem, CatalogKind, CommonFields, DocumentDetails, ItemDetails, ItemId, ServiceDetails,
};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;

/// Default department for records that do not name one
pub const DEFAULT_DEPARTMENT: &str = "All";
/// Default service priority
pub const DEFAULT_PRIORITY: &str = "Medium";
/// Default document language
pub const DEFAULT_LANGUAGE: &str = "English";
/// Default lifecycle status
pub const DEFAULT_STATUS: &str = "Active";
/// Default version label
pub const DEFAULT_VERSION: &str = "1.0";
/// Default category
pub const DEFAULT_CATEGORY: &str = "General";

/// Converts a raw remote record into a canonical catalog item
///
/// Implementations must not fail: malformed fields degrade to defaults.
pub trait RecordTransformer: Send + Sync + 'static {
    /// Catalog this transformer produces items for
    fn kind(&self) -> CatalogKind;

    /// Transform one record
    fn transform(&self, record: RemoteRecord) -> CatalogItem;
}

/// Transformer for the services table
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceTransformer;

impl RecordTransformer for ServiceTransformer {
    fn kind(&self) -> CatalogKind {
        CatalogKind::Services
    }

    fn transform(&self, record: RemoteRecord) -> CatalogItem {
        let mut fields = RemoteFields::new(record.fields);
        let common = fields.take_common(&record.id);

        let details = ServiceDetails {
            service_type: fields.take_string(&["serviceType", "type"], ""),
            priority: fields.take_string(&["priority"], DEFAULT_PRIORITY),
            complexity: fields.take_string(&["complexity"], ""),
            delivery_time: fields.take_string(&["deliveryTime", "estimatedTime", "turnaround"], ""),
            owner: fields.take_string(&["owner", "serviceOwner"], ""),
            features: fields.take_list(&["features", "keyFeatures"]),
            requirements: fields.take_list(&["requirements", "prerequisites"]),
            process_steps: fields
                .take_json_list(&["processSteps", "steps", "process"])
                .iter()
                .map(step_text)
                .filter(|s| !s.is_empty())
                .collect(),
        };

        CatalogItem {
            common,
            details: ItemDetails::Service(details),
            extra: fields.into_extra(),
        }
    }
}

/// Transformer for the documents table
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTransformer;

impl RecordTransformer for DocumentTransformer {
    fn kind(&self) -> CatalogKind {
        CatalogKind::Documents
    }

    fn transform(&self, record: RemoteRecord) -> CatalogItem {
        let mut fields = RemoteFields::new(record.fields);
        let common = fields.take_common(&record.id);

        let details = DocumentDetails {
            document_type: fields.take_string(&["documentType", "type"], ""),
            language: fields.take_string(&["language"], DEFAULT_LANGUAGE),
            format: fields.take_string(&["format", "fileType", "fileFormat"], ""),
            author: fields.take_string(&["author", "owner"], ""),
            last_updated: fields.take_string(&["lastUpdated", "updated", "lastModified"], ""),
            tags: fields.take_list(&["tags", "keywords"]),
            related_documents: fields.take_json_list(&["relatedDocuments", "related"]),
        };

        CatalogItem {
            common,
            details: ItemDetails::Document(details),
            extra: fields.into_extra(),
        }
    }
}

/// Process steps may be plain strings or `{ "title": ... }` objects
fn step_text(step: &Value) -> String {
    match step {
        Value::Object(map) => ["title", "name", "step", "description"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map_or_else(|| step.to_string(), |s| s.trim().to_string()),
        other => value_to_text(other).trim().to_string(),
    }
}

/// Remote field bag with normalised-key lookup
///
/// Each `take_*` call removes the matched field so the remainder can be
/// passed through as extension data.
#[derive(Debug, Default)]
struct RemoteFields {
    by_key: IndexMap<String, (String, Value)>,
}

impl RemoteFields {
    fn new(fields: serde_json::Map<String, Value>) -> Self {
        let by_key = fields
            .into_iter()
            .map(|(name, value)| (normalize_key(&name), (name, value)))
            .collect();
        Self { by_key }
    }

    fn take(&mut self, names: &[&str]) -> Option<Value> {
        names
            .iter()
            .find_map(|name| self.by_key.shift_remove(&normalize_key(name)))
            .map(|(_, value)| value)
    }

    fn take_common(&mut self, record_id: &str) -> CommonFields {
        let id = record_id.parse::<ItemId>().unwrap_or_else(|never| match never {});
        let title = self.take_string(&["title", "name", "serviceName", "documentName"], "");

        CommonFields {
            id,
            title,
            description: self.take_string(&["description", "summary"], ""),
            category: self.take_string(&["category"], DEFAULT_CATEGORY),
            department: self.take_string(&["department"], DEFAULT_DEPARTMENT),
            status: self.take_string(&["status"], DEFAULT_STATUS),
            version: self.take_string(&["version"], DEFAULT_VERSION),
        }
    }

    /// Scalar text; arrays (lookup / multi-select columns) yield their first
    /// non-empty element
    fn take_string(&mut self, names: &[&str], default: &str) -> String {
        let text = match self.take(names) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => if b { "Yes" } else { "No" }.to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| value_to_text(v).trim().to_string())
                .find(|s| !s.is_empty())
                .unwrap_or_default(),
            _ => String::new(),
        };

        if text.is_empty() {
            default.to_string()
        } else {
            text
        }
    }

    fn take_list(&mut self, names: &[&str]) -> Vec<String> {
        self.take(names)
            .map(|v| parse_array_field(&v))
            .unwrap_or_default()
    }

    fn take_json_list(&mut self, names: &[&str]) -> Vec<Value> {
        self.take(names)
            .map(|v| parse_json_field(&v))
            .unwrap_or_default()
    }

    fn into_extra(self) -> BTreeMap<String, Value> {
        self.by_key.into_values().collect()
    }
}

fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, fields: Value) -> RemoteRecord {
        let Value::Object(map) = fields else {
            panic!("fields must be an object");
        };
        RemoteRecord {
            id: id.to_string(),
            fields: map,
            created_time: None,
        }
    }

    #[test]
    fn service_defaults_for_missing_scalars() {
        let item = ServiceTransformer.transform(record("recSvc1", json!({ "Name": "Payroll" })));

        assert_eq!(item.id(), &ItemId::Text("recSvc1".to_string()));
        assert_eq!(item.title(), "Payroll");
        assert_eq!(item.common.department, DEFAULT_DEPARTMENT);
        assert_eq!(item.common.category, DEFAULT_CATEGORY);
        let service = item.as_service().unwrap();
        assert_eq!(service.priority, DEFAULT_PRIORITY);
        assert!(service.features.is_empty());
    }

    #[test]
    fn service_list_fields_are_normalised() {
        let item = ServiceTransformer.transform(record(
            "recSvc2",
            json!({
                "Title": "Onboarding",
                "Service Type": "HR",
                "Key Features": "Self-service, Tracking",
                "requirements": ["Manager approval"],
                "Process Steps": r#"[{"title": "Request"}, "Approve", {"name": "Provision"}]"#,
            }),
        ));

        let service = item.as_service().unwrap();
        assert_eq!(service.service_type, "HR");
        assert_eq!(service.features, vec!["Self-service", "Tracking"]);
        assert_eq!(service.requirements, vec!["Manager approval"]);
        assert_eq!(service.process_steps, vec!["Request", "Approve", "Provision"]);
        assert!(item.extra.is_empty());
    }

    #[test]
    fn unknown_fields_pass_through() {
        let item = DocumentTransformer.transform(record(
            "recDoc1",
            json!({
                "Title": "Travel Policy",
                "Pages": 12,
                "Reviewed By": ["Alice"],
            }),
        ));

        assert_eq!(item.extra.get("Pages"), Some(&json!(12)));
        assert_eq!(item.extra.get("Reviewed By"), Some(&json!(["Alice"])));
        assert_eq!(item.as_document().unwrap().language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn document_related_documents_from_numbered_text() {
        let item = DocumentTransformer.transform(record(
            "recDoc2",
            json!({
                "title": "Expense Form",
                "tags": "finance,forms",
                "related_documents": "1. Expense Policy\n2. Travel Policy",
                "department": ["Finance", "Operations"],
            }),
        ));

        let doc = item.as_document().unwrap();
        assert_eq!(doc.tags, vec!["finance", "forms"]);
        assert_eq!(
            doc.related_documents,
            vec![json!("Expense Policy"), json!("Travel Policy")]
        );
        assert_eq!(item.common.department, "Finance");
    }

    #[test]
    fn blank_scalars_fall_back_to_defaults() {
        let item = DocumentTransformer.transform(record(
            "17",
            json!({ "title": "  ", "language": "", "status": null }),
        ));

        assert_eq!(item.id(), &ItemId::Numeric(17));
        assert_eq!(item.title(), "");
        assert_eq!(item.as_document().unwrap().language, DEFAULT_LANGUAGE);
        assert_eq!(item.common.status, DEFAULT_STATUS);
    }

    #[test]
    fn normalize_key_ignores_case_and_separators() {
        assert_eq!(normalize_key("Service Type"), "servicetype");
        assert_eq!(normalize_key("service_type"), "servicetype");
        assert_eq!(normalize_key("serviceType"), "servicetype");
    }
}
