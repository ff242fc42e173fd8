//! Testing utilities for the BPM portal workspace
//!
//! Shared builders for requests, catalog items and remote field maps.

#![allow(missing_docs)]

use bpm_model::{
    CatalogItem, CommonFields, DocumentDetails, ItemDetails, Priority, Request, RequestStatus,
    ServiceDetails, ToolDetails, ToolFamily,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn create_request(ticket_id: &str, created: NaiveDate) -> Request {
    Request::new(ticket_id, created)
        .with_request_type("Service Request")
        .with_service("IT Services", "Access Request")
        .with_assignment("Jane Smith", "IT")
}

pub fn create_resolved_request(ticket_id: &str, created: NaiveDate, resolved: NaiveDate) -> Request {
    create_request(ticket_id, created)
        .with_status(RequestStatus::Resolved)
        .with_resolved_date(resolved)
        .unwrap()
}

pub fn create_categorized_request(
    ticket_id: &str,
    created: NaiveDate,
    category: &str,
    service_type: &str,
) -> Request {
    create_request(ticket_id, created).with_service(category, service_type)
}

pub fn create_assigned_request(ticket_id: &str, created: NaiveDate, assignee: &str) -> Request {
    create_request(ticket_id, created).with_assignment(assignee, "Operations")
}

pub fn create_prioritized_request(
    ticket_id: &str,
    created: NaiveDate,
    priority: Priority,
    status: RequestStatus,
) -> Request {
    create_request(ticket_id, created)
        .with_priority(priority)
        .with_status(status)
}

pub fn create_service(id: u64, title: &str, category: &str) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(id, title)
            .with_description(format!("{title} service"))
            .with_category(category),
        ItemDetails::Service(ServiceDetails::default()),
    )
}

pub fn create_document(id: u64, title: &str, category: &str, language: &str) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(id, title).with_category(category),
        ItemDetails::Document(DocumentDetails {
            language: language.to_string(),
            ..DocumentDetails::default()
        }),
    )
}

pub fn create_tool(id: u64, title: &str, family: ToolFamily) -> CatalogItem {
    CatalogItem::new(
        CommonFields::new(id, title),
        ItemDetails::Tool(ToolDetails {
            family,
            ..ToolDetails::default()
        }),
    )
}

pub fn create_tool_with(id: u64, title: &str, details: ToolDetails) -> CatalogItem {
    CatalogItem::new(CommonFields::new(id, title), ItemDetails::Tool(details))
}

/// Object-valued JSON into a remote field map
pub fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
