//! Service request records for the analytics dashboard
//!
//! A [`Request`] is immutable once built. The resolution date can never
//! precede the creation date, and the SLA status is derived from the overdue
//! flag rather than stored.

use crate::error::ModelError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Request priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Priority {
    /// Business-stopping
    Critical,
    /// Needs attention today
    High,
    /// Default priority
    #[default]
    Medium,
    /// Whenever capacity allows
    Low,
}

impl Priority {
    /// All priorities in severity order
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown("priority", s))
    }
}

/// Request lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RequestStatus {
    /// Newly filed
    Open,
    /// Waiting on a third party
    Pending,
    /// Being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fix delivered
    Resolved,
    /// Closed out
    Closed,
}

impl RequestStatus {
    /// All statuses in lifecycle order
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Open,
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Resolved,
        RequestStatus::Closed,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "Open",
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Resolved => "Resolved",
            RequestStatus::Closed => "Closed",
        }
    }

    /// Whether the request still counts as open work
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RequestStatus::Open | RequestStatus::Pending | RequestStatus::InProgress
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown("status", s))
    }
}

/// SLA status, derived from the overdue flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlaStatus {
    /// Within SLA
    #[serde(rename = "On Time")]
    OnTime,
    /// SLA breached
    Overdue,
}

impl SlaStatus {
    /// Display label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::OnTime => "On Time",
            SlaStatus::Overdue => "Overdue",
        }
    }
}

/// The four SLA timings tracked per request, in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaTimes {
    /// First response target
    pub response_sla: f64,
    /// Resolution time
    pub resolution_sla: f64,
    /// Time until escalation
    pub escalation_sla: f64,
    /// Contracted target
    pub target_sla: f64,
}

/// A dashboard service request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Ticket identifier
    pub ticket_id: String,
    /// Request type (incident, service request, ...)
    pub request_type: String,
    /// Calendar date the request was filed
    pub date_created: NaiveDate,
    resolved_date: Option<NaiveDate>,
    /// Service category
    pub service_category: String,
    /// Service type within the category
    pub service_type: String,
    /// SLA timings
    #[serde(flatten)]
    pub sla: SlaTimes,
    sla_compliance: f64,
    customer_satisfaction: f64,
    /// Priority
    pub priority: Priority,
    /// Lifecycle status
    pub status: RequestStatus,
    /// Assignee full name
    pub assigned_to: String,
    /// Owning department
    pub department: String,
    /// Whether the SLA was breached
    pub overdue_flag: bool,
}

impl Request {
    /// Create request with neutral defaults
    #[must_use]
    pub fn new(ticket_id: impl Into<String>, date_created: NaiveDate) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            request_type: String::new(),
            date_created,
            resolved_date: None,
            service_category: String::new(),
            service_type: String::new(),
            sla: SlaTimes::default(),
            sla_compliance: 100.0,
            customer_satisfaction: 5.0,
            priority: Priority::default(),
            status: RequestStatus::Open,
            assigned_to: String::new(),
            department: String::new(),
            overdue_flag: false,
        }
    }

    /// With request type
    #[inline]
    #[must_use]
    pub fn with_request_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = request_type.into();
        self
    }

    /// With service category and type
    #[inline]
    #[must_use]
    pub fn with_service(
        mut self,
        category: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        self.service_category = category.into();
        self.service_type = service_type.into();
        self
    }

    /// With SLA timings
    #[inline]
    #[must_use]
    pub fn with_sla(mut self, sla: SlaTimes) -> Self {
        self.sla = sla;
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// With assignee and department
    #[inline]
    #[must_use]
    pub fn with_assignment(
        mut self,
        assigned_to: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        self.assigned_to = assigned_to.into();
        self.department = department.into();
        self
    }

    /// With overdue flag
    #[inline]
    #[must_use]
    pub fn with_overdue(mut self, overdue: bool) -> Self {
        self.overdue_flag = overdue;
        self
    }

    /// With resolution date
    ///
    /// # Errors
    /// `ModelError::ResolvedBeforeCreated` when `resolved` precedes the
    /// creation date.
    pub fn with_resolved_date(mut self, resolved: NaiveDate) -> Result<Self, ModelError> {
        if resolved < self.date_created {
            return Err(ModelError::ResolvedBeforeCreated {
                created: self.date_created,
                resolved,
            });
        }
        self.resolved_date = Some(resolved);
        Ok(self)
    }

    /// With SLA compliance percentage (0–100)
    ///
    /// # Errors
    /// `ModelError::OutOfRange` outside 0–100.
    pub fn with_sla_compliance(mut self, value: f64) -> Result<Self, ModelError> {
        self.sla_compliance = check_range("slaCompliance", value, 0.0, 100.0)?;
        Ok(self)
    }

    /// With customer satisfaction score (3.0–5.0)
    ///
    /// # Errors
    /// `ModelError::OutOfRange` outside 3.0–5.0.
    pub fn with_customer_satisfaction(mut self, value: f64) -> Result<Self, ModelError> {
        self.customer_satisfaction = check_range("customerSatisfaction", value, 3.0, 5.0)?;
        Ok(self)
    }

    /// Resolution date, if resolved
    #[inline]
    #[must_use]
    pub fn resolved_date(&self) -> Option<NaiveDate> {
        self.resolved_date
    }

    /// SLA compliance percentage
    #[inline]
    #[must_use]
    pub fn sla_compliance(&self) -> f64 {
        self.sla_compliance
    }

    /// Customer satisfaction score
    #[inline]
    #[must_use]
    pub fn customer_satisfaction(&self) -> f64 {
        self.customer_satisfaction
    }

    /// SLA status derived from the overdue flag
    #[inline]
    #[must_use]
    pub fn sla_status(&self) -> SlaStatus {
        if self.overdue_flag {
            SlaStatus::Overdue
        } else {
            SlaStatus::OnTime
        }
    }

    /// Whole calendar days between creation and resolution
    #[must_use]
    pub fn resolution_days(&self) -> Option<i64> {
        self.resolved_date
            .map(|resolved| (resolved - self.date_created).num_days())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ModelError> {
    if value.is_nan() || value < min || value > max {
        return Err(ModelError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolved_date_cannot_precede_creation() {
        let req = Request::new("T-1", date(2024, 3, 10));
        assert!(req.clone().with_resolved_date(date(2024, 3, 9)).is_err());
        assert!(req.clone().with_resolved_date(date(2024, 3, 10)).is_ok());
        assert!(req.with_resolved_date(date(2024, 4, 1)).is_ok());
    }

    #[test]
    fn sla_status_follows_overdue_flag() {
        let req = Request::new("T-2", date(2024, 1, 1));
        assert_eq!(req.sla_status(), SlaStatus::OnTime);
        assert_eq!(req.with_overdue(true).sla_status(), SlaStatus::Overdue);
    }

    #[test]
    fn score_ranges_are_enforced() {
        let req = Request::new("T-3", date(2024, 1, 1));
        assert!(req.clone().with_sla_compliance(101.0).is_err());
        assert!(req.clone().with_customer_satisfaction(2.9).is_err());
        assert!(req.clone().with_customer_satisfaction(f64::NAN).is_err());
        let ok = req
            .with_sla_compliance(87.5)
            .unwrap()
            .with_customer_satisfaction(4.2)
            .unwrap();
        assert_eq!(ok.sla_compliance(), 87.5);
        assert_eq!(ok.customer_satisfaction(), 4.2);
    }

    #[test]
    fn status_parsing_accepts_labels() {
        assert_eq!(
            "in progress".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn active_statuses() {
        let active: Vec<_> = RequestStatus::ALL
            .into_iter()
            .filter(RequestStatus::is_active)
            .collect();
        assert_eq!(
            active,
            vec![
                RequestStatus::Open,
                RequestStatus::Pending,
                RequestStatus::InProgress
            ]
        );
    }

    #[test]
    fn resolution_days_counts_calendar_days() {
        let req = Request::new("T-4", date(2024, 1, 1))
            .with_resolved_date(date(2024, 1, 11))
            .unwrap();
        assert_eq!(req.resolution_days(), Some(10));
        assert_eq!(Request::new("T-5", date(2024, 1, 1)).resolution_days(), None);
    }
}
