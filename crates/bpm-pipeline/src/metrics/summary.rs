use bpm_model::Request;
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder first-response time shown on the dashboard, in hours
pub const FIRST_RESPONSE_PLACEHOLDER_HOURS: f64 = 2.4;

/// Headline figures over the filtered requests
///
/// Means are `None` when no request passed the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Requests that are Open, Pending or In Progress
    pub open_requests: usize,
    /// Mean resolution SLA in hours
    pub avg_resolution_sla: Option<f64>,
    /// Mean SLA compliance percentage
    pub avg_sla_compliance: Option<f64>,
    /// Mean customer satisfaction score
    pub avg_customer_satisfaction: Option<f64>,
    /// Requests created on the reference day
    pub created_today: usize,
    /// Requests resolved on the reference day
    pub resolved_today: usize,
    /// Requests flagged overdue
    pub overdue: usize,
    /// First-response time in hours (fixed placeholder)
    pub first_response_hours: f64,
}

/// Summarise `requests` relative to `today`
#[must_use]
pub fn summarize(requests: &[&Request], today: NaiveDate) -> SummaryMetrics {
    SummaryMetrics {
        open_requests: requests.iter().filter(|r| r.status.is_active()).count(),
        avg_resolution_sla: mean(requests.iter().map(|r| r.sla.resolution_sla)),
        avg_sla_compliance: mean(requests.iter().map(|r| r.sla_compliance())),
        avg_customer_satisfaction: mean(requests.iter().map(|r| r.customer_satisfaction())),
        created_today: requests.iter().filter(|r| r.date_created == today).count(),
        resolved_today: requests
            .iter()
            .filter(|r| r.resolved_date() == Some(today))
            .count(),
        overdue: requests.iter().filter(|r| r.overdue_flag).count(),
        first_response_hours: FIRST_RESPONSE_PLACEHOLDER_HOURS,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
