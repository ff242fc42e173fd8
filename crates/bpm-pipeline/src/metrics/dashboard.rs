use super::filter::{category_options, RequestFilter};
use super::histogram::{
    by_month, by_priority, by_service_type, by_status, resolution_latency, team_workload,
};
use super::summary::{summarize, SummaryMetrics};
use crate::chart::ChartPoint;
use bpm_model::Request;
use chrono::NaiveDate;
use serde::Serialize;

/// The seven derived dashboard views
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// Headline figures
    pub summary: SummaryMetrics,
    /// Requests per service type
    pub by_service_type: Vec<ChartPoint>,
    /// Requests per priority
    pub by_priority: Vec<ChartPoint>,
    /// Requests per status
    pub by_status: Vec<ChartPoint>,
    /// Requests per creation month
    pub by_month: Vec<ChartPoint>,
    /// Busiest assignees
    pub team_workload: Vec<ChartPoint>,
    /// Resolution latency buckets
    pub resolution_latency: Vec<ChartPoint>,
}

impl DashboardViews {
    /// Compute every view over already-filtered requests
    #[must_use]
    pub fn compute(requests: &[&Request], today: NaiveDate) -> Self {
        Self {
            summary: summarize(requests, today),
            by_service_type: by_service_type(requests),
            by_priority: by_priority(requests),
            by_status: by_status(requests),
            by_month: by_month(requests),
            team_workload: team_workload(requests),
            resolution_latency: resolution_latency(requests),
        }
    }
}

/// Request set with views memoized on the last filter
///
/// Views are recomputed only when the filter changes.
#[derive(Debug, Clone)]
pub struct Dashboard {
    requests: Vec<Request>,
    today: NaiveDate,
    memo: Option<(RequestFilter, DashboardViews)>,
    computations: u64,
}

impl Dashboard {
    /// Create dashboard over `requests`, with `today` as the reference day
    #[must_use]
    pub fn new(requests: Vec<Request>, today: NaiveDate) -> Self {
        Self {
            requests,
            today,
            memo: None,
            computations: 0,
        }
    }

    /// All requests, unfiltered
    #[inline]
    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Reference day for the "today" counters
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// `"All"` plus every service category present
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.requests)
    }

    /// Requests passing `filter`
    #[must_use]
    pub fn filtered(&self, filter: &RequestFilter) -> Vec<&Request> {
        filter.apply(&self.requests)
    }

    /// Views for `filter`
    pub fn views(&mut self, filter: &RequestFilter) -> &DashboardViews {
        if self.memo.as_ref().is_some_and(|(last, _)| last != filter) {
            self.memo = None;
        }

        let requests = &self.requests;
        let today = self.today;
        let computations = &mut self.computations;
        let (_, views) = self.memo.get_or_insert_with(|| {
            let filtered = filter.apply(requests);
            tracing::debug!(
                category = %filter.category,
                start = %filter.range.start,
                end = %filter.range.end,
                matched = filtered.len(),
                "recomputing dashboard views"
            );
            *computations += 1;
            (filter.clone(), DashboardViews::compute(&filtered, today))
        });
        views
    }

    /// How many times the views were recomputed
    #[inline]
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DateRange;
    use bpm_test_utils::{create_categorized_request, date};

    fn dashboard() -> Dashboard {
        Dashboard::new(
            vec![
                create_categorized_request("REQ-1", date(2024, 1, 5), "HR", "Onboarding"),
                create_categorized_request("REQ-2", date(2024, 1, 6), "IT Services", "Access"),
                create_categorized_request("REQ-3", date(2024, 2, 1), "HR", "Leave"),
            ],
            date(2024, 2, 1),
        )
    }

    #[test]
    fn views_are_memoized_on_filter() {
        let mut dashboard = dashboard();
        let filter = RequestFilter::new(DateRange::new(date(2024, 1, 1), date(2024, 1, 31)));

        let first = dashboard.views(&filter).clone();
        let second = dashboard.views(&filter).clone();
        assert_eq!(first, second);
        assert_eq!(dashboard.computations(), 1);

        let hr = filter.clone().with_category("HR");
        assert_eq!(dashboard.views(&hr).by_service_type.len(), 1);
        assert_eq!(dashboard.computations(), 2);

        dashboard.views(&filter);
        assert_eq!(dashboard.computations(), 3);
    }

    #[test]
    fn views_reflect_filtered_subset() {
        let mut dashboard = dashboard();
        let filter = RequestFilter::new(DateRange::new(date(2024, 1, 1), date(2024, 2, 1)))
            .with_category("HR");

        let views = dashboard.views(&filter);
        assert_eq!(views.summary.open_requests, 2);
        assert_eq!(views.summary.created_today, 1);
        assert_eq!(
            views.by_month,
            vec![ChartPoint::new("2024-01", 1), ChartPoint::new("2024-02", 1)]
        );
        assert!(views.resolution_latency.is_empty());
    }

    #[test]
    fn empty_window_yields_empty_views() {
        let mut dashboard = dashboard();
        let filter = RequestFilter::new(DateRange::new(date(2025, 1, 1), date(2025, 1, 31)));

        let views = dashboard.views(&filter);
        assert_eq!(views.summary.avg_sla_compliance, None);
        assert!(views.by_status.is_empty());
        assert!(views.team_workload.is_empty());
    }

    #[test]
    fn category_options_from_requests() {
        assert_eq!(dashboard().category_options(), ["All", "HR", "IT Services"]);
    }
}
