use bpm_model::{Request, ALL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First included day
    pub start: NaiveDate,
    /// Last included day
    pub end: NaiveDate,
}

impl DateRange {
    /// Create range; an inverted range contains nothing
    #[inline]
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range of `days` days ending at `end`
    #[must_use]
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let span = chrono::Days::new(u64::from(days.saturating_sub(1)));
        Self {
            start: end.checked_sub_days(span).unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    /// Whether `date` falls within the range, bounds included
    #[inline]
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Dashboard filter: date range plus optional service category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Creation-date window
    pub range: DateRange,
    /// Service category, or `"All"`
    pub category: String,
}

impl RequestFilter {
    /// Filter on `range` across all categories
    #[must_use]
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            category: ALL.to_string(),
        }
    }

    /// With category constraint (`"All"` lifts it)
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether `request` passes
    #[must_use]
    pub fn matches(&self, request: &Request) -> bool {
        (self.category == ALL || request.service_category == self.category)
            && self.range.contains(request.date_created)
    }

    /// Passing requests, input order preserved
    #[must_use]
    pub fn apply<'a>(&self, requests: &'a [Request]) -> Vec<&'a Request> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }
}

/// `"All"` followed by every distinct service category, first-seen order
#[must_use]
pub fn category_options(requests: &[Request]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for request in requests {
        if !options.contains(&request.service_category) {
            options.push(request.service_category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpm_test_utils::{create_categorized_request, create_request, date};

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(date(2024, 1, 10), date(2024, 1, 20));
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(!range.contains(date(2024, 1, 15)));
    }

    #[test]
    fn ending_at_counts_end_day() {
        let range = DateRange::ending_at(date(2024, 3, 31), 30);
        assert_eq!(range.start, date(2024, 3, 2));
        assert_eq!(range.end, date(2024, 3, 31));
    }

    #[test]
    fn filter_combines_category_and_dates() {
        let requests = vec![
            create_categorized_request("REQ-1", date(2024, 1, 10), "IT Services", "Access"),
            create_categorized_request("REQ-2", date(2024, 1, 20), "HR", "Onboarding"),
            create_categorized_request("REQ-3", date(2024, 1, 21), "IT Services", "Access"),
            create_categorized_request("REQ-4", date(2024, 1, 9), "IT Services", "Access"),
        ];
        let range = DateRange::new(date(2024, 1, 10), date(2024, 1, 20));

        let all: Vec<_> = RequestFilter::new(range)
            .apply(&requests)
            .into_iter()
            .map(|r| r.ticket_id.as_str())
            .collect();
        assert_eq!(all, ["REQ-1", "REQ-2"]);

        let it = RequestFilter::new(range).with_category("IT Services");
        let it: Vec<_> = it.apply(&requests).into_iter().map(|r| r.ticket_id.as_str()).collect();
        assert_eq!(it, ["REQ-1"]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let requests = vec![create_request("REQ-1", date(2024, 1, 10))];
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        assert!(RequestFilter::new(range)
            .with_category("Legal")
            .apply(&requests)
            .is_empty());
    }

    #[test]
    fn category_options_start_with_all() {
        let requests = vec![
            create_categorized_request("REQ-1", date(2024, 1, 1), "HR", "Onboarding"),
            create_categorized_request("REQ-2", date(2024, 1, 1), "Finance", "Invoice"),
            create_categorized_request("REQ-3", date(2024, 1, 1), "HR", "Leave"),
        ];
        assert_eq!(category_options(&requests), ["All", "HR", "Finance"]);
    }
}
