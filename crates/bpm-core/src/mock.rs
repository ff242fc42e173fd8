//! Mock request generation for the dashboard
//!
//! Unseeded generators draw from OS entropy, so each portal start sees a
//! fresh data set. Pass a seed for reproducible output.

use bpm_model::{ModelError, Priority, Request, RequestStatus, SlaTimes};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SERVICES: &[(&str, &[&str])] = &[
    (
        "IT Services",
        &["Access Request", "Hardware", "Software Install", "Network"],
    ),
    ("HR Services", &["Onboarding", "Payroll", "Benefits", "Leave"]),
    ("Finance", &["Expense Claim", "Invoice", "Budget Approval"]),
    ("Facilities", &["Maintenance", "Space Booking", "Security"]),
    ("Procurement", &["Purchase Order", "Vendor Setup"]),
];

const REQUEST_TYPES: &[&str] = &["Service Request", "Incident", "Change Request", "Inquiry"];

const ASSIGNEES: &[&str] = &[
    "Jane Smith",
    "John Doe",
    "Maria Garcia",
    "Wei Chen",
    "Aisha Khan",
    "Lucas Martin",
    "Olivia Brown",
    "Ravi Patel",
    "Sofia Rossi",
    "Tom Becker",
];

const DEPARTMENTS: &[&str] = &["IT", "HR", "Finance", "Operations", "Legal"];

/// Share of requests flagged overdue
const OVERDUE_RATE: f64 = 0.2;

/// Longest resolution time generated, in days
const MAX_RESOLUTION_DAYS: i64 = 14;

/// Random request generator
#[derive(Debug, Clone)]
pub struct MockRequestGenerator {
    rng: StdRng,
    today: NaiveDate,
    history_days: u32,
}

impl MockRequestGenerator {
    /// Create generator with creation dates in `[today - history_days, today]`
    #[must_use]
    pub fn new(seed: Option<u64>, today: NaiveDate, history_days: u32) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            today,
            history_days,
        }
    }

    /// Generate `count` requests with ticket ids `REQ-00001` upward
    pub fn generate(&mut self, count: usize) -> Vec<Request> {
        let requests: Vec<Request> = (1..=count)
            .filter_map(|n| match self.request(n) {
                Ok(request) => Some(request),
                Err(err) => {
                    tracing::warn!(%err, ticket = n, "discarding invalid mock request");
                    None
                }
            })
            .collect();
        tracing::debug!(count = requests.len(), "generated mock requests");
        requests
    }

    fn request(&mut self, n: usize) -> Result<Request, ModelError> {
        let age = self.rng.gen_range(0..=i64::from(self.history_days));
        let created = self.today - Duration::days(age);

        let (category, types) = SERVICES[self.rng.gen_range(0..SERVICES.len())];
        let service_type = self.pick(types);
        let status = RequestStatus::ALL[self.rng.gen_range(0..RequestStatus::ALL.len())];
        let priority = Priority::ALL[self.rng.gen_range(0..Priority::ALL.len())];

        let response_sla = self.rng.gen_range(1_u32..=8);
        let resolution_sla = self.rng.gen_range(8_u32..=72);
        let sla = SlaTimes {
            response_sla: f64::from(response_sla),
            resolution_sla: f64::from(resolution_sla),
            escalation_sla: f64::from(resolution_sla + self.rng.gen_range(4..=24)),
            target_sla: f64::from(resolution_sla),
        };

        let mut request = Request::new(format!("REQ-{n:05}"), created)
            .with_request_type(self.pick(REQUEST_TYPES))
            .with_service(category, service_type)
            .with_sla(sla)
            .with_priority(priority)
            .with_status(status)
            .with_assignment(self.pick(ASSIGNEES), self.pick(DEPARTMENTS))
            .with_overdue(self.rng.gen_bool(OVERDUE_RATE))
            .with_sla_compliance(round_to(self.rng.gen_range(70.0..=100.0), 1))?
            .with_customer_satisfaction(round_to(self.rng.gen_range(3.0..=5.0), 1))?;

        if matches!(status, RequestStatus::Resolved | RequestStatus::Closed) {
            let resolved = created + Duration::days(self.rng.gen_range(0..=MAX_RESOLUTION_DAYS));
            request = request.with_resolved_date(resolved.min(self.today))?;
        }
        Ok(request)
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options[self.rng.gen_range(0..options.len())]
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpm_test_utils::date;

    fn generator(seed: u64) -> MockRequestGenerator {
        MockRequestGenerator::new(Some(seed), date(2024, 6, 30), 90)
    }

    #[test]
    fn seeded_output_is_reproducible() {
        assert_eq!(generator(42).generate(50), generator(42).generate(50));
        assert_ne!(generator(42).generate(50), generator(43).generate(50));
    }

    #[test]
    fn requests_respect_model_invariants() {
        let today = date(2024, 6, 30);
        let requests = generator(7).generate(300);
        assert_eq!(requests.len(), 300);

        for request in &requests {
            assert!(request.date_created <= today);
            assert!(request.date_created >= today - Duration::days(90));
            assert!((0.0..=100.0).contains(&request.sla_compliance()));
            assert!((3.0..=5.0).contains(&request.customer_satisfaction()));
            if let Some(resolved) = request.resolved_date() {
                assert!(resolved >= request.date_created);
                assert!(resolved <= today);
            }
        }
    }

    #[test]
    fn only_finished_requests_have_resolution_dates() {
        for request in generator(11).generate(200) {
            let finished = matches!(
                request.status,
                RequestStatus::Resolved | RequestStatus::Closed
            );
            assert_eq!(request.resolved_date().is_some(), finished);
        }
    }

    #[test]
    fn ticket_ids_are_sequential() {
        let requests = generator(1).generate(3);
        let ids: Vec<_> = requests.iter().map(|r| r.ticket_id.as_str()).collect();
        assert_eq!(ids, ["REQ-00001", "REQ-00002", "REQ-00003"]);
    }

    #[test]
    fn unseeded_generator_still_produces_requests() {
        let mut generator = MockRequestGenerator::new(None, date(2024, 1, 31), 30);
        assert_eq!(generator.generate(10).len(), 10);
    }
}
