//! Chart aggregations over filtered requests
//!
//! Buckets come from the data itself, so empty buckets never appear.

use crate::chart::{count_by, ChartPoint};
use bpm_model::Request;

/// Number of assignees shown in the workload chart
pub const TEAM_WORKLOAD_LIMIT: usize = 8;

/// Resolution latency buckets as `(label, min days, max days)`, in display
/// order
pub const LATENCY_BUCKETS: [(&str, i64, i64); 4] = [
    ("1-2 days", i64::MIN, 2),
    ("3-5 days", 3, 5),
    ("6-9 days", 6, 9),
    ("10+ days", 10, i64::MAX),
];

/// Requests per service type
#[must_use]
pub fn by_service_type(requests: &[&Request]) -> Vec<ChartPoint> {
    count_by(requests.iter().map(|r| r.service_type.as_str()))
}

/// Requests per priority
#[must_use]
pub fn by_priority(requests: &[&Request]) -> Vec<ChartPoint> {
    count_by(requests.iter().map(|r| r.priority.as_str()))
}

/// Requests per status
#[must_use]
pub fn by_status(requests: &[&Request]) -> Vec<ChartPoint> {
    count_by(requests.iter().map(|r| r.status.as_str()))
}

/// Requests per creation month (`YYYY-MM`), ascending
#[must_use]
pub fn by_month(requests: &[&Request]) -> Vec<ChartPoint> {
    let mut points = count_by(
        requests
            .iter()
            .map(|r| r.date_created.format("%Y-%m").to_string()),
    );
    points.sort_by(|a, b| a.name.cmp(&b.name));
    points
}

/// Busiest assignees, most requests first
///
/// Ties keep first-seen order. Labels are the first word of the assignee's
/// name.
#[must_use]
pub fn team_workload(requests: &[&Request]) -> Vec<ChartPoint> {
    let mut points = count_by(requests.iter().map(|r| r.assigned_to.as_str()));
    points.sort_by(|a, b| b.value.cmp(&a.value));
    points.truncate(TEAM_WORKLOAD_LIMIT);
    for point in &mut points {
        if let Some(first) = point.name.split_whitespace().next() {
            point.name = first.to_string();
        }
    }
    points
}

/// Resolved requests per latency bucket
///
/// Same-day resolutions count as `1-2 days`.
#[must_use]
pub fn resolution_latency(requests: &[&Request]) -> Vec<ChartPoint> {
    let mut counts = [0_usize; LATENCY_BUCKETS.len()];
    for days in requests.iter().filter_map(|r| r.resolution_days()) {
        if let Some(slot) = LATENCY_BUCKETS
            .iter()
            .position(|(_, min, max)| (*min..=*max).contains(&days))
        {
            counts[slot] += 1;
        }
    }

    LATENCY_BUCKETS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|((label, _, _), count)| ChartPoint::new(*label, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpm_model::{Priority, RequestStatus};
    use bpm_test_utils::{
        create_assigned_request, create_prioritized_request, create_request,
        create_resolved_request, date,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn refs(requests: &[Request]) -> Vec<&Request> {
        requests.iter().collect()
    }

    #[test]
    fn latency_examples() {
        let requests = [
            create_resolved_request("REQ-1", date(2024, 1, 1), date(2024, 1, 3)),
            create_resolved_request("REQ-2", date(2024, 1, 1), date(2024, 1, 11)),
        ];
        assert_eq!(
            resolution_latency(&refs(&requests)),
            vec![ChartPoint::new("1-2 days", 1), ChartPoint::new("10+ days", 1)]
        );
    }

    #[test]
    fn latency_bucket_edges() {
        let created = date(2024, 1, 1);
        let requests: Vec<Request> = [0_u64, 2, 3, 5, 6, 9, 10, 40]
            .iter()
            .enumerate()
            .map(|(i, days)| {
                let resolved = created.checked_add_days(chrono::Days::new(*days)).unwrap();
                create_resolved_request(&format!("REQ-{i}"), created, resolved)
            })
            .collect();

        assert_eq!(
            resolution_latency(&refs(&requests)),
            vec![
                ChartPoint::new("1-2 days", 2),
                ChartPoint::new("3-5 days", 2),
                ChartPoint::new("6-9 days", 2),
                ChartPoint::new("10+ days", 2),
            ]
        );
    }

    #[test]
    fn latency_skips_unresolved() {
        let requests = [create_request("REQ-1", date(2024, 1, 1))];
        assert!(resolution_latency(&refs(&requests)).is_empty());
    }

    #[test]
    fn team_workload_top_eight_first_word() {
        let names = [
            "Alice Adams", "Bob Brown", "Carol Clark", "Dan Davis", "Eve Evans",
            "Frank Fox", "Grace Green", "Hank Hill", "Ivy Irwin", "Jack Jones",
        ];
        let mut requests = Vec::new();
        for (rank, name) in names.iter().enumerate() {
            for n in 0..(20 - 2 * rank) {
                requests.push(create_assigned_request(
                    &format!("REQ-{rank}-{n}"),
                    date(2024, 1, 1),
                    name,
                ));
            }
        }

        let workload = team_workload(&refs(&requests));
        assert_eq!(workload.len(), 8);
        assert_eq!(workload[0], ChartPoint::new("Alice", 20));
        assert_eq!(workload[7], ChartPoint::new("Hank", 6));
        assert!(workload.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(workload.iter().all(|p| !p.name.contains(' ')));
    }

    #[test]
    fn team_workload_ties_keep_first_seen_order() {
        let requests = [
            create_assigned_request("REQ-1", date(2024, 1, 1), "Zoe Zane"),
            create_assigned_request("REQ-2", date(2024, 1, 1), "Amy Ames"),
            create_assigned_request("REQ-3", date(2024, 1, 1), "Amy Ames"),
            create_assigned_request("REQ-4", date(2024, 1, 1), "Max Moss"),
        ];
        let names: Vec<_> = team_workload(&refs(&requests))
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Amy", "Zoe", "Max"]);
    }

    #[test]
    fn months_sorted_ascending() {
        let requests = [
            create_request("REQ-1", date(2024, 3, 5)),
            create_request("REQ-2", date(2023, 12, 31)),
            create_request("REQ-3", date(2024, 3, 1)),
            create_request("REQ-4", date(2024, 1, 15)),
        ];
        assert_eq!(
            by_month(&refs(&requests)),
            vec![
                ChartPoint::new("2023-12", 1),
                ChartPoint::new("2024-01", 1),
                ChartPoint::new("2024-03", 2),
            ]
        );
    }

    #[test]
    fn priority_and_status_counts() {
        let requests = [
            create_prioritized_request("REQ-1", date(2024, 1, 1), Priority::High, RequestStatus::Open),
            create_prioritized_request("REQ-2", date(2024, 1, 1), Priority::Low, RequestStatus::Open),
            create_prioritized_request("REQ-3", date(2024, 1, 1), Priority::High, RequestStatus::Closed),
        ];
        let refs = refs(&requests);

        assert_eq!(
            by_priority(&refs),
            vec![ChartPoint::new("High", 2), ChartPoint::new("Low", 1)]
        );
        assert_eq!(
            by_status(&refs),
            vec![ChartPoint::new("Open", 2), ChartPoint::new("Closed", 1)]
        );
        assert_eq!(by_service_type(&refs), vec![ChartPoint::new("Access Request", 3)]);
    }

    proptest! {
        #[test]
        fn prop_histograms_cover_every_request(
            offsets in proptest::collection::vec((0_u64..400, 0_usize..4), 0..60)
        ) {
            let base = date(2023, 1, 1);
            let requests: Vec<Request> = offsets
                .iter()
                .enumerate()
                .map(|(i, (offset, p))| {
                    let created = base.checked_add_days(chrono::Days::new(*offset)).unwrap();
                    create_request(&format!("REQ-{i}"), created).with_priority(Priority::ALL[*p])
                })
                .collect();
            let refs = refs(&requests);

            for points in [by_priority(&refs), by_month(&refs), by_status(&refs)] {
                prop_assert!(points.iter().all(|p| p.value > 0));
                prop_assert_eq!(points.iter().map(|p| p.value).sum::<usize>(), requests.len());
            }
            let months = by_month(&refs);
            prop_assert!(months.windows(2).all(|w| w[0].name < w[1].name));
        }
    }
}
