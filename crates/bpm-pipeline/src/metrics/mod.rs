//! Dashboard metrics pipeline
//!
//! ```text
//! requests → RequestFilter → summary
//!                          → by service type / priority / status / month
//!                          → team workload (top 8)
//!                          → resolution latency buckets
//! ```

mod dashboard;
mod filter;
mod histogram;
mod summary;

pub use dashboard::{Dashboard, DashboardViews};
pub use filter::{category_options, DateRange, RequestFilter};
pub use histogram::{
    by_month, by_priority, by_service_type, by_status, resolution_latency, team_workload,
    LATENCY_BUCKETS, TEAM_WORKLOAD_LIMIT,
};
pub use summary::{summarize, SummaryMetrics, FIRST_RESPONSE_PLACEHOLDER_HOURS};
