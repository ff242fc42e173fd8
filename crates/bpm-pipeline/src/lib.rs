//! BPM Portal Pipelines
//!
//! Pure, synchronous transforms over canonical records.
//!
//! # Core Operations
//!
//! - **Metrics**: date-range + category filter over requests, then a summary
//!   and six chart aggregations ([`metrics`])
//! - **Catalog**: facet conjunction, free-text search, sort and pagination
//!   over catalog items ([`catalog`])
//! - **Presentation**: rule tables deriving benefits, use cases, features,
//!   FAQs, specifications and display tags for one item ([`presentation`])
//!
//! Every aggregation returns [`ChartPoint`]s (`{name, value}`), ready to hand
//! to a charting layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use bpm_pipeline::prelude::*;
//!
//! let filter = RequestFilter::new(DateRange::new(start, end)).with_category("IT Services");
//! let mut dashboard = Dashboard::new(requests, today);
//! let views = dashboard.views(&filter);
//!
//! let page = CatalogQuery::new()
//!     .with_facet(Facet::Category, "Finance")
//!     .with_search("expense")
//!     .with_sort(SortOrder::AToZ)
//!     .run(&items);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod chart;
pub mod metrics;
pub mod presentation;

pub use catalog::{paginate, CatalogQuery, Page, SortOrder, DEFAULT_PAGE_SIZE};
pub use chart::ChartPoint;
pub use metrics::{
    category_options, Dashboard, DashboardViews, DateRange, RequestFilter, SummaryMetrics,
};
pub use presentation::{present, Faq, ItemPresentation, Rule, RuleTable, Specification};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for pipeline consumers
    pub use crate::catalog::{CatalogQuery, Page, SortOrder};
    pub use crate::chart::ChartPoint;
    pub use crate::metrics::{Dashboard, DashboardViews, DateRange, RequestFilter};
    pub use crate::presentation;
    pub use bpm_model::{CatalogItem, Facet, Request};
}
