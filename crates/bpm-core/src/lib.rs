//! BPM Portal Core
//!
//! Composes the data access layer and the pipelines behind one explicitly
//! constructed [`Portal`] handle.
//!
//! # Core Operations
//!
//! - **Configuration**: [`PortalConfig`] from defaults, a TOML file and
//!   `BPM_*` environment overrides
//! - **Mock data**: [`MockRequestGenerator`] draws the dashboard's request set,
//!   optionally seeded
//! - **Portal**: dashboard views, catalog search, detail pages and the
//!   comparison selection
//! - **Telemetry**: [`telemetry::init_tracing`] installs the subscriber
//!
//! # Example
//!
//! ```rust,ignore
//! use bpm_core::prelude::*;
//!
//! let config = PortalConfig::load(None)?;
//! telemetry::init_tracing(&config.log);
//!
//! let portal = Portal::new(config)?;
//! let views = portal.dashboard_views(&portal.recent_filter(30));
//! let page = portal
//!     .search(CatalogKind::Services, &CatalogQuery::new().with_search("onboarding"))
//!     .await;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod mock;
pub mod portal;
pub mod selection;
pub mod telemetry;

pub use config::{LogConfig, MockConfig, PortalConfig};
pub use error::{ConfigError, PortalError, SelectionError};
pub use mock::MockRequestGenerator;
pub use portal::{ItemDetail, Portal};
pub use selection::{ComparisonSelection, MAX_COMPARISON};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for portal consumers
    pub use crate::telemetry;
    pub use crate::{ItemDetail, Portal, PortalConfig, PortalError, SelectionError};
    pub use bpm_model::{CatalogItem, CatalogKind, Facet, ItemId};
    pub use bpm_pipeline::{CatalogQuery, DateRange, Page, RequestFilter, SortOrder};
}
