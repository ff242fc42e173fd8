//! BPM Portal Data Access
//!
//! The boundary between the remote record store and the portal's canonical
//! records.
//!
//! # Core Operations
//!
//! - **Fetch**: read raw records from the remote store ([`RecordSource`])
//! - **Transform**: normalise heterogeneous remote fields ([`transform`])
//! - **Cache**: memoize results with per-entry expiry ([`RecordCache`])
//! - **Fallback**: serve bundled fixtures whenever the remote path fails
//!
//! # Architecture
//!
//! ```text
//! Airtable → RecordSource → RecordTransformer → CatalogItem → RecordCache
//!                 ↓ (error / timeout / disabled)
//!             fixtures (fallback dataset)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bpm_access::{AccessConfig, DataAccess};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let access = DataAccess::new(&AccessConfig::default())?;
//!
//! // Never fails: remote errors degrade to the fallback dataset
//! let services = access.services().list().await;
//! let options = access.services().get_filter_options().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod access;
pub mod cache;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod remote;
pub mod repository;
pub mod transform;

pub use access::{CatalogRef, DataAccess};
pub use cache::{CacheStats, RecordCache};
pub use config::{AccessConfig, RemoteConfig};
pub use error::FetchError;
pub use remote::{AirtableClient, ListQuery, RecordPage, RecordSource, RemoteRecord};
pub use repository::{
    DataOrigin, FilterOptions, RemoteCatalog, StaticCatalog, DEFAULT_RELATED_LIMIT,
};
pub use transform::{
    parse_array_field, parse_json_field, DocumentTransformer, RecordTransformer,
    ServiceTransformer,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the data access layer
    pub use crate::cache::RecordCache;
    pub use crate::config::AccessConfig;
    pub use crate::repository::{FilterOptions, RemoteCatalog, StaticCatalog};
    pub use crate::DataAccess;
    pub use bpm_model::{CatalogItem, CatalogKind, ItemId};
}
