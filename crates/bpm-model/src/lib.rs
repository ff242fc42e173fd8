//! BPM Portal Model
//!
//! Canonical, fully-typed records shared by every pipeline in the portal.
//! Records look the same whether they came from a bundled fixture, the mock
//! generator or the remote record store.
//!
//! # Core Types
//!
//! - [`Request`]: a service request shown on the analytics dashboard
//! - [`CatalogItem`]: a marketplace entry (service, document, regulation, tool)
//! - [`ItemId`]: numeric or textual catalog identifier
//! - [`Facet`]: one filterable dimension of a catalog
//!
//! # Example
//!
//! ```rust
//! use bpm_model::{CatalogItem, CommonFields, Facet, ItemDetails, ItemId, RegulationDetails};
//!
//! let item = CatalogItem::new(
//!     CommonFields::new(ItemId::Numeric(7), "Data Retention Act")
//!         .with_category("Privacy"),
//!     ItemDetails::Regulation(RegulationDetails::default()),
//! );
//!
//! assert_eq!(item.facet_value(Facet::Category).as_deref(), Some("Privacy"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod facet;
pub mod request;

pub use catalog::{
    CatalogItem, CatalogKind, CommonFields, DocumentDetails, ItemDetails, ItemId,
    RegulationDetails, ServiceDetails, ToolDetails, ToolFamily,
};
pub use error::ModelError;
pub use facet::{Facet, ALL};
pub use request::{Priority, Request, RequestStatus, SlaStatus, SlaTimes};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with portal records
    pub use crate::{
        CatalogItem, CatalogKind, CommonFields, Facet, ItemDetails, ItemId, Priority, Request,
        RequestStatus, SlaStatus,
    };
}
