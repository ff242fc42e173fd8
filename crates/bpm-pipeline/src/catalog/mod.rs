//! Catalog pipeline: facet filters, search, sort, pagination

mod page;
mod query;

pub use page::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use query::{CatalogQuery, SortOrder};
