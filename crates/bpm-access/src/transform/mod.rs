//! Record transformation
//!
//! Turns heterogeneous remote records into canonical [`bpm_model::CatalogItem`]s.
//! Nothing in here returns an error; bad input degrades to defaults.

mod fields;
mod record;

pub use fields::{is_numbered_list, parse_array_field, parse_json_field, value_to_text};
pub use record::{
    DocumentTransformer, RecordTransformer, ServiceTransformer, DEFAULT_CATEGORY,
    DEFAULT_DEPARTMENT, DEFAULT_LANGUAGE, DEFAULT_PRIORITY, DEFAULT_STATUS, DEFAULT_VERSION,
};
