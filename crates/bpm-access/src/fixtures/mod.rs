//! Bundled fallback datasets
//!
//! Served whenever remote mode is off or a remote call fails, and as the
//! sole source for the static catalogs. Ids are numeric and unique per
//! catalog.

mod documents;
mod regulations;
mod services;
mod tools;

use bpm_model::{CatalogItem, CatalogKind};

pub use documents::documents;
pub use regulations::regulations;
pub use services::services;
pub use tools::{performance_tools, process_mining_tools, risk_tools};

/// Fallback dataset for `kind`
#[must_use]
pub fn for_kind(kind: CatalogKind) -> Vec<CatalogItem> {
    match kind {
        CatalogKind::Services => services(),
        CatalogKind::Documents => documents(),
        CatalogKind::Regulations => regulations(),
        CatalogKind::PerformanceTools => performance_tools(),
        CatalogKind::ProcessMiningTools => process_mining_tools(),
        CatalogKind::RiskTools => risk_tools(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_has_items_of_its_kind() {
        for kind in CatalogKind::ALL {
            let items = for_kind(kind);
            assert!(!items.is_empty(), "{kind} fixtures are empty");
            assert!(items.iter().all(|item| item.kind() == kind), "{kind} mixes kinds");
        }
    }

    #[test]
    fn ids_are_unique_and_numeric() {
        for kind in CatalogKind::ALL {
            let items = for_kind(kind);
            let ids: HashSet<_> = items.iter().map(CatalogItem::id).collect();
            assert_eq!(ids.len(), items.len(), "{kind} has duplicate ids");
            assert!(items.iter().all(|item| item.id().as_numeric().is_some()));
        }
    }

    #[test]
    fn every_facet_resolves() {
        for kind in CatalogKind::ALL {
            for item in for_kind(kind) {
                for facet in kind.facets() {
                    assert!(
                        item.facet_value(*facet).is_some(),
                        "{kind} item {} lacks {facet}",
                        item.id()
                    );
                }
            }
        }
    }
}
