//! Data access facade owning one cache and every catalog

use crate::cache::RecordCache;
use crate::config::AccessConfig;
use crate::error::FetchError;
use crate::fixtures;
use crate::remote::{AirtableClient, RecordSource};
use crate::repository::{FilterOptions, RemoteCatalog, StaticCatalog};
use crate::transform::{DocumentTransformer, ServiceTransformer};
use bpm_model::{CatalogItem, CatalogKind, ItemId};
use std::sync::Arc;

/// Catalog backing one kind
#[derive(Debug, Clone, Copy)]
pub enum CatalogRef<'a> {
    /// Remote-capable catalog with fixture fallback
    Remote(&'a RemoteCatalog),
    /// Fixture-only catalog
    Static(&'a StaticCatalog),
}

impl CatalogRef<'_> {
    /// Catalog kind
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Remote(c) => c.kind(),
            Self::Static(c) => c.kind(),
        }
    }

    /// Every item
    pub async fn list(&self) -> Vec<CatalogItem> {
        match self {
            Self::Remote(c) => c.list().await,
            Self::Static(c) => c.list().to_vec(),
        }
    }

    /// One item by id
    pub async fn get_by_id(&self, id: &ItemId) -> Option<CatalogItem> {
        match self {
            Self::Remote(c) => c.get_by_id(id).await,
            Self::Static(c) => c.get_by_id(id).cloned(),
        }
    }

    /// Up to `limit` other items in `category`
    pub async fn get_related(&self, id: &ItemId, category: &str, limit: usize) -> Vec<CatalogItem> {
        match self {
            Self::Remote(c) => c.get_related(id, category, limit).await,
            Self::Static(c) => c
                .get_related(id, category, limit)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Distinct values per facet
    pub async fn get_filter_options(&self) -> FilterOptions {
        match self {
            Self::Remote(c) => c.get_filter_options().await,
            Self::Static(c) => c.get_filter_options().clone(),
        }
    }
}

/// Explicitly constructed data access handle
///
/// Owns the record cache, the two remote-capable catalogs and the four
/// fixture-only catalogs. Each handle has its own cache, so independent
/// handles never observe each other's entries.
#[derive(Debug)]
pub struct DataAccess {
    cache: RecordCache,
    services: RemoteCatalog,
    documents: RemoteCatalog,
    regulations: StaticCatalog,
    performance_tools: StaticCatalog,
    process_mining_tools: StaticCatalog,
    risk_tools: StaticCatalog,
}

impl DataAccess {
    /// Build from configuration
    ///
    /// With remote mode on, an [`AirtableClient`] is created from
    /// `config.remote`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidConfig`] when the request timeout is zero,
    /// or remote mode is on and the endpoint settings are unusable.
    pub fn new(config: &AccessConfig) -> Result<Self, FetchError> {
        config.validate()?;
        let source: Option<Arc<dyn RecordSource>> = if config.remote_enabled {
            let client = AirtableClient::new(&config.remote, config.request_timeout())?;
            Some(Arc::new(client))
        } else {
            None
        };
        Ok(Self::assemble(config, source))
    }

    /// Build with an explicit remote source, regardless of
    /// `config.remote_enabled`
    #[must_use]
    pub fn with_source(config: &AccessConfig, source: Arc<dyn RecordSource>) -> Self {
        Self::assemble(config, Some(source))
    }

    fn assemble(config: &AccessConfig, source: Option<Arc<dyn RecordSource>>) -> Self {
        let cache = if config.cache_enabled {
            RecordCache::new(config.cache_ttl())
        } else {
            RecordCache::disabled(config.cache_ttl())
        };

        let remote = |kind: CatalogKind, catalog: RemoteCatalog| {
            let catalog = catalog.with_timeout(config.request_timeout());
            match &source {
                Some(source) => {
                    tracing::info!(catalog = %kind, "remote mode on");
                    catalog.with_source(Arc::clone(source))
                }
                None => catalog,
            }
        };

        let services = remote(
            CatalogKind::Services,
            RemoteCatalog::new(
                config.remote.services_table.clone(),
                Arc::new(ServiceTransformer),
                fixtures::services(),
                cache.clone(),
            ),
        );
        let documents = remote(
            CatalogKind::Documents,
            RemoteCatalog::new(
                config.remote.documents_table.clone(),
                Arc::new(DocumentTransformer),
                fixtures::documents(),
                cache.clone(),
            ),
        );

        Self {
            cache,
            services,
            documents,
            regulations: StaticCatalog::new(CatalogKind::Regulations, fixtures::regulations()),
            performance_tools: StaticCatalog::new(
                CatalogKind::PerformanceTools,
                fixtures::performance_tools(),
            ),
            process_mining_tools: StaticCatalog::new(
                CatalogKind::ProcessMiningTools,
                fixtures::process_mining_tools(),
            ),
            risk_tools: StaticCatalog::new(CatalogKind::RiskTools, fixtures::risk_tools()),
        }
    }

    /// Services catalog
    #[inline]
    #[must_use]
    pub fn services(&self) -> &RemoteCatalog {
        &self.services
    }

    /// Documents catalog
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &RemoteCatalog {
        &self.documents
    }

    /// Remote-capable catalog for `kind`
    #[must_use]
    pub fn remote_catalog(&self, kind: CatalogKind) -> Option<&RemoteCatalog> {
        match kind {
            CatalogKind::Services => Some(&self.services),
            CatalogKind::Documents => Some(&self.documents),
            _ => None,
        }
    }

    /// Fixture-only catalog for `kind`
    #[must_use]
    pub fn static_catalog(&self, kind: CatalogKind) -> Option<&StaticCatalog> {
        match kind {
            CatalogKind::Regulations => Some(&self.regulations),
            CatalogKind::PerformanceTools => Some(&self.performance_tools),
            CatalogKind::ProcessMiningTools => Some(&self.process_mining_tools),
            CatalogKind::RiskTools => Some(&self.risk_tools),
            CatalogKind::Services | CatalogKind::Documents => None,
        }
    }

    /// Catalog for `kind`
    #[must_use]
    pub fn catalog(&self, kind: CatalogKind) -> CatalogRef<'_> {
        match kind {
            CatalogKind::Services => CatalogRef::Remote(&self.services),
            CatalogKind::Documents => CatalogRef::Remote(&self.documents),
            CatalogKind::Regulations => CatalogRef::Static(&self.regulations),
            CatalogKind::PerformanceTools => CatalogRef::Static(&self.performance_tools),
            CatalogKind::ProcessMiningTools => CatalogRef::Static(&self.process_mining_tools),
            CatalogKind::RiskTools => CatalogRef::Static(&self.risk_tools),
        }
    }

    /// Shared record cache
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// Drop every cached entry
    pub fn clear_cache(&self) {
        tracing::info!("clearing record cache");
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MockRecordSource, RemoteRecord};

    #[test]
    fn default_config_builds_without_remote() {
        let access = DataAccess::new(&AccessConfig::default()).unwrap();
        assert!(!access.services().is_remote());
        assert!(!access.documents().is_remote());
        assert!(access.cache().is_enabled());
    }

    #[test]
    fn remote_mode_requires_credentials() {
        let config = AccessConfig::default().with_remote_enabled(true);
        assert!(matches!(
            DataAccess::new(&config),
            Err(FetchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = AccessConfig {
            request_timeout_secs: 0,
            ..AccessConfig::default()
        };
        assert!(matches!(
            DataAccess::new(&config),
            Err(FetchError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn configured_table_names_reach_the_source() {
        let mut source = MockRecordSource::new();
        source
            .expect_list_records()
            .withf(|table, _| table == "Service Catalog")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        source
            .expect_list_records()
            .withf(|table, _| table == "Policies")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let mut config = AccessConfig::default();
        config.remote.services_table = "Service Catalog".to_string();
        config.remote.documents_table = "Policies".to_string();
        let access = DataAccess::with_source(&config, Arc::new(source));

        assert!(access.services().list().await.is_empty());
        assert!(access.documents().list().await.is_empty());
    }

    #[test]
    fn every_kind_maps_to_one_catalog() {
        let access = DataAccess::new(&AccessConfig::default()).unwrap();
        for kind in CatalogKind::ALL {
            let remote = access.remote_catalog(kind).is_some();
            let fixed = access.static_catalog(kind).is_some();
            assert!(remote ^ fixed, "{kind}");
        }
    }

    #[tokio::test]
    async fn catalog_ref_dispatches_by_kind() {
        let access = DataAccess::new(&AccessConfig::default()).unwrap();
        for kind in CatalogKind::ALL {
            let catalog = access.catalog(kind);
            assert_eq!(catalog.kind(), kind);
            let items = catalog.list().await;
            assert!(!items.is_empty(), "{kind}");
            assert!(items.iter().all(|i| i.kind() == kind));

            let first = &items[0];
            assert_eq!(catalog.get_by_id(first.id()).await.as_ref(), Some(first));
            let related = catalog
                .get_related(first.id(), &first.common.category, 10)
                .await;
            assert!(related.iter().all(|i| i.id() != first.id()));
        }
    }

    #[tokio::test]
    async fn clear_cache_forces_refetch() {
        let mut source = MockRecordSource::new();
        source.expect_list_records().times(2).returning(|_, _| {
            Ok(vec![RemoteRecord {
                id: "recA".to_string(),
                fields: serde_json::Map::new(),
                created_time: None,
            }])
        });
        let access = DataAccess::with_source(&AccessConfig::default(), Arc::new(source));

        access.services().list().await;
        access.services().list().await;
        access.clear_cache();
        access.services().list().await;
    }

    #[tokio::test]
    async fn disabled_cache_refetches_every_time() {
        let mut source = MockRecordSource::new();
        source
            .expect_list_records()
            .times(3)
            .returning(|_, _| Ok(Vec::new()));
        let config = AccessConfig::default().with_cache_enabled(false);
        let access = DataAccess::with_source(&config, Arc::new(source));

        for _ in 0..3 {
            assert!(access.documents().list().await.is_empty());
        }
    }
}
