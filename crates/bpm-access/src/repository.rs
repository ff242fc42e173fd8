//! Catalog repositories
//!
//! [`RemoteCatalog`] serves the remote-capable catalogs (services,
//! documents): cache first, then the remote store under a timeout, then the
//! bundled fallback. None of its operations fail; every remote error is
//! logged and absorbed. [`StaticCatalog`] serves fixture-only catalogs with
//! the same operations, synchronously.

use crate::cache::RecordCache;
use crate::error::FetchError;
use crate::remote::{related_formula, ListQuery, RecordSource};
use crate::transform::RecordTransformer;
use bpm_model::{CatalogItem, CatalogKind, Facet, ItemId, ALL};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default number of related items returned
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Default bound on a single remote call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a result came from
///
/// Only logged; callers receive plain records either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Served from the record cache
    Cache,
    /// Fetched from the remote store
    Remote,
    /// Bundled fallback dataset
    Fallback,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataOrigin::Cache => "cache",
            DataOrigin::Remote => "remote",
            DataOrigin::Fallback => "fallback",
        })
    }
}

/// Distinct values per facet, each list headed by `"All"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    kind: CatalogKind,
    values: IndexMap<Facet, Vec<String>>,
}

impl FilterOptions {
    /// Derive the options for `kind`'s facets from `items`
    ///
    /// Values keep first-seen order; empty values are skipped.
    #[must_use]
    pub fn derive(kind: CatalogKind, items: &[CatalogItem]) -> Self {
        let values = kind
            .facets()
            .iter()
            .map(|&facet| {
                let mut distinct = vec![ALL.to_string()];
                for value in items.iter().filter_map(|item| item.facet_value(facet)) {
                    if !value.is_empty() && !distinct.iter().any(|v| **v == *value) {
                        distinct.push(value.into_owned());
                    }
                }
                (facet, distinct)
            })
            .collect();

        Self { kind, values }
    }

    /// Catalog the options describe
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Options for `facet`; empty if the catalog has no such facet
    #[must_use]
    pub fn get(&self, facet: Facet) -> &[String] {
        self.values.get(&facet).map(Vec::as_slice).unwrap_or_default()
    }

    /// Facets with their options, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
        self.values.iter().map(|(facet, values)| (*facet, values.as_slice()))
    }
}

/// Drop items whose id repeats an earlier one
pub(crate) fn dedupe_by_id(kind: CatalogKind, items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.id().clone());
            if !fresh {
                tracing::warn!(catalog = %kind, id = %item.id(), "dropping duplicate catalog id");
            }
            fresh
        })
        .collect()
}

fn related_in<'a>(
    items: &'a [CatalogItem],
    id: &ItemId,
    category: &str,
    limit: usize,
) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| item.common.category == category && item.id() != id)
        .take(limit)
        .collect()
}

/// Remote-capable catalog with cache and fallback
pub struct RemoteCatalog {
    kind: CatalogKind,
    table: String,
    source: Option<Arc<dyn RecordSource>>,
    transformer: Arc<dyn RecordTransformer>,
    cache: RecordCache,
    fallback: Arc<[CatalogItem]>,
    timeout: Duration,
}

impl RemoteCatalog {
    /// Create catalog in fallback-only mode
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        transformer: Arc<dyn RecordTransformer>,
        fallback: Vec<CatalogItem>,
        cache: RecordCache,
    ) -> Self {
        let kind = transformer.kind();
        Self {
            kind,
            table: table.into(),
            source: None,
            transformer,
            cache,
            fallback: dedupe_by_id(kind, fallback).into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// With a remote source (enables remote mode)
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn RecordSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// With per-call timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Catalog served
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Whether remote mode is on
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.source.is_some()
    }

    /// Bundled fallback dataset
    #[inline]
    #[must_use]
    pub fn fallback(&self) -> &[CatalogItem] {
        &self.fallback
    }

    fn list_key(&self) -> String {
        format!("all_{}", self.kind.entity())
    }

    fn item_key(&self, id: &ItemId) -> String {
        format!("{}_{id}", self.kind.entity())
    }

    fn options_key(&self) -> String {
        format!("filter_options_{}", self.kind.entity())
    }

    /// All items
    pub async fn list(&self) -> Vec<CatalogItem> {
        self.list_with_origin().await.0
    }

    /// All items, tagged with where they came from
    ///
    /// Only remote results are cached, so a recovered remote is picked up on
    /// the next call.
    pub async fn list_with_origin(&self) -> (Vec<CatalogItem>, DataOrigin) {
        let key = self.list_key();
        if let Some(items) = self.cache.get::<Vec<CatalogItem>>(&key).await {
            tracing::debug!(catalog = %self.kind, count = items.len(), origin = %DataOrigin::Cache, "list");
            return (items, DataOrigin::Cache);
        }

        match self.fetch_all().await {
            Ok(items) => {
                tracing::info!(catalog = %self.kind, count = items.len(), origin = %DataOrigin::Remote, "list");
                self.cache.set(key, items.clone()).await;
                (items, DataOrigin::Remote)
            }
            Err(err) => {
                self.log_fallback("list", &err);
                (self.fallback.to_vec(), DataOrigin::Fallback)
            }
        }
    }

    /// One item by id; `None` if neither the remote store nor the fallback
    /// has it
    pub async fn get_by_id(&self, id: &ItemId) -> Option<CatalogItem> {
        let key = self.item_key(id);
        if let Some(item) = self.cache.get::<CatalogItem>(&key).await {
            tracing::debug!(catalog = %self.kind, %id, origin = %DataOrigin::Cache, "get_by_id");
            return Some(item);
        }

        match self.fetch_one(id).await {
            Ok(Some(item)) => {
                tracing::info!(catalog = %self.kind, %id, origin = %DataOrigin::Remote, "get_by_id");
                self.cache.set(key, item.clone()).await;
                return Some(item);
            }
            Ok(None) => tracing::debug!(catalog = %self.kind, %id, "not found remotely"),
            Err(err) => self.log_fallback("get_by_id", &err),
        }

        self.fallback.iter().find(|item| item.id() == id).cloned()
    }

    /// Up to `limit` other items sharing `category`, excluding `id`
    pub async fn get_related(&self, id: &ItemId, category: &str, limit: usize) -> Vec<CatalogItem> {
        match self.fetch_related(id, category, limit).await {
            Ok(mut items) => {
                items.truncate(limit);
                tracing::info!(catalog = %self.kind, %id, count = items.len(), origin = %DataOrigin::Remote, "get_related");
                items
            }
            Err(err) => {
                self.log_fallback("get_related", &err);
                related_in(&self.fallback, id, category, limit)
                    .into_iter()
                    .cloned()
                    .collect()
            }
        }
    }

    /// Filter panel options, derived from [`RemoteCatalog::list`]
    pub async fn get_filter_options(&self) -> FilterOptions {
        let key = self.options_key();
        if let Some(options) = self.cache.get::<FilterOptions>(&key).await {
            return options;
        }

        let (items, origin) = self.list_with_origin().await;
        let options = FilterOptions::derive(self.kind, &items);
        if origin != DataOrigin::Fallback {
            self.cache.set(key, options.clone()).await;
        }
        options
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| FetchError::Timeout {
                after: self.timeout,
            })?
    }

    fn source(&self) -> Result<&dyn RecordSource, FetchError> {
        self.source.as_deref().ok_or(FetchError::Disabled)
    }

    async fn fetch_all(&self) -> Result<Vec<CatalogItem>, FetchError> {
        let source = self.source()?;
        let records = self
            .bounded(source.list_records(&self.table, &ListQuery::default()))
            .await?;
        let items = records
            .into_iter()
            .map(|record| self.transformer.transform(record))
            .collect();
        Ok(dedupe_by_id(self.kind, items))
    }

    async fn fetch_one(&self, id: &ItemId) -> Result<Option<CatalogItem>, FetchError> {
        let source = self.source()?;
        let record = self
            .bounded(source.get_record(&self.table, &id.to_string()))
            .await?;
        Ok(record.map(|record| self.transformer.transform(record)))
    }

    async fn fetch_related(
        &self,
        id: &ItemId,
        category: &str,
        limit: usize,
    ) -> Result<Vec<CatalogItem>, FetchError> {
        let source = self.source()?;
        let query = ListQuery::default()
            .with_formula(related_formula(category, &id.to_string()))
            .with_max_records(limit);
        let records = self.bounded(source.list_records(&self.table, &query)).await?;
        Ok(records
            .into_iter()
            .map(|record| self.transformer.transform(record))
            .collect())
    }

    fn log_fallback(&self, operation: &str, err: &FetchError) {
        if matches!(err, FetchError::Disabled) {
            tracing::debug!(catalog = %self.kind, operation, origin = %DataOrigin::Fallback, "remote mode off");
        } else {
            tracing::warn!(catalog = %self.kind, operation, origin = %DataOrigin::Fallback, error = %err, "remote fetch failed, serving fallback");
        }
    }
}

impl fmt::Debug for RemoteCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCatalog")
            .field("kind", &self.kind)
            .field("table", &self.table)
            .field("remote", &self.is_remote())
            .field("fallback_len", &self.fallback.len())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Fixture-only catalog
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    kind: CatalogKind,
    items: Vec<CatalogItem>,
    options: FilterOptions,
}

impl StaticCatalog {
    /// Create catalog over `items`; repeated ids keep the first occurrence
    #[must_use]
    pub fn new(kind: CatalogKind, items: Vec<CatalogItem>) -> Self {
        let items = dedupe_by_id(kind, items);
        let options = FilterOptions::derive(kind, &items);
        Self {
            kind,
            items,
            options,
        }
    }

    /// Catalog served
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// All items
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[CatalogItem] {
        &self.items
    }

    /// One item by id
    #[must_use]
    pub fn get_by_id(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Up to `limit` other items sharing `category`, excluding `id`
    #[must_use]
    pub fn get_related(&self, id: &ItemId, category: &str, limit: usize) -> Vec<&CatalogItem> {
        related_in(&self.items, id, category, limit)
    }

    /// Filter panel options
    #[inline]
    #[must_use]
    pub fn get_filter_options(&self) -> &FilterOptions {
        &self.options
    }
}
