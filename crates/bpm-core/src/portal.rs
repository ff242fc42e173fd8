//! Portal handle composing data access, the dashboard and the comparison
//! selection

use crate::config::PortalConfig;
use crate::error::{PortalError, SelectionError};
use crate::mock::MockRequestGenerator;
use crate::selection::ComparisonSelection;
use bpm_access::{DataAccess, FilterOptions, DEFAULT_RELATED_LIMIT};
use bpm_model::{CatalogItem, CatalogKind, ItemId, Request};
use bpm_pipeline::presentation::{present, ItemPresentation};
use bpm_pipeline::{CatalogQuery, Dashboard, DashboardViews, DateRange, Page, RequestFilter};
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::Serialize;

/// One item with everything its detail page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    /// The item itself
    pub item: CatalogItem,
    /// Generated presentation lists
    pub presentation: ItemPresentation,
    /// Other items in the same category
    pub related: Vec<CatalogItem>,
}

/// Explicitly constructed portal state
///
/// Owns the data access layer (and with it the record cache), the generated
/// request set behind a memoizing [`Dashboard`], and the comparison
/// selection. Independent handles share nothing.
#[derive(Debug)]
pub struct Portal {
    config: PortalConfig,
    access: DataAccess,
    dashboard: Mutex<Dashboard>,
    selection: Mutex<ComparisonSelection>,
}

impl Portal {
    /// Create portal with today's local date as the dashboard reference day
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Access`] when remote mode is on without usable
    /// endpoint settings.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        Self::with_today(config, chrono::Local::now().date_naive())
    }

    /// Create portal with an explicit reference day
    ///
    /// # Errors
    ///
    /// Same as [`Portal::new`].
    pub fn with_today(config: PortalConfig, today: NaiveDate) -> Result<Self, PortalError> {
        let access = DataAccess::new(&config.access)?;
        let requests = MockRequestGenerator::new(config.mock.seed, today, config.mock.history_days)
            .generate(config.mock.request_count);
        tracing::info!(
            requests = requests.len(),
            seeded = config.mock.seed.is_some(),
            remote = config.access.remote_enabled,
            "portal ready"
        );
        Ok(Self::from_parts(config, access, requests, today))
    }

    /// Assemble from prepared parts
    #[must_use]
    pub fn from_parts(
        config: PortalConfig,
        access: DataAccess,
        requests: Vec<Request>,
        today: NaiveDate,
    ) -> Self {
        Self {
            config,
            access,
            dashboard: Mutex::new(Dashboard::new(requests, today)),
            selection: Mutex::new(ComparisonSelection::new()),
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Data access layer
    #[inline]
    #[must_use]
    pub fn access(&self) -> &DataAccess {
        &self.access
    }

    // Dashboard

    /// Dashboard reference day
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.dashboard.lock().today()
    }

    /// Filter covering the last `days` days up to the reference day
    #[must_use]
    pub fn recent_filter(&self, days: u32) -> RequestFilter {
        RequestFilter::new(DateRange::ending_at(self.today(), days))
    }

    /// `"All"` followed by every service category in the request set
    #[must_use]
    pub fn dashboard_categories(&self) -> Vec<String> {
        self.dashboard.lock().category_options()
    }

    /// The seven dashboard views for `filter`
    #[must_use]
    pub fn dashboard_views(&self, filter: &RequestFilter) -> DashboardViews {
        self.dashboard.lock().views(filter).clone()
    }

    /// Requests passing `filter`
    #[must_use]
    pub fn filtered_requests(&self, filter: &RequestFilter) -> Vec<Request> {
        self.dashboard
            .lock()
            .filtered(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    // Catalogs

    /// Every item of `kind`
    pub async fn items(&self, kind: CatalogKind) -> Vec<CatalogItem> {
        self.access.catalog(kind).list().await
    }

    /// Filtered, sorted page of `kind`
    pub async fn search(&self, kind: CatalogKind, query: &CatalogQuery) -> Page<CatalogItem> {
        let items = self.items(kind).await;
        query.run(&items).map(Clone::clone)
    }

    /// One item of `kind`
    pub async fn item(&self, kind: CatalogKind, id: &ItemId) -> Option<CatalogItem> {
        self.access.catalog(kind).get_by_id(id).await
    }

    /// Filter options for `kind`
    pub async fn filter_options(&self, kind: CatalogKind) -> FilterOptions {
        self.access.catalog(kind).get_filter_options().await
    }

    /// Item, presentation lists and related items for a detail page
    pub async fn detail(&self, kind: CatalogKind, id: &ItemId) -> Option<ItemDetail> {
        let catalog = self.access.catalog(kind);
        let item = catalog.get_by_id(id).await?;
        let related = catalog
            .get_related(item.id(), &item.common.category, DEFAULT_RELATED_LIMIT)
            .await;
        Some(ItemDetail {
            presentation: present(&item),
            item,
            related,
        })
    }

    /// Drop every cached record
    pub fn clear_cache(&self) {
        self.access.clear_cache();
    }

    // Comparison

    /// Add `item` to the comparison
    ///
    /// # Errors
    ///
    /// See [`ComparisonSelection::add`].
    pub fn compare(&self, item: CatalogItem) -> Result<(), SelectionError> {
        let mut selection = self.selection.lock();
        selection.add(item)?;
        tracing::debug!(selected = selection.len(), "comparison updated");
        Ok(())
    }

    /// Remove the item with `id` from the comparison
    pub fn uncompare(&self, id: &ItemId) -> Option<CatalogItem> {
        self.selection.lock().remove(id)
    }

    /// Whether `id` is in the comparison
    #[must_use]
    pub fn is_compared(&self, id: &ItemId) -> bool {
        self.selection.lock().contains(id)
    }

    /// Snapshot of the comparison
    #[must_use]
    pub fn comparison(&self) -> Vec<CatalogItem> {
        self.selection.lock().items().to_vec()
    }

    /// Empty the comparison
    pub fn clear_comparison(&self) {
        self.selection.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpm_model::Facet;
    use bpm_test_utils::{create_service, date};

    fn portal() -> Portal {
        let config = PortalConfig::new().with_seed(5).with_request_count(120);
        Portal::with_today(config, date(2024, 6, 30)).unwrap()
    }

    #[test]
    fn seeded_portals_agree() {
        let filter = portal().recent_filter(90);
        assert_eq!(portal().dashboard_views(&filter), portal().dashboard_views(&filter));
    }

    #[test]
    fn dashboard_views_are_memoized_per_handle() {
        let portal = portal();
        let filter = portal.recent_filter(30);
        let first = portal.dashboard_views(&filter);
        let second = portal.dashboard_views(&filter);
        assert_eq!(first, second);
        assert_eq!(portal.dashboard.lock().computations(), 1);
    }

    #[test]
    fn filtered_requests_match_summary_scope() {
        let portal = portal();
        let filter = portal.recent_filter(200);
        assert_eq!(portal.filtered_requests(&filter).len(), 120);
        assert_eq!(portal.dashboard_categories()[0], "All");
    }

    #[tokio::test]
    async fn search_runs_catalog_query() {
        let portal = portal();
        let all = portal.items(CatalogKind::Services).await;
        let category = all[0].common.category.clone();

        let page = portal
            .search(
                CatalogKind::Services,
                &CatalogQuery::new().with_facet(Facet::Category, category.as_str()),
            )
            .await;
        assert!(page.total >= 1);
        assert!(page.items.iter().all(|i| i.common.category == category));
    }

    #[tokio::test]
    async fn detail_includes_presentation_and_related() {
        let portal = portal();
        let first = portal.items(CatalogKind::Regulations).await.remove(0);

        let detail = portal
            .detail(CatalogKind::Regulations, first.id())
            .await
            .unwrap();
        assert_eq!(detail.item, first);
        assert_eq!(detail.presentation.specifications.len(), 4);
        assert!(detail.related.len() <= DEFAULT_RELATED_LIMIT);
        assert!(detail.related.iter().all(|i| i.id() != first.id()));

        assert!(portal
            .detail(CatalogKind::Regulations, &ItemId::Numeric(9_999))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn comparison_is_bounded() {
        let portal = portal();
        for item in portal.items(CatalogKind::RiskTools).await {
            portal.compare(item).unwrap();
        }
        let extra = create_service(99, "Late Addition", "General");
        assert!(matches!(
            portal.compare(extra),
            Err(SelectionError::Full { .. })
        ));
        assert_eq!(portal.comparison().len(), 4);

        portal.clear_comparison();
        assert!(portal.comparison().is_empty());
    }
}
