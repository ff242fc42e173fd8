use super::page::{paginate, Page, DEFAULT_PAGE_SIZE};
use bpm_model::{CatalogItem, Facet, ModelError, ALL};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep input order
    #[default]
    Relevance,
    /// Title, alphabetical
    #[serde(rename = "A-Z")]
    AToZ,
    /// Highest numeric id first; text ids after, in input order
    Newest,
}

impl SortOrder {
    /// Display label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::AToZ => "A-Z",
            SortOrder::Newest => "Newest",
        }
    }

    /// Stable in-place sort of `items`
    pub fn sort(self, items: &mut [&CatalogItem]) {
        match self {
            SortOrder::Relevance => {}
            SortOrder::AToZ => items.sort_by_cached_key(|item| item.title().to_lowercase()),
            SortOrder::Newest => items.sort_by(|a, b| newest_first(a, b)),
        }
    }
}

fn newest_first(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    match (a.id().as_numeric(), b.id().as_numeric()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" | "" => Ok(SortOrder::Relevance),
            "a-z" | "az" | "title" => Ok(SortOrder::AToZ),
            "newest" => Ok(SortOrder::Newest),
            _ => Err(ModelError::unknown("sort order", s)),
        }
    }
}

/// Marketplace list query
///
/// Facet selections combine with AND; a selection of `"All"` imposes no
/// constraint. Search is a case-insensitive substring match on title or
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    /// Selected value per facet
    pub selections: IndexMap<Facet, String>,
    /// Free-text search
    pub search: String,
    /// Ordering
    pub sort: SortOrder,
    /// Requested page (1-based)
    pub page: usize,
    /// Items per page
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            selections: IndexMap::new(),
            search: String::new(),
            sort: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    /// Unconstrained query for the first page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a facet selection
    #[inline]
    #[must_use]
    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selections.insert(facet, value.into());
        self
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// With ordering
    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// With page number
    #[inline]
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// With page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Whether `item` satisfies every facet selection and the search text
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.matches_facets(item) && self.matches_search(item)
    }

    fn matches_facets(&self, item: &CatalogItem) -> bool {
        self.selections
            .iter()
            .filter(|(_, wanted)| wanted.as_str() != ALL)
            .all(|(facet, wanted)| {
                item.facet_value(*facet)
                    .is_some_and(|value| value == wanted.as_str())
            })
    }

    fn matches_search(&self, item: &CatalogItem) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || item.title().to_lowercase().contains(&needle)
            || item.common.description.to_lowercase().contains(&needle)
    }

    /// Matching items, sorted, unpaginated
    #[must_use]
    pub fn filter<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        let mut matched: Vec<&CatalogItem> = items.iter().filter(|i| self.matches(i)).collect();
        self.sort.sort(&mut matched);
        matched
    }

    /// Matching items, sorted, cut to the requested page
    #[must_use]
    pub fn run<'a>(&self, items: &'a [CatalogItem]) -> Page<&'a CatalogItem> {
        let matched = self.filter(items);
        tracing::debug!(
            total = items.len(),
            matched = matched.len(),
            sort = %self.sort,
            "catalog query"
        );
        paginate(matched, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpm_model::{ItemId, ToolDetails, ToolFamily};
    use bpm_test_utils::{create_document, create_service, create_tool_with};
    use proptest::prelude::*;

    fn ids(items: &[&CatalogItem]) -> Vec<ItemId> {
        items.iter().map(|i| i.id().clone()).collect()
    }

    fn tools() -> Vec<CatalogItem> {
        let tool = |id: u64, industry: &str, ai: bool| {
            create_tool_with(
                id,
                &format!("Tool {id}"),
                ToolDetails {
                    family: ToolFamily::RiskManagement,
                    industry: industry.to_string(),
                    ai_powered: ai,
                    ..ToolDetails::default()
                },
            )
        };
        vec![
            tool(1, "Banking", true),
            tool(2, "Banking", false),
            tool(3, "Healthcare", true),
            tool(4, "Healthcare", false),
        ]
    }

    #[test]
    fn all_selection_is_unconstrained() {
        let items = tools();
        let query = CatalogQuery::new()
            .with_facet(Facet::Industry, ALL)
            .with_facet(Facet::AiPowered, ALL);
        assert_eq!(query.filter(&items).len(), items.len());
    }

    #[test]
    fn two_facets_intersect() {
        let items = tools();
        let both = CatalogQuery::new()
            .with_facet(Facet::Industry, "Banking")
            .with_facet(Facet::AiPowered, "Yes");
        assert_eq!(ids(&both.filter(&items)), vec![ItemId::Numeric(1)]);
    }

    #[test]
    fn missing_facet_never_matches() {
        let items = vec![create_service(1, "Payroll", "Finance")];
        let query = CatalogQuery::new().with_facet(Facet::Language, "English");
        assert!(query.filter(&items).is_empty());
    }

    #[test]
    fn search_hits_title_or_description() {
        let items = vec![
            create_service(1, "Payroll", "Finance"),
            create_document(2, "Leave Form", "HR", "English"),
        ];
        let by_title = CatalogQuery::new().with_search("  PAYROLL ");
        assert_eq!(ids(&by_title.filter(&items)), vec![ItemId::Numeric(1)]);

        // create_service describes itself as "<title> service"
        let by_description = CatalogQuery::new().with_search("service");
        assert_eq!(ids(&by_description.filter(&items)), vec![ItemId::Numeric(1)]);
    }

    #[test]
    fn sort_orders() {
        let items = vec![
            create_service(2, "beta", "X"),
            CatalogItem::new(
                bpm_model::CommonFields::new("rec-z", "Zulu"),
                bpm_model::ItemDetails::Service(bpm_model::ServiceDetails::default()),
            ),
            create_service(10, "Alpha", "X"),
            create_service(7, "Gamma", "X"),
        ];

        let relevance = CatalogQuery::new().filter(&items);
        assert_eq!(relevance[0].title(), "beta");

        let az: Vec<_> = CatalogQuery::new()
            .with_sort(SortOrder::AToZ)
            .filter(&items)
            .into_iter()
            .map(CatalogItem::title)
            .collect();
        assert_eq!(az, ["Alpha", "beta", "Gamma", "Zulu"]);

        let newest = CatalogQuery::new().with_sort(SortOrder::Newest).filter(&items);
        assert_eq!(
            ids(&newest),
            vec![
                ItemId::Numeric(10),
                ItemId::Numeric(7),
                ItemId::Numeric(2),
                ItemId::from("rec-z"),
            ]
        );
    }

    #[test]
    fn sort_order_parses_labels() {
        assert_eq!("A-Z".parse::<SortOrder>().unwrap(), SortOrder::AToZ);
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("".parse::<SortOrder>().unwrap(), SortOrder::Relevance);
        assert!("oldest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn run_paginates() {
        let items: Vec<CatalogItem> = (1..=20_u64)
            .map(|id| create_service(id, &format!("Service {id}"), "Ops"))
            .collect();
        let page = CatalogQuery::new().with_page(2).run(&items);
        assert_eq!(page.total, 20);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_facet_conjunction_is_intersection(
            rows in proptest::collection::vec((0_usize..3, any::<bool>()), 0..30),
            industry in 0_usize..3,
            ai in any::<bool>(),
        ) {
            const INDUSTRIES: [&str; 3] = ["Banking", "Retail", "Energy"];
            let items: Vec<CatalogItem> = rows
                .iter()
                .enumerate()
                .map(|(i, (ind, flag))| {
                    create_tool_with(
                        i as u64,
                        "Tool",
                        ToolDetails {
                            industry: INDUSTRIES[*ind].to_string(),
                            ai_powered: *flag,
                            ..ToolDetails::default()
                        },
                    )
                })
                .collect();
            let ai_label = if ai { "Yes" } else { "No" };

            let by_industry = ids(&CatalogQuery::new()
                .with_facet(Facet::Industry, INDUSTRIES[industry])
                .filter(&items));
            let by_ai = ids(&CatalogQuery::new().with_facet(Facet::AiPowered, ai_label).filter(&items));
            let both = ids(&CatalogQuery::new()
                .with_facet(Facet::Industry, INDUSTRIES[industry])
                .with_facet(Facet::AiPowered, ai_label)
                .filter(&items));

            let expected: Vec<ItemId> = by_industry.into_iter().filter(|id| by_ai.contains(id)).collect();
            prop_assert_eq!(both, expected);
        }
    }
}
