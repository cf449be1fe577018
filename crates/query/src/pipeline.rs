//! Listing orchestration: filter, then sort, then paginate.

use serde::{Deserialize, Serialize};

use storefront_catalog::{Catalog, Product};
use storefront_core::ValueObject;

use crate::filter::{FilterSpec, filter};
use crate::paginate::{PageSize, paginate, total_pages};
use crate::sort::{SortOption, sort};

/// Everything the listing needs to derive a [`View`].
///
/// Replaced wholesale whenever a control changes; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    pub filter: FilterSpec,
    pub sort: SortOption,
    /// 1-indexed.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortOption::default(),
            page: 1,
        }
    }
}

impl ValueObject for QueryState {}

impl QueryState {
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One computed listing page, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<'c> {
    pub items: Vec<&'c Product>,
    /// Matches across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// Requested page; reported as 1 when the request was 0 or nothing
    /// matched.
    pub page: usize,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Run the full pipeline over `products`.
///
/// Totals describe the filtered set before slicing. Out-of-range pages yield
/// an empty `items` list with correct totals.
pub fn compute<'c>(
    products: &'c [Product],
    filter_spec: &FilterSpec,
    sort_option: SortOption,
    page: usize,
    page_size: PageSize,
) -> View<'c> {
    let matched = filter(products, filter_spec);
    let ordered = sort(&matched, sort_option);

    let total_count = ordered.len();
    View {
        items: paginate(&ordered, page, page_size).to_vec(),
        total_count,
        total_pages: total_pages(total_count, page_size),
        page: if total_count == 0 { 1 } else { page.max(1) },
    }
}

/// Derive the view for `state` from scratch. Nothing is cached between calls.
pub fn recompute<'c>(catalog: &'c Catalog, state: &QueryState, page_size: PageSize) -> View<'c> {
    let view = compute(
        catalog.products(),
        &state.filter,
        state.sort,
        state.page,
        page_size,
    );

    tracing::debug!(
        sort = %state.sort,
        page = view.page,
        total_count = view.total_count,
        total_pages = view.total_pages,
        "listing recomputed"
    );

    view
}
