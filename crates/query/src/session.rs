//! Interactive listing host.
//!
//! A [`ListingSession`] owns the catalog and the current [`QueryState`]. Each
//! control handler builds the next state from the current one and swaps it
//! in; [`ListingSession::view`] recomputes the pipeline on demand.

use storefront_catalog::{Catalog, Rating};
use storefront_core::value_object;

use crate::config::ListingConfig;
use crate::filter::{FilterSpec, PriceRange};
use crate::location::{category_from_location, listing_location};
use crate::page_window::{PageLink, page_links};
use crate::pipeline::{QueryState, View, recompute};
use crate::sort::SortOption;

/// Router collaborator: receives locations the address bar should show.
///
/// Notifications are outbound only; the session never reads state back.
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

impl<N> Navigator for &mut N
where
    N: Navigator + ?Sized,
{
    fn navigate(&mut self, location: &str) {
        (**self).navigate(location)
    }
}

/// Navigator that discards every location.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&mut self, _location: &str) {}
}

/// In-memory navigation history for tests/dev.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    entries: Vec<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, location: &str) {
        self.entries.push(location.to_string());
    }
}

#[derive(Debug)]
pub struct ListingSession<N = NoopNavigator> {
    catalog: Catalog,
    config: ListingConfig,
    state: QueryState,
    navigator: N,
}

impl<N: Navigator> ListingSession<N> {
    /// Start a listing with no filters beyond the configured price window.
    pub fn new(catalog: Catalog, config: ListingConfig, navigator: N) -> Self {
        let state = QueryState::default().with_filter(config.default_filter());
        Self {
            catalog,
            config,
            state,
            navigator,
        }
    }

    /// Start a listing from a router location, honouring its `category`
    /// parameter as the initial category filter.
    pub fn open(catalog: Catalog, config: ListingConfig, navigator: N, location: &str) -> Self {
        let mut session = Self::new(catalog, config, navigator);
        if let Some(category) = category_from_location(location) {
            tracing::debug!(%category, "initial category from location");
            let filter = session.state.filter.clone().with_category(category);
            session.replace(session.state.clone().with_filter(filter));
        }
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Current page of results, recomputed from scratch.
    pub fn view(&self) -> View<'_> {
        recompute(&self.catalog, &self.state, self.config.page_size)
    }

    /// Page title: the selected category, or "All Products".
    pub fn heading(&self) -> &str {
        self.state.filter.category().unwrap_or("All Products")
    }

    /// Page title with the number of matches, e.g. `Audio (2)`.
    pub fn heading_with_count(&self) -> String {
        format!("{} ({})", self.heading(), self.view().total_count)
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        let view = self.view();
        page_links(view.page, view.total_pages)
    }

    /// Select a category and reflect it into the shareable location.
    pub fn select_category(&mut self, category: &str) {
        let filter = self.state.filter.clone().with_category(category);
        self.replace_filter_from_first_page(filter);

        let location = listing_location(&self.config.listing_path, self.state.filter.category());
        self.navigator.navigate(&location);
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        let filter = self.state.filter.clone().toggle_brand(brand);
        self.replace_filter_from_first_page(filter);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        let filter = self.state.filter.clone().with_price_range(range);
        self.replace_filter_from_first_page(filter);
    }

    pub fn set_min_rating(&mut self, rating: Rating) {
        let filter = self.state.filter.clone().with_min_rating(rating);
        self.replace_filter_from_first_page(filter);
    }

    pub fn set_search_term(&mut self, term: &str) {
        let filter = self.state.filter.clone().with_search_term(term);
        self.replace_filter_from_first_page(filter);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.replace(self.state.clone().with_sort(sort).with_page(1));
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.view().total_pages;
        if page == 0 || page > total_pages {
            tracing::warn!(page, total_pages, "ignoring navigation to page outside listing");
            return false;
        }
        self.replace(self.state.clone().with_page(page));
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.state.page.saturating_sub(1))
    }

    /// Clear every filter, the search term and the sort, and drop URL
    /// parameters.
    pub fn reset(&mut self) {
        self.replace(QueryState::default().with_filter(self.config.default_filter()));
        let location = listing_location(&self.config.listing_path, None);
        self.navigator.navigate(&location);
    }

    fn replace_filter_from_first_page(&mut self, filter: FilterSpec) {
        self.replace(self.state.clone().with_filter(filter).with_page(1));
    }

    fn replace(&mut self, next: QueryState) {
        if value_object::replace(&mut self.state, next) {
            tracing::debug!(
                sort = %self.state.sort,
                page = self.state.page,
                "listing state replaced"
            );
        }
    }
}
