//! Listing configuration.
//!
//! Defaults mirror the storefront demo; each value can be overridden through
//! the environment. Unparseable overrides are logged and ignored.

use std::path::PathBuf;

use storefront_catalog::{Catalog, CatalogResult, Price};

use crate::filter::{FilterSpec, PriceRange};
use crate::paginate::PageSize;

pub const PAGE_SIZE_VAR: &str = "STOREFRONT_PAGE_SIZE";
pub const PRICE_CEILING_VAR: &str = "STOREFRONT_PRICE_CEILING";
pub const LISTING_PATH_VAR: &str = "STOREFRONT_LISTING_PATH";
pub const CATALOG_PATH_VAR: &str = "STOREFRONT_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub page_size: PageSize,
    /// Upper bound of the price range a fresh (or reset) listing starts with.
    pub price_ceiling: Price,
    /// Route of the listing page, used when reflecting filters into the URL.
    pub listing_path: String,
    /// JSON catalog file; the built-in demo catalog when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            price_ceiling: Price::from_cents(150_000),
            listing_path: "/product-listing".to_string(),
            catalog_path: None,
        }
    }
}

impl ListingConfig {
    /// Read overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` (environment-like key/value source).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            match raw.trim().parse::<usize>().ok().and_then(PageSize::new) {
                Some(size) => config.page_size = size,
                None => tracing::warn!(
                    value = %raw,
                    "{PAGE_SIZE_VAR} must be a positive integer; using {}",
                    config.page_size.get()
                ),
            }
        }

        if let Some(raw) = lookup(PRICE_CEILING_VAR) {
            match raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|amount| Price::from_decimal(amount).ok())
            {
                Some(ceiling) => config.price_ceiling = ceiling,
                None => tracing::warn!(
                    value = %raw,
                    "{PRICE_CEILING_VAR} must be a non-negative amount; using {}",
                    config.price_ceiling
                ),
            }
        }

        if let Some(raw) = lookup(LISTING_PATH_VAR) {
            let path = raw.trim();
            if path.starts_with('/') {
                config.listing_path = path.to_string();
            } else {
                tracing::warn!(
                    value = %raw,
                    "{LISTING_PATH_VAR} must be an absolute path; using {}",
                    config.listing_path
                );
            }
        }

        if let Some(raw) = lookup(CATALOG_PATH_VAR) {
            if !raw.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(raw.trim()));
            }
        }

        config
    }

    /// Filter a fresh listing starts from: no constraints other than the
    /// default price window.
    pub fn default_filter(&self) -> FilterSpec {
        FilterSpec::default().with_price_range(PriceRange::up_to(self.price_ceiling))
    }

    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::demo(),
        }
    }
}
