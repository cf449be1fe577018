//! Filter predicate: decides whether a product belongs in the listing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_catalog::{Price, Product, Rating};
use storefront_core::{DomainError, DomainResult, ValueObject};

/// Inclusive price bounds. Always `min <= max`; no `max` means no ceiling.
///
/// Serialized as `[min, max]` with `null` for an open ceiling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Price, Option<Price>)", into = "(Price, Option<Price>)")]
pub struct PriceRange {
    min: Price,
    max: Option<Price>,
}

impl PriceRange {
    /// Range that admits every price.
    pub const ANY: PriceRange = PriceRange {
        min: Price::ZERO,
        max: None,
    };

    pub fn new(min: Price, max: Price) -> DomainResult<Self> {
        Self::bounded(min, Some(max))
    }

    fn bounded(min: Price, max: Option<Price>) -> DomainResult<Self> {
        if let Some(max) = max {
            if min > max {
                return Err(DomainError::invariant(format!(
                    "price range minimum {min} exceeds maximum {max}"
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// `[0, max]`.
    pub fn up_to(max: Price) -> Self {
        Self {
            min: Price::ZERO,
            max: Some(max),
        }
    }

    /// `[min, ∞)`.
    pub fn at_least(min: Price) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Option<Price> {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && self.max.is_none_or(|max| price <= max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

impl ValueObject for PriceRange {}

impl TryFrom<(Price, Option<Price>)> for PriceRange {
    type Error = DomainError;

    fn try_from((min, max): (Price, Option<Price>)) -> Result<Self, Self::Error> {
        Self::bounded(min, max)
    }
}

impl From<PriceRange> for (Price, Option<Price>) {
    fn from(value: PriceRange) -> Self {
        (value.min, value.max)
    }
}

/// Active filter constraints. Unset fields do not constrain.
///
/// - `category`: case-insensitive exact match; `None` or empty means any.
/// - `brands`: membership test; empty set means any brand.
/// - `price_range`: inclusive bounds, always applied.
/// - `min_rating`: lower bound; zero means any rating.
/// - `search_term`: case-insensitive substring of the name; `None` or empty
///   means any name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub category: Option<String>,
    pub brands: BTreeSet<String>,
    pub price_range: PriceRange,
    pub min_rating: Rating,
    pub search_term: Option<String>,
}

impl ValueObject for FilterSpec {}

impl FilterSpec {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Add the brand if absent, remove it if present.
    pub fn toggle_brand(mut self, brand: &str) -> Self {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_min_rating(mut self, rating: Rating) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = non_empty(term.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Returns `true` when `product` satisfies every active constraint in `spec`.
pub fn matches(product: &Product, spec: &FilterSpec) -> bool {
    if let Some(category) = spec.category() {
        if product.category.to_lowercase() != category.to_lowercase() {
            return false;
        }
    }

    if !spec.brands.is_empty() && !spec.brands.contains(&product.brand) {
        return false;
    }

    if !spec.price_range.contains(product.price) {
        return false;
    }

    if !spec.min_rating.is_zero() && product.rating < spec.min_rating {
        return false;
    }

    if let Some(term) = spec.search_term() {
        if !product.name.to_lowercase().contains(&term.to_lowercase()) {
            return false;
        }
    }

    true
}

/// Products satisfying `spec`, in catalog order.
pub fn filter<'c>(products: &'c [Product], spec: &FilterSpec) -> Vec<&'c Product> {
    products.iter().filter(|p| matches(p, spec)).collect()
}
