use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Free-form product attributes (e.g. `ram: "16GB"`).
///
/// The listing pipeline never inspects these.
pub type Specs = BTreeMap<String, serde_json::Value>;

/// Non-negative price in the smallest currency unit (cents).
///
/// Serialized as a decimal amount (`999.99`) to match catalog sources.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal amount, rounding to the nearest cent.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Customer rating on a 0 to 5 scale, kept in hundredths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u16);

impl Rating {
    pub const ZERO: Rating = Rating(0);
    pub const MAX: Rating = Rating(500);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be within [0, 5] (got {value})"
            )));
        }
        Ok(Self((value * 100.0).round() as u16))
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

    pub fn as_decimal(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Rating {}

impl TryFrom<f64> for Rating {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.as_decimal()
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}", self.as_decimal())
    }
}

/// Catalog product record.
///
/// Created once when the catalog is loaded and never mutated afterwards; the
/// catalog only hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub brand: String,
    pub rating: Rating,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specs: Specs,
}

impl Product {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
