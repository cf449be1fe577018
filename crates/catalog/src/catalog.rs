//! In-memory catalog store.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use storefront_core::{Entity, ProductId};

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// Read-only product collection.
///
/// Products keep their source order; "relevance" ordering downstream means
/// exactly this order. Cloning a catalog shares the underlying records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, rejecting blank names and duplicate ids.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id()) {
                return Err(CatalogError::DuplicateProduct(product.id().clone()));
            }
        }
        drop(seen);

        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self {
            products: products.into(),
        })
    }

    /// Decode a catalog from a JSON array of product records.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The eight-product electronics seed shipped with the storefront demo.
    pub fn demo() -> CatalogResult<Self> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands, in order of first appearance.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
