//! Catalog domain module.
//!
//! Read-only product records held in memory for the lifetime of a session,
//! plus the value types (price, rating) the listing pipeline filters and
//! sorts on. No rendering, no persistence.

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use product::{Price, Product, Rating, Specs};
