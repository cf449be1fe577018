use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{DomainError, ProductId};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building a catalog from its source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}
