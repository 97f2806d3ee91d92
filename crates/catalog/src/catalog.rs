use thiserror::Error;

use tradepost_core::ProductId;

use crate::product::{Product, ProductQuantity};

/// Catalog operation error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("a product with sku '{0}' already exists")]
    DuplicateSku(String),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("catalog storage unavailable: {0}")]
    Unavailable(String),
}

/// Product catalog seam.
///
/// Order placement reads a snapshot through [`find_all_by_id`] and writes
/// post-order stock levels back through [`update_quantity`].
///
/// [`find_all_by_id`]: ProductCatalog::find_all_by_id
/// [`update_quantity`]: ProductCatalog::update_quantity
pub trait ProductCatalog: Send + Sync {
    /// Persist a new product. Sku must be unique within the catalog.
    fn insert(&self, product: Product) -> Result<(), CatalogError>;

    /// Resolve the distinct products matching the requested ids.
    ///
    /// Unmatched ids are silently dropped and the output order is not
    /// guaranteed to mirror the input; callers own cardinality checks.
    fn find_all_by_id(&self, requested: &[ProductQuantity]) -> Result<Vec<Product>, CatalogError>;

    /// Overwrite on-hand quantities in one batch.
    ///
    /// Last write wins: there is no compare-and-swap against the stored
    /// level, so callers racing on the same product can lose decrements.
    /// Fails with [`CatalogError::UnknownProduct`] if an id does not exist.
    fn update_quantity(&self, updates: &[ProductQuantity]) -> Result<(), CatalogError>;
}
