//! Product catalog domain module.
//!
//! This crate contains the product record (price + on-hand stock), creation
//! rules, and the catalog seam used by order placement to snapshot products
//! and to write stock levels back. Storage lives behind the
//! [`ProductCatalog`] trait.

pub mod catalog;
pub mod product;

pub use catalog::{CatalogError, ProductCatalog};
pub use product::{Product, ProductQuantity};
