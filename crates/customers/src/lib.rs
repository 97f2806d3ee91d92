//! Customers domain module.
//!
//! This crate contains the customer record, registration rules, and the
//! directory seam through which other modules resolve customers. Storage
//! lives behind the [`CustomerDirectory`] trait.

pub mod customer;
pub mod directory;

pub use customer::Customer;
pub use directory::{CustomerDirectory, DirectoryError};
