use thiserror::Error;

use tradepost_core::CustomerId;

use crate::customer::Customer;

/// Customer directory operation error.
///
/// These are **storage errors** (availability, uniqueness at the storage
/// boundary) as opposed to domain validation errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("a customer with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("customer storage unavailable: {0}")]
    Unavailable(String),
}

/// Customer lookup/registration seam.
///
/// Implementations own persistence; callers never see storage details.
pub trait CustomerDirectory: Send + Sync {
    /// Persist a new customer. Email must be unique within the directory.
    fn register(&self, customer: Customer) -> Result<(), DirectoryError>;

    /// Resolve a customer by id, `None` if absent.
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DirectoryError>;

    /// Resolve a customer by email, `None` if absent.
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DirectoryError>;
}
