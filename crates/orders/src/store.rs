use thiserror::Error;

use tradepost_core::OrderId;

use crate::order::{NewOrder, Order};

/// Order store operation error.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("order storage unavailable: {0}")]
    Unavailable(String),
}

/// Order persistence seam.
pub trait OrderStore: Send + Sync {
    /// Persist a new order atomically, assigning its id and timestamp.
    ///
    /// Returns the persisted order, lines included, as stored.
    fn create(&self, order: NewOrder) -> Result<Order, OrderStoreError>;

    /// Resolve a persisted order by id, `None` if absent.
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError>;
}
