//! Order placement workflow.
//!
//! Sequential flow, one pass, no retries:
//!
//! 1. resolve the customer
//! 2. snapshot the requested products from the catalog
//! 3. validate cardinality and availability against the snapshot
//! 4. price one line per requested entry from the snapshot
//! 5. persist the order
//! 6. write `snapshot stock - ordered quantity` back to the catalog
//!
//! Steps 3, 4, and 6 are pure functions over the step-2 snapshot. The stock
//! write-back reuses that snapshot instead of re-reading storage, so two
//! placements racing on the same product can both pass validation; see
//! [`ProductCatalog::update_quantity`].

use std::sync::Arc;

use thiserror::Error;

use tradepost_catalog::{CatalogError, Product, ProductCatalog, ProductQuantity};
use tradepost_core::{CustomerId, ProductId};
use tradepost_customers::{CustomerDirectory, DirectoryError};

use crate::order::{NewOrder, Order, OrderLine};
use crate::store::{OrderStore, OrderStoreError};

/// Order placement rejection.
///
/// The first four kinds abort before any write. Store errors propagate as-is;
/// there is no compensation, so a failed stock write-back can leave a
/// persisted order without its decrement.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    #[error("customer {0} does not exist")]
    CustomerNotFound(CustomerId),

    #[error("none of the requested products exist")]
    NoProductsFound,

    #[error("only {resolved} of {requested} requested products exist")]
    ProductsMissing { requested: usize, resolved: usize },

    #[error("insufficient stock for {} product(s)", .0.len())]
    ProductsUnavailable(Vec<ProductId>),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

/// Validate a request against a catalog snapshot and price its lines.
///
/// Cardinality is a count comparison, not a set-membership check: the catalog
/// resolves each id at most once, so a request repeating an id fails with
/// [`PlaceOrderError::ProductsMissing`].
///
/// Availability is all-or-nothing: one short product rejects the whole
/// request, and the error lists every short product.
///
/// Lines come out in request order with the snapshot's price; any price the
/// caller may have seen earlier is ignored.
pub fn price_lines(
    requested: &[ProductQuantity],
    snapshot: &[Product],
) -> Result<Vec<OrderLine>, PlaceOrderError> {
    if snapshot.is_empty() {
        return Err(PlaceOrderError::NoProductsFound);
    }
    if snapshot.len() != requested.len() {
        return Err(PlaceOrderError::ProductsMissing {
            requested: requested.len(),
            resolved: snapshot.len(),
        });
    }

    let short: Vec<ProductId> = snapshot
        .iter()
        .filter(|product| {
            let asked = requested
                .iter()
                .find(|r| r.product_id == product.id_typed())
                .map(|r| r.quantity)
                .unwrap_or(0);
            product.quantity() - asked < 0
        })
        .map(|product| product.id_typed())
        .collect();
    if !short.is_empty() {
        return Err(PlaceOrderError::ProductsUnavailable(short));
    }

    requested
        .iter()
        .map(|r| {
            let product = snapshot
                .iter()
                .find(|p| p.id_typed() == r.product_id)
                .ok_or(PlaceOrderError::ProductsMissing {
                    requested: requested.len(),
                    resolved: snapshot.len(),
                })?;
            Ok(OrderLine {
                product_id: r.product_id,
                quantity: r.quantity,
                unit_price: product.unit_price(),
            })
        })
        .collect()
}

/// Compute post-order stock levels from the persisted order and the
/// **same snapshot** used for validation (not re-read from storage).
pub fn stock_after(order: &Order, snapshot: &[Product]) -> Vec<ProductQuantity> {
    order
        .lines()
        .iter()
        .filter_map(|line| {
            snapshot
                .iter()
                .find(|p| p.id_typed() == line.product_id)
                .map(|p| ProductQuantity {
                    product_id: line.product_id,
                    quantity: p.quantity() - line.quantity,
                })
        })
        .collect()
}

/// Order placement service.
///
/// Holds its three store seams as plain constructor parameters; no container,
/// no runtime wiring.
pub struct PlaceOrder {
    customers: Arc<dyn CustomerDirectory>,
    catalog: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderStore>,
}

impl PlaceOrder {
    pub fn new(
        customers: Arc<dyn CustomerDirectory>,
        catalog: Arc<dyn ProductCatalog>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    /// Place one order: validate, persist, decrement stock, return the
    /// persisted order.
    ///
    /// Not idempotent: identical calls create distinct orders and decrement
    /// stock twice.
    pub fn execute(
        &self,
        customer_id: CustomerId,
        requested: &[ProductQuantity],
    ) -> Result<Order, PlaceOrderError> {
        tracing::debug!(%customer_id, requested = requested.len(), "placing order");

        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(PlaceOrderError::CustomerNotFound(customer_id))?;

        let snapshot = self.catalog.find_all_by_id(requested)?;
        let lines = price_lines(requested, &snapshot)?;

        let order = self.orders.create(NewOrder { customer, lines })?;

        let updates = stock_after(&order, &snapshot);
        self.catalog.update_quantity(&updates)?;

        tracing::info!(
            order_id = %order.id_typed(),
            %customer_id,
            lines = order.lines().len(),
            "order placed"
        );
        Ok(order)
    }
}
