use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradepost_core::{CustomerId, DomainError, DomainResult, Entity, Money, OrderId, ProductId};
use tradepost_customers::Customer;

/// Order line: product, quantity, unit price.
///
/// `unit_price` is the catalog snapshot price at placement time and is never
/// recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Money,
}

/// Input to [`OrderStore::create`]: everything except what the store assigns.
///
/// [`OrderStore::create`]: crate::store::OrderStore::create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

/// Persisted order.
///
/// `id` and `placed_at` are assigned by the order store; callers never pick
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        lines: Vec<OrderLine>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            lines,
            placed_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Sum of `quantity × unit_price` across all lines.
    pub fn total(&self) -> DomainResult<Money> {
        self.lines.iter().try_fold(Money::ZERO, |acc, line| {
            let quantity = u64::try_from(line.quantity)
                .map_err(|_| DomainError::invariant("line quantity must not be negative"))?;
            let line_total = line
                .unit_price
                .checked_mul(quantity)
                .ok_or_else(|| DomainError::invariant("order total overflow"))?;
            acc.checked_add(line_total)
                .ok_or_else(|| DomainError::invariant("order total overflow"))
        })
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
