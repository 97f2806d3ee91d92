use serde::{Deserialize, Serialize};

use tradepost_core::{DomainError, DomainResult, Entity, Money, ProductId, ValueObject};

/// Product record: catalog identity, server-authoritative price, on-hand stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl Product {
    /// Create a product, validating sku, name, price, and initial stock.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if unit_price.is_zero() {
            return Err(DomainError::validation("unit_price must be positive"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }

        Ok(Self {
            id: ProductId::new(),
            sku,
            name,
            unit_price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Current on-hand stock.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Overwrite the on-hand stock. Catalog adapters use this to apply
    /// batch quantity updates; callers compute the new level themselves.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product id + quantity pair.
///
/// Used both as the requested line on the way into order placement and as a
/// stock update on the way back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl ValueObject for ProductQuantity {}
