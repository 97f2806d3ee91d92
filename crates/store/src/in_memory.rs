use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::Utc;

use tradepost_catalog::{CatalogError, Product, ProductCatalog, ProductQuantity};
use tradepost_core::{CustomerId, OrderId, ProductId};
use tradepost_customers::{Customer, CustomerDirectory, DirectoryError};
use tradepost_orders::{NewOrder, Order, OrderStore, OrderStoreError};

/// In-memory customer directory.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn register(&self, customer: Customer) -> Result<(), DirectoryError> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| DirectoryError::Unavailable("lock poisoned".to_string()))?;

        if customers.values().any(|c| c.email() == customer.email()) {
            return Err(DirectoryError::DuplicateEmail(customer.email().to_string()));
        }

        customers.insert(customer.id_typed(), customer);
        Ok(())
    }

    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DirectoryError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| DirectoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(customers.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DirectoryError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| DirectoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(customers.values().find(|c| c.email() == email).cloned())
    }
}

/// In-memory product catalog.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current on-hand stock for a product, `None` if absent. Test helper.
    pub fn stock_of(&self, id: ProductId) -> Option<i64> {
        self.products
            .read()
            .ok()
            .and_then(|products| products.get(&id).map(|p| p.quantity()))
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn insert(&self, product: Product) -> Result<(), CatalogError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;

        if products.values().any(|p| p.sku() == product.sku()) {
            return Err(CatalogError::DuplicateSku(product.sku().to_string()));
        }

        products.insert(product.id_typed(), product);
        Ok(())
    }

    fn find_all_by_id(&self, requested: &[ProductQuantity]) -> Result<Vec<Product>, CatalogError> {
        let products = self
            .products
            .read()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;

        // Distinct matches only: a repeated id resolves once, misses drop out.
        let mut seen = HashSet::new();
        let mut matches = Vec::with_capacity(requested.len());
        for r in requested {
            if !seen.insert(r.product_id) {
                continue;
            }
            if let Some(product) = products.get(&r.product_id) {
                matches.push(product.clone());
            }
        }
        Ok(matches)
    }

    fn update_quantity(&self, updates: &[ProductQuantity]) -> Result<(), CatalogError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;

        for update in updates {
            let product = products
                .get_mut(&update.product_id)
                .ok_or(CatalogError::UnknownProduct(update.product_id))?;
            product.set_quantity(update.quantity);
        }
        Ok(())
    }
}

/// In-memory order store. Assigns ids and timestamps on create.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted orders. Test helper.
    pub fn len(&self) -> usize {
        self.orders.read().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, order: NewOrder) -> Result<Order, OrderStoreError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| OrderStoreError::Unavailable("lock poisoned".to_string()))?;

        let persisted = Order::new(
            OrderId::new(),
            order.customer.id_typed(),
            order.lines,
            Utc::now(),
        );
        orders.insert(persisted.id_typed(), persisted.clone());
        Ok(persisted)
    }

    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| OrderStoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(orders.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradepost_core::Money;

    #[test]
    fn directory_rejects_duplicate_email() {
        let directory = InMemoryCustomerDirectory::new();
        directory
            .register(Customer::register("Ada", "ada@example.com").unwrap())
            .unwrap();

        let err = directory
            .register(Customer::register("Other Ada", "ada@example.com").unwrap())
            .unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateEmail(_)));
    }

    #[test]
    fn directory_finds_by_id_and_email() {
        let directory = InMemoryCustomerDirectory::new();
        let customer = Customer::register("Ada", "ada@example.com").unwrap();
        let id = customer.id_typed();
        directory.register(customer).unwrap();

        assert!(directory.find_by_id(id).unwrap().is_some());
        assert!(directory.find_by_id(CustomerId::new()).unwrap().is_none());
        assert!(
            directory
                .find_by_email("ada@example.com")
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn catalog_rejects_duplicate_sku() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert(Product::new("SKU-1", "Widget", Money::from_minor(1000), 5).unwrap())
            .unwrap();

        let err = catalog
            .insert(Product::new("SKU-1", "Other widget", Money::from_minor(500), 1).unwrap())
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSku(_)));
    }

    #[test]
    fn catalog_resolves_distinct_matches_only() {
        let catalog = InMemoryCatalog::new();
        let product = Product::new("SKU-1", "Widget", Money::from_minor(1000), 5).unwrap();
        let id = product.id_typed();
        catalog.insert(product).unwrap();

        let repeated = ProductQuantity {
            product_id: id,
            quantity: 1,
        };
        let phantom = ProductQuantity {
            product_id: ProductId::new(),
            quantity: 1,
        };

        let resolved = catalog
            .find_all_by_id(&[repeated, repeated, phantom])
            .unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id_typed(), id);
    }

    #[test]
    fn catalog_update_rejects_unknown_ids() {
        let catalog = InMemoryCatalog::new();
        let err = catalog
            .update_quantity(&[ProductQuantity {
                product_id: ProductId::new(),
                quantity: 1,
            }])
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownProduct(_)));
    }

    #[test]
    fn order_store_assigns_distinct_ids() {
        let store = InMemoryOrderStore::new();
        let customer = Customer::register("Ada", "ada@example.com").unwrap();

        let first = store
            .create(NewOrder {
                customer: customer.clone(),
                lines: vec![],
            })
            .unwrap();
        let second = store
            .create(NewOrder {
                customer,
                lines: vec![],
            })
            .unwrap();

        assert_ne!(first.id_typed(), second.id_typed());
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(first.id_typed()).unwrap().is_some());
    }
}
