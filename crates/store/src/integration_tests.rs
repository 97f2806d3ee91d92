//! Integration tests for the full order placement flow.
//!
//! Wires the in-memory adapters through `PlaceOrder` and verifies:
//! - happy path: order persisted, lines priced from the catalog, stock decremented
//! - every rejection kind leaves both catalog and order store untouched
//! - placement is deliberately not idempotent

use std::sync::Arc;

use tradepost_catalog::{Product, ProductCatalog, ProductQuantity};
use tradepost_core::{CustomerId, Money, ProductId};
use tradepost_customers::{Customer, CustomerDirectory};
use tradepost_orders::{OrderStore, PlaceOrder, PlaceOrderError};

use crate::in_memory::{InMemoryCatalog, InMemoryCustomerDirectory, InMemoryOrderStore};

struct Fixture {
    place_order: PlaceOrder,
    catalog: Arc<InMemoryCatalog>,
    orders: Arc<InMemoryOrderStore>,
    customer_id: CustomerId,
    product_a: ProductId,
    product_b: ProductId,
}

/// Catalog from the reference scenario: A at 10.00 with 5 on hand, B at
/// 20.00 with 2 on hand, plus one registered customer.
fn setup() -> Fixture {
    tradepost_observability::init();

    let directory = Arc::new(InMemoryCustomerDirectory::new());
    let catalog = Arc::new(InMemoryCatalog::new());
    let orders = Arc::new(InMemoryOrderStore::new());

    let customer = Customer::register("Ada Lovelace", "ada@example.com").unwrap();
    let customer_id = customer.id_typed();
    directory.register(customer).unwrap();

    let a = Product::new("SKU-A", "Product A", Money::from_minor(1000), 5).unwrap();
    let b = Product::new("SKU-B", "Product B", Money::from_minor(2000), 2).unwrap();
    let product_a = a.id_typed();
    let product_b = b.id_typed();
    catalog.insert(a).unwrap();
    catalog.insert(b).unwrap();

    let place_order = PlaceOrder::new(directory, catalog.clone(), orders.clone());

    Fixture {
        place_order,
        catalog,
        orders,
        customer_id,
        product_a,
        product_b,
    }
}

fn ask(product_id: ProductId, quantity: i64) -> ProductQuantity {
    ProductQuantity {
        product_id,
        quantity,
    }
}

#[test]
fn places_order_and_decrements_stock() {
    let fx = setup();

    let order = fx
        .place_order
        .execute(
            fx.customer_id,
            &[ask(fx.product_a, 3), ask(fx.product_b, 2)],
        )
        .unwrap();

    assert_eq!(order.customer_id(), fx.customer_id);
    let lines = order.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product_id, fx.product_a);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].unit_price, Money::from_minor(1000));
    assert_eq!(lines[1].product_id, fx.product_b);
    assert_eq!(lines[1].quantity, 2);
    assert_eq!(lines[1].unit_price, Money::from_minor(2000));
    assert_eq!(order.total().unwrap(), Money::from_minor(7000));

    assert_eq!(fx.catalog.stock_of(fx.product_a), Some(2));
    assert_eq!(fx.catalog.stock_of(fx.product_b), Some(0));

    // The returned order is the persisted one.
    let stored = fx.orders.find_by_id(order.id_typed()).unwrap().unwrap();
    assert_eq!(stored, order);
}

#[test]
fn unknown_customer_rejects_without_mutation() {
    let fx = setup();
    let ghost = CustomerId::new();

    let err = fx
        .place_order
        .execute(ghost, &[ask(fx.product_a, 1)])
        .unwrap_err();

    assert!(matches!(err, PlaceOrderError::CustomerNotFound(id) if id == ghost));
    assert_eq!(fx.catalog.stock_of(fx.product_a), Some(5));
    assert!(fx.orders.is_empty());
}

#[test]
fn empty_request_is_no_products_found() {
    let fx = setup();

    let err = fx.place_order.execute(fx.customer_id, &[]).unwrap_err();

    assert!(matches!(err, PlaceOrderError::NoProductsFound));
    assert!(fx.orders.is_empty());
}

#[test]
fn entirely_unmatched_request_is_no_products_found() {
    let fx = setup();

    let err = fx
        .place_order
        .execute(fx.customer_id, &[ask(ProductId::new(), 1)])
        .unwrap_err();

    assert!(matches!(err, PlaceOrderError::NoProductsFound));
    assert!(fx.orders.is_empty());
}

#[test]
fn partially_unmatched_request_is_products_missing() {
    let fx = setup();

    let err = fx
        .place_order
        .execute(
            fx.customer_id,
            &[ask(fx.product_a, 1), ask(ProductId::new(), 1)],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        PlaceOrderError::ProductsMissing {
            requested: 2,
            resolved: 1
        }
    ));
    assert_eq!(fx.catalog.stock_of(fx.product_a), Some(5));
    assert!(fx.orders.is_empty());
}

#[test]
fn insufficient_stock_rejects_the_whole_request() {
    let fx = setup();

    // A's line alone would be satisfiable.
    let err = fx
        .place_order
        .execute(
            fx.customer_id,
            &[ask(fx.product_a, 1), ask(fx.product_b, 3)],
        )
        .unwrap_err();

    match err {
        PlaceOrderError::ProductsUnavailable(ids) => assert_eq!(ids, vec![fx.product_b]),
        other => panic!("expected ProductsUnavailable, got {other:?}"),
    }
    assert_eq!(fx.catalog.stock_of(fx.product_a), Some(5));
    assert_eq!(fx.catalog.stock_of(fx.product_b), Some(2));
    assert!(fx.orders.is_empty());
}

#[test]
fn duplicate_requested_ids_are_products_missing() {
    let fx = setup();

    let err = fx
        .place_order
        .execute(
            fx.customer_id,
            &[ask(fx.product_a, 1), ask(fx.product_a, 1)],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        PlaceOrderError::ProductsMissing {
            requested: 2,
            resolved: 1
        }
    ));
    assert!(fx.orders.is_empty());
}

#[test]
fn placement_is_not_idempotent() {
    let fx = setup();
    let request = [ask(fx.product_a, 2)];

    let first = fx.place_order.execute(fx.customer_id, &request).unwrap();
    let second = fx.place_order.execute(fx.customer_id, &request).unwrap();

    assert_ne!(first.id_typed(), second.id_typed());
    assert_eq!(fx.orders.len(), 2);
    assert_eq!(fx.catalog.stock_of(fx.product_a), Some(1));
}

#[test]
fn price_comes_from_the_catalog_not_the_caller() {
    let fx = setup();

    // The request carries quantities only; whatever price the caller saw
    // before placing cannot leak into the order.
    let order = fx
        .place_order
        .execute(fx.customer_id, &[ask(fx.product_b, 1)])
        .unwrap();

    assert_eq!(order.lines()[0].unit_price, Money::from_minor(2000));
}
