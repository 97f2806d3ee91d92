//! Orders domain module.
//!
//! This crate contains the order records, the [`OrderStore`] persistence
//! seam, and the order placement workflow: resolve the customer, snapshot
//! the requested products, validate availability, price the lines from the
//! snapshot, persist, and write the decremented stock levels back.
//!
//! Validation and pricing are pure functions ([`placement::price_lines`],
//! [`placement::stock_after`]); [`PlaceOrder`] is the thin shell that drives
//! them through the store seams.

pub mod order;
pub mod placement;
pub mod store;

pub use order::{NewOrder, Order, OrderLine};
pub use placement::{PlaceOrder, PlaceOrderError};
pub use store::{OrderStore, OrderStoreError};
