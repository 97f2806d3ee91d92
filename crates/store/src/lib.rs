//! In-memory storage adapters for the three store seams.
//!
//! Intended for tests/dev; a database-backed implementation would live
//! alongside these behind the same traits.

pub mod in_memory;

#[cfg(test)]
mod integration_tests;

pub use in_memory::{InMemoryCatalog, InMemoryCustomerDirectory, InMemoryOrderStore};
