//! Monetary amounts.
//!
//! Prices are carried in the smallest currency unit (e.g. cents) to keep
//! arithmetic exact. Currency designation lives outside this core.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Monetary amount in the smallest currency unit (e.g. cents).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(units: u64) -> Self {
        Self(units)
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: u64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Two-decimal rendering; callers needing locale-aware output format upstream.
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
