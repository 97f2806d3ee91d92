use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradepost_core::{CustomerId, DomainError, DomainResult, Entity};

/// Customer record.
///
/// Order placement only cares that a customer exists; the remaining
/// attributes are carried for the registration flow and read models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    registered_at: DateTime<Utc>,
}

impl Customer {
    /// Register a new customer, validating name and email.
    pub fn register(name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        validate_email(&email)?;

        Ok(Self {
            id: CustomerId::new(),
            name,
            email,
            registered_at: Utc::now(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Minimal structural email check: one `@` with non-empty sides.
fn validate_email(email: &str) -> DomainResult<()> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(DomainError::validation(format!(
            "malformed email address: '{email}'"
        )));
    }
    Ok(())
}
