//! The catalog item entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A catalog item
///
/// `id` and `created_date` are assigned once, by the facade, before the
/// entity first reaches a repository; neither changes afterwards. Callers
/// hold transient copies, never shared mutable state, so mutation goes
/// through [`Item::with_update`] rather than field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Build a new value with the mutable fields overridden, keeping
    /// `id` and `created_date` from `self`
    pub fn with_update(&self, name: String, description: Option<String>, price: Decimal) -> Self {
        Item {
            id: self.id,
            name,
            description,
            price,
            created_date: self.created_date,
        }
    }
}
