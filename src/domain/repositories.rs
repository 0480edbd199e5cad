//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::DomainError;
use crate::models::Item;

/// Repository trait for the Item entity
///
/// Absence is a normal outcome: `get` returns `Ok(None)` for an unknown id.
/// Callers generate fresh ids before `create` and existence-check before
/// `update`/`delete`; violating either is implementation-defined (both
/// backends in this crate are silent about it).
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find a single item by id
    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError>;

    /// Find all items; ordering is stable between mutations within one
    /// repository instance
    async fn list(&self) -> Result<Vec<Item>, DomainError>;

    /// Store a new item; the caller guarantees the id is fresh
    async fn create(&self, item: Item) -> Result<(), DomainError>;

    /// Replace the stored item sharing `item.id` with the given value
    async fn update(&self, item: Item) -> Result<(), DomainError>;

    /// Remove the item with the given id
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Outcome of a store reachability probe
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub healthy: bool,
    pub message: Option<String>,
    pub duration: Duration,
}

/// Reachability probe for the backing store
///
/// `ping` must answer in bounded time against the live connection; the
/// caller wraps it in a timeout. This is the only externally observable
/// signal of store connectivity.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> HealthReport;
}
