//! In-memory implementation of ItemRepository
//!
//! Backs the contract with an insertion-ordered `Vec` behind a single
//! `RwLock`, so structural mutations are serialized and readers never see
//! a torn collection. State vanishes with the process; this backend exists
//! for development and as the reference implementation the contract
//! conformance tests run against.

use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{DomainError, HealthReport, ItemRepository, StoreHealth};
use crate::models::Item;

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn create(&self, item: Item) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        items.push(item);
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        // Replace in place to keep the entry's position in iteration order;
        // a missing id is a silent no-op
        if let Some(pos) = items.iter().position(|existing| existing.id == item.id) {
            items[pos] = item;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        // Positional removal; entries after the removed one shift
        if let Some(pos) = items.iter().position(|existing| existing.id == id) {
            items.remove(pos);
        }
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for InMemoryItemRepository {
    async fn ping(&self) -> HealthReport {
        let start = Instant::now();
        // The collection is process-local, reachability never fails
        let _ = self.items.read().await;
        HealthReport {
            healthy: true,
            message: Some("in-memory".to_string()),
            duration: start.elapsed(),
        }
    }
}
