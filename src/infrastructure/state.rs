//! Application state containing repositories and shared resources

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{ItemRepository, StoreHealth};

/// Price bounds enforced at the API boundary, not by the repository
#[derive(Debug, Clone, Copy)]
pub struct PriceLimits {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceLimits {
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Item repository, selected at composition time
    pub item_repo: Arc<dyn ItemRepository>,
    /// Reachability probe for the backing store
    pub store_health: Arc<dyn StoreHealth>,
    /// Boundary validation limits
    pub price_limits: PriceLimits,
}

impl AppState {
    pub fn new(
        item_repo: Arc<dyn ItemRepository>,
        store_health: Arc<dyn StoreHealth>,
        price_limits: PriceLimits,
    ) -> Self {
        Self {
            item_repo,
            store_health,
            price_limits,
        }
    }
}
