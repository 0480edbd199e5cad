pub mod health;
pub mod items;

use axum::{
    routing::get,
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        // Items
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .with_state(state)
}
