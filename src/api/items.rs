//! CRUD handlers for catalog items
//!
//! The handlers own everything the repository contract leaves to its
//! caller: id and timestamp generation on create, boundary validation,
//! existence checks before update/delete, and the mapping of absence to
//! 404 and store failures to a generic 500 (diagnostics stay in the logs).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::infrastructure::state::{AppState, PriceLimits};
use crate::models::Item;

/// Transfer shape of an item; a lossless projection of the entity
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Case-insensitive substring filter on the item name
    pub name: Option<String>,
}

fn validate(name: &str, price: Decimal, limits: &PriceLimits) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if !limits.contains(price) {
        return Err(format!(
            "price must be between {} and {}",
            limits.min, limits.max
        ));
    }
    Ok(())
}

fn internal_error(operation: &str, e: DomainError) -> (StatusCode, Json<Value>) {
    tracing::error!("{} failed: {}", operation, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
}

#[utoipa::path(
    get,
    path = "/api/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "All items, optionally filtered by name")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> impl IntoResponse {
    let items = match state.item_repo.list().await {
        Ok(items) => items,
        Err(e) => return internal_error("list items", e).into_response(),
    };

    let mut item_dtos: Vec<ItemDto> = items.into_iter().map(ItemDto::from).collect();

    if let Some(name) = query.name.as_deref().filter(|n| !n.trim().is_empty()) {
        let needle = name.to_lowercase();
        item_dtos.retain(|item| item.name.to_lowercase().contains(&needle));
    }

    tracing::info!("Retrieved {} items", item_dtos.len());

    Json(json!({
        "items": item_dtos,
        "total": item_dtos.len()
    }))
    .into_response()
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.item_repo.get(id).await {
        Ok(Some(item)) => Json(ItemDto::from(item)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("get item", e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Invalid name or price")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(dto): Json<CreateItemDto>,
) -> impl IntoResponse {
    if let Err(msg) = validate(&dto.name, dto.price, &state.price_limits) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response();
    }

    let item = Item {
        id: Uuid::new_v4(),
        name: dto.name,
        description: dto.description,
        price: dto.price,
        created_date: Utc::now(),
    };

    match state.item_repo.create(item.clone()).await {
        Ok(()) => (StatusCode::CREATED, Json(ItemDto::from(item))).into_response(),
        Err(e) => internal_error("create item", e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Invalid name or price"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateItemDto>,
) -> impl IntoResponse {
    if let Err(msg) = validate(&dto.name, dto.price, &state.price_limits) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response();
    }

    let existing = match state.item_repo.get(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return internal_error("update item", e).into_response(),
    };

    let updated = existing.with_update(dto.name, dto.description, dto.price);

    match state.item_repo.update(updated).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error("update item", e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.item_repo.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return internal_error("delete item", e).into_response(),
    }

    match state.item_repo.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error("delete item", e).into_response(),
    }
}
