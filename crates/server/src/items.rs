//! Item API endpoints

use api_types::item::{Item, ItemDraft};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for listing every item, in insertion order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Item>> {
    Json(state.items.list().await)
}

/// Handle requests for creating a new item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ItemDraft>,
) -> Result<(StatusCode, Json<Item>), ServerError> {
    let item = state
        .items
        .insert(payload)
        .await
        .ok_or(ServerError::IdsExhausted)?;
    tracing::debug!("created item {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handle requests for replacing the content of an item
pub async fn replace(
    Path(id): Path<String>,
    State(state): State<ServerState>,
    Json(payload): Json<ItemDraft>,
) -> Result<Json<Item>, ServerError> {
    match state.items.replace(&id, payload).await {
        Some(item) => Ok(Json(item)),
        None => Err(ServerError::NotFound(id)),
    }
}

/// Handle requests for deleting an item
pub async fn remove(
    Path(id): Path<String>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    match state.items.remove(&id).await {
        Some(_) => {
            tracing::debug!("deleted item {id}");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ServerError::NotFound(id)),
    }
}
