//! Billboard API endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{authorize_store, ApiResult};
use crate::auth::CallerId;
use crate::errors::AppError;
use crate::models::{Billboard, BillboardPayload};
use crate::AppState;

/// POST /api/:storeId/billboards - Create a new billboard.
pub async fn create_billboard(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
    Json(payload): Json<BillboardPayload>,
) -> ApiResult<Billboard> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let billboard = state.repo.create_billboard(&store.id, &payload).await?;
    Ok(Json(billboard))
}

/// GET /api/:storeId/billboards - List a store's billboards.
pub async fn list_billboards(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
) -> ApiResult<Vec<Billboard>> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let billboards = state.repo.list_billboards(&store.id).await?;
    Ok(Json(billboards))
}

/// GET /api/:storeId/billboards/:billboardId - Get a single billboard.
pub async fn get_billboard(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, billboard_id)): Path<(String, String)>,
) -> ApiResult<Billboard> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    match state.repo.get_billboard(&store.id, &billboard_id).await? {
        Some(billboard) => Ok(Json(billboard)),
        None => Err(AppError::NotFound(format!(
            "Billboard {} not found",
            billboard_id
        ))),
    }
}

/// PATCH /api/:storeId/billboards/:billboardId - Update a billboard.
pub async fn update_billboard(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, billboard_id)): Path<(String, String)>,
    Json(payload): Json<BillboardPayload>,
) -> ApiResult<Billboard> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let billboard = state
        .repo
        .update_billboard(&store.id, &billboard_id, &payload)
        .await?;
    Ok(Json(billboard))
}

/// DELETE /api/:storeId/billboards/:billboardId - Delete a billboard.
/// Blocked while a category references it.
pub async fn delete_billboard(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, billboard_id)): Path<(String, String)>,
) -> ApiResult<Billboard> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let billboard = state
        .repo
        .get_billboard(&store.id, &billboard_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Billboard {} not found", billboard_id)))?;

    state.repo.delete_billboard(&store.id, &billboard_id).await?;
    Ok(Json(billboard))
}
