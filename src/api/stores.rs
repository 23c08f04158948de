//! Store API endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{authorize_store, ApiResult};
use crate::auth::CallerId;
use crate::errors::AppError;
use crate::models::{Store, StorePayload};
use crate::ownership;
use crate::AppState;

/// POST /api/stores - Create a new store owned by the caller.
pub async fn create_store(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Json(payload): Json<StorePayload>,
) -> ApiResult<Store> {
    payload.validate()?;

    let store = state.repo.create_store(&caller.0, &payload.name).await?;
    Ok(Json(store))
}

/// GET /api/stores - List the caller's stores.
pub async fn list_stores(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
) -> ApiResult<Vec<Store>> {
    let stores = state.repo.list_stores(&caller.0).await?;
    Ok(Json(stores))
}

/// GET /api/stores/current - Resolve the caller's first store.
pub async fn current_store(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
) -> ApiResult<Store> {
    match ownership::resolve_store(&state.repo, &caller.0, None).await? {
        Some(store) => Ok(Json(store)),
        None => Err(AppError::NotFound(
            "No store found for caller".to_string(),
        )),
    }
}

/// GET /api/stores/:storeId - Get a single store.
pub async fn get_store(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
) -> ApiResult<Store> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    Ok(Json(store))
}

/// PATCH /api/stores/:storeId - Rename a store.
pub async fn update_store(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
    Json(payload): Json<StorePayload>,
) -> ApiResult<Store> {
    authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let store = state
        .repo
        .update_store(&store_id, &caller.0, &payload.name)
        .await?;
    Ok(Json(store))
}

/// DELETE /api/stores/:storeId - Delete a store. Blocked while dependents
/// still belong to it.
pub async fn delete_store(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
) -> ApiResult<Store> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    state.repo.delete_store(&store_id, &caller.0).await?;
    Ok(Json(store))
}
