//! Category API endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{authorize_store, ApiResult};
use crate::auth::CallerId;
use crate::errors::AppError;
use crate::models::{Category, CategoryPayload};
use crate::AppState;

/// POST /api/:storeId/categories - Create a new category.
pub async fn create_category(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Category> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let category = state.repo.create_category(&store.id, &payload).await?;
    Ok(Json(category))
}

/// GET /api/:storeId/categories - List a store's categories.
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
) -> ApiResult<Vec<Category>> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let categories = state.repo.list_categories(&store.id).await?;
    Ok(Json(categories))
}

/// GET /api/:storeId/categories/:categoryId - Get a single category.
pub async fn get_category(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, category_id)): Path<(String, String)>,
) -> ApiResult<Category> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    match state.repo.get_category(&store.id, &category_id).await? {
        Some(category) => Ok(Json(category)),
        None => Err(AppError::NotFound(format!(
            "Category {} not found",
            category_id
        ))),
    }
}

/// PATCH /api/:storeId/categories/:categoryId - Update a category.
pub async fn update_category(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, category_id)): Path<(String, String)>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Category> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let category = state
        .repo
        .update_category(&store.id, &category_id, &payload)
        .await?;
    Ok(Json(category))
}

/// DELETE /api/:storeId/categories/:categoryId - Delete a category.
/// Blocked while a product references it.
pub async fn delete_category(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, category_id)): Path<(String, String)>,
) -> ApiResult<Category> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let category = state
        .repo
        .get_category(&store.id, &category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

    state.repo.delete_category(&store.id, &category_id).await?;
    Ok(Json(category))
}
