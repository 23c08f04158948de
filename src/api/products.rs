//! Product API endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use super::{authorize_store, ApiResult};
use crate::auth::CallerId;
use crate::errors::AppError;
use crate::models::{Product, ProductFilter, ProductPayload};
use crate::AppState;

/// POST /api/:storeId/products - Create a new product with its images.
pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Product> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let product = state.repo.create_product(&store.id, &payload).await?;
    Ok(Json(product))
}

/// GET /api/:storeId/products - List a store's products.
///
/// Supports `categoryId`, `isFeatured`, and `isArchived` query filters.
pub async fn list_products(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
    Query(filter): Query<ProductFilter>,
) -> ApiResult<Vec<Product>> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let products = state.repo.list_products(&store.id, &filter).await?;
    Ok(Json(products))
}

/// GET /api/:storeId/products/:productId - Get a single product.
pub async fn get_product(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, product_id)): Path<(String, String)>,
) -> ApiResult<Product> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    match state.repo.get_product(&store.id, &product_id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::NotFound(format!(
            "Product {} not found",
            product_id
        ))),
    }
}

/// PATCH /api/:storeId/products/:productId - Update a product, replacing its
/// image collection.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, product_id)): Path<(String, String)>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Product> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;
    payload.validate()?;

    let product = state
        .repo
        .update_product(&store.id, &product_id, &payload)
        .await?;
    Ok(Json(product))
}

/// DELETE /api/:storeId/products/:productId - Delete a product. Blocked
/// while an order item references it.
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, product_id)): Path<(String, String)>,
) -> ApiResult<Product> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let product = state
        .repo
        .get_product(&store.id, &product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

    state.repo.delete_product(&store.id, &product_id).await?;
    Ok(Json(product))
}
