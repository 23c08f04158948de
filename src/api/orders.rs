//! Order API endpoints. Read-only: orders are written by the storefront
//! checkout pipeline, the admin surface only inspects them.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{authorize_store, ApiResult};
use crate::auth::CallerId;
use crate::errors::AppError;
use crate::models::Order;
use crate::AppState;

/// GET /api/:storeId/orders - List a store's orders.
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(store_id): Path<String>,
) -> ApiResult<Vec<Order>> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    let orders = state.repo.list_orders(&store.id).await?;
    Ok(Json(orders))
}

/// GET /api/:storeId/orders/:orderId - Get a single order.
pub async fn get_order(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((store_id, order_id)): Path<(String, String)>,
) -> ApiResult<Order> {
    let store = authorize_store(&state, &caller.0, &store_id).await?;

    match state.repo.get_order(&store.id, &order_id).await? {
        Some(order) => Ok(Json(order)),
        None => Err(AppError::NotFound(format!("Order {} not found", order_id))),
    }
}
