//! REST API module.
//!
//! Contains all API routes and handlers. Every store-scoped handler follows
//! the same lifecycle: resolve ownership, validate the payload, persist,
//! translate the outcome.

mod billboards;
mod categories;
mod orders;
mod products;
mod stores;

pub use billboards::*;
pub use categories::*;
pub use orders::*;
pub use products::*;
pub use stores::*;

use axum::Json;

use crate::errors::AppError;
use crate::models::Store;
use crate::ownership;
use crate::AppState;

/// Response type: the entity's JSON representation on success, a uniform
/// error body otherwise.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Resolve the caller's store or refuse the request.
///
/// A store that does not exist and a store owned by a different caller are
/// indistinguishable here; both refuse with `Unauthorized`.
pub(crate) async fn authorize_store(
    state: &AppState,
    caller_id: &str,
    store_id: &str,
) -> Result<Store, AppError> {
    match ownership::resolve_store(&state.repo, caller_id, Some(store_id)).await? {
        Some(store) => Ok(store),
        None => Err(AppError::Unauthorized(
            "Caller does not own this store".to_string(),
        )),
    }
}
