//! Order model. Orders are read-only on the admin surface; they are written
//! by the storefront checkout pipeline through the repository.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order placed against a store.
///
/// `products` is a derived, comma-joined summary of the ordered product names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub store_id: String,
    pub phone: String,
    pub address: String,
    pub is_paid: bool,
    pub total_price: Decimal,
    pub products: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for recording a new order. Total price is computed from the
/// referenced products at insert time.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub phone: String,
    pub address: String,
    pub is_paid: bool,
    pub product_ids: Vec<String>,
}
