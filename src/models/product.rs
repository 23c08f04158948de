//! Product model with its ordered image collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A single product image. Order within the collection is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
}

/// A product belonging to one store.
///
/// `color_id` and `size_id` are opaque references; color and size management
/// lives outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub price: Decimal,
    pub category_id: String,
    pub color_id: String,
    pub size_id: String,
    pub images: Vec<ProductImage>,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub color_id: String,
    #[serde(default)]
    pub size_id: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
}

/// Query filters for the product list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_archived: Option<bool>,
}

impl ProductPayload {
    /// Field checks in a fixed order so the first failing field is
    /// deterministic: name, images, price, category, color, size.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.images.is_empty() {
            return Err(AppError::Validation("Images are required".to_string()));
        }
        if self.images.iter().any(|image| image.url.trim().is_empty()) {
            return Err(AppError::Validation(
                "Image URLs must not be empty".to_string(),
            ));
        }
        match self.price {
            None => return Err(AppError::Validation("Price is required".to_string())),
            Some(price) if price < Decimal::ZERO => {
                return Err(AppError::Validation(
                    "Price must not be negative".to_string(),
                ));
            }
            Some(_) => {}
        }
        if self.category_id.trim().is_empty() {
            return Err(AppError::Validation("Category id is required".to_string()));
        }
        if self.color_id.trim().is_empty() {
            return Err(AppError::Validation("Color id is required".to_string()));
        }
        if self.size_id.trim().is_empty() {
            return Err(AppError::Validation("Size id is required".to_string()));
        }
        Ok(())
    }

    /// Validated price; zero until `validate` has passed.
    pub fn price(&self) -> Decimal {
        self.price.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ProductPayload {
        ProductPayload {
            name: "Running Shoe".to_string(),
            price: Some(Decimal::new(4999, 2)),
            category_id: "cat-1".to_string(),
            color_id: "color-1".to_string(),
            size_id: "size-1".to_string(),
            images: vec![ProductImage {
                url: "https://x/shoe.png".to_string(),
            }],
            is_featured: false,
            is_archived: false,
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(full_payload().validate().is_ok());
    }

    #[test]
    fn test_name_fails_first() {
        let payload = ProductPayload {
            name: String::new(),
            images: Vec::new(),
            price: None,
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Name is required");
    }

    #[test]
    fn test_images_fail_before_price() {
        let payload = ProductPayload {
            images: Vec::new(),
            price: None,
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Images are required");
    }

    #[test]
    fn test_price_fails_before_category() {
        let payload = ProductPayload {
            price: None,
            category_id: String::new(),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Price is required");
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload = ProductPayload {
            price: Some(Decimal::new(-1, 0)),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Price must not be negative");
    }

    #[test]
    fn test_zero_price_allowed() {
        let payload = ProductPayload {
            price: Some(Decimal::ZERO),
            ..full_payload()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_category_before_color_before_size() {
        let payload = ProductPayload {
            category_id: String::new(),
            color_id: String::new(),
            size_id: String::new(),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Category id is required");

        let payload = ProductPayload {
            color_id: String::new(),
            size_id: String::new(),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Color id is required");

        let payload = ProductPayload {
            size_id: String::new(),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.message(), "Size id is required");
    }
}
