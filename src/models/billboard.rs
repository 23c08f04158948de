//! Billboard model: a store's promotional banner, referenced by categories.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A billboard belonging to exactly one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub store_id: String,
    pub label: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a billboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub image_url: String,
}

impl BillboardPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.label.trim().is_empty() {
            return Err(AppError::Validation("Label is required".to_string()));
        }
        if self.label.trim().len() < 4 {
            return Err(AppError::Validation(
                "Label must be at least 4 characters".to_string(),
            ));
        }
        if self.image_url.trim().is_empty() {
            return Err(AppError::Validation("Image URL is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_checked_before_image_url() {
        let payload = BillboardPayload {
            label: String::new(),
            image_url: String::new(),
        };
        let err = payload.validate().unwrap_err();
        assert!(err.message().contains("Label"));
    }

    #[test]
    fn test_short_label_rejected() {
        let payload = BillboardPayload {
            label: "abc".to_string(),
            image_url: "https://x/img.png".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_valid_payload() {
        let payload = BillboardPayload {
            label: "Summer Sale".to_string(),
            image_url: "https://x/img.png".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
