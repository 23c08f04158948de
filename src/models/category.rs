//! Category model: groups a store's products under a billboard.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A category belonging to one store, pointing at a billboard in that store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub billboard_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub billboard_id: String,
}

impl CategoryPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.name.trim().len() < 4 {
            return Err(AppError::Validation(
                "Name must be at least 4 characters".to_string(),
            ));
        }
        if self.billboard_id.trim().is_empty() {
            return Err(AppError::Validation("Billboard id is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_checked_before_billboard_id() {
        let payload = CategoryPayload {
            name: "abc".to_string(),
            billboard_id: String::new(),
        };
        let err = payload.validate().unwrap_err();
        assert!(err.message().contains("Name"));
    }

    #[test]
    fn test_valid_payload() {
        let payload = CategoryPayload {
            name: "Shoes".to_string(),
            billboard_id: "some-billboard".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
