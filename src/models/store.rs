//! Store model: the tenant boundary, owned by exactly one caller.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A store owned by a single caller. Every other entity belongs to a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or renaming a store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePayload {
    #[serde(default)]
    pub name: String,
}

impl StorePayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let payload = StorePayload {
            name: "  ".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_name_accepted() {
        let payload = StorePayload {
            name: "Acme".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
