use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::validate_optional;

/// Request body for creating a user.
#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    /// Contact phone number (at most 256 characters).
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
}

pub fn validate_create_user(payload: &CreateUserRequest) -> Result<(), AppError> {
    validate_optional("Phone", payload.phone.as_deref(), 256)
}

/// A user row.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
}

impl From<crate::entity::user::Model> for UserResponse {
    fn from(m: crate::entity::user::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            phone: m.phone,
        }
    }
}
