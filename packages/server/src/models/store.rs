use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::validate_required;

/// Request body for creating a store.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateStoreRequest {
    /// Store name (1-256 characters).
    #[schema(example = "Main Street Outfitters")]
    pub name: String,
    /// Owning user.
    #[schema(example = 1)]
    pub user_id: i32,
}

pub fn validate_create_store(payload: &CreateStoreRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct StoreListQuery {
    /// Only stores owned by this user.
    pub user_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StoreResponse {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<crate::entity::store::Model> for StoreResponse {
    fn from(m: crate::entity::store::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            user_id: m.user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A store together with how many rows each store-scoped table holds for it.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StoreSummaryResponse {
    pub store: StoreResponse,
    /// Row count per child table, keyed by table name.
    #[schema(example = json!({"products": 12, "orders": 3}))]
    pub counts: BTreeMap<String, i64>,
}
