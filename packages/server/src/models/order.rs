use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{order, order_item};
use crate::error::AppError;

use super::shared::{validate_bulk_ids, validate_optional};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateOrderRequest {
    /// Products in the order, each at most once.
    #[schema(example = json!([3, 5]))]
    pub product_ids: Vec<i32>,
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,
    #[schema(example = "1 Main St")]
    pub address: Option<String>,
    pub is_paid: Option<bool>,
}

pub fn validate_create_order(payload: &CreateOrderRequest) -> Result<(), AppError> {
    validate_bulk_ids(&payload.product_ids, "product_ids", 100)?;
    validate_optional("Phone", payload.phone.as_deref(), 32)?;
    validate_optional("Address", payload.address.as_deref(), 64)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_id: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub store_id: i32,
    pub is_paid: bool,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderResponse {
    pub fn new(m: order::Model, items: Vec<order_item::Model>) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            is_paid: m.is_paid,
            phone: m.phone,
            address: m.address,
            items: items
                .into_iter()
                .map(|i| OrderItemResponse {
                    id: i.id,
                    product_id: i.product_id,
                })
                .collect(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
