use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{billboard, category, color, size};
use crate::error::AppError;

use super::shared::validate_required;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Shirts")]
    pub name: String,
    /// Billboard shown on the category page.
    pub billboard_id: Option<i32>,
}

pub fn validate_create_category(payload: &CreateCategoryRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub store_id: i32,
    pub billboard_id: Option<i32>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<category::Model> for CategoryResponse {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            billboard_id: m.billboard_id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBillboardRequest {
    #[schema(example = "Summer sale")]
    pub label: String,
    #[schema(example = "https://cdn.example.com/summer.png")]
    pub image_url: String,
    pub category_id: Option<i32>,
}

pub fn validate_create_billboard(payload: &CreateBillboardRequest) -> Result<(), AppError> {
    validate_required("Label", &payload.label, 256)?;
    validate_required("Image URL", &payload.image_url, 256)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BillboardResponse {
    pub id: i32,
    pub store_id: i32,
    pub label: String,
    pub image_url: String,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<billboard::Model> for BillboardResponse {
    fn from(m: billboard::Model) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            label: m.label,
            image_url: m.image_url,
            category_id: m.category_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSizeRequest {
    #[schema(example = "Extra large")]
    pub name: String,
    #[schema(example = "XL")]
    pub value: String,
}

pub fn validate_create_size(payload: &CreateSizeRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)?;
    validate_required("Value", &payload.value, 256)
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateColorRequest {
    #[schema(example = "Navy")]
    pub name: String,
    /// Free-form color value, usually a hex code.
    #[schema(example = "#1e40af")]
    pub value: String,
}

pub fn validate_create_color(payload: &CreateColorRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)?;
    validate_required("Value", &payload.value, 256)
}

/// A size or a color; both share the same shape.
#[derive(Serialize, utoipa::ToSchema)]
pub struct VariantResponse {
    pub id: i32,
    pub store_id: i32,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<size::Model> for VariantResponse {
    fn from(m: size::Model) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            name: m.name,
            value: m.value,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<color::Model> for VariantResponse {
    fn from(m: color::Model) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            name: m.name,
            value: m.value,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
