use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{image, product};
use crate::error::AppError;

use super::shared::validate_required;

/// Maximum number of images attached to one product.
pub const MAX_IMAGES: usize = 20;

/// Fractional digits the `price` column keeps; more would be rounded away.
pub const PRICE_SCALE: u32 = 20;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Oxford shirt")]
    pub name: String,
    /// Decimal price, sent as a string to keep precision.
    #[schema(value_type = String, example = "49.99")]
    pub price: Decimal,
    pub category_id: i32,
    pub size_id: i32,
    pub color_id: i32,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
    /// Image URLs, stored in order.
    #[serde(default)]
    pub images: Vec<String>,
}

pub fn validate_create_product(payload: &CreateProductRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)?;
    if payload.price.is_sign_negative() {
        return Err(AppError::Validation("Price must not be negative".into()));
    }
    if payload.price.normalize().scale() > PRICE_SCALE {
        return Err(AppError::Validation(format!(
            "Price must have at most {PRICE_SCALE} decimal places"
        )));
    }
    if payload.images.len() > MAX_IMAGES {
        return Err(AppError::Validation(format!(
            "Too many images: max {MAX_IMAGES}"
        )));
    }
    for url in &payload.images {
        validate_required("Image URL", url, 256)?;
    }
    Ok(())
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProductListQuery {
    pub category_id: Option<i32>,
    pub size_id: Option<i32>,
    pub color_id: Option<i32>,
    pub is_featured: Option<bool>,
    /// Archived products are hidden unless this is `true`.
    pub include_archived: Option<bool>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ImageResponse {
    pub id: i32,
    pub url: String,
}

impl From<image::Model> for ImageResponse {
    fn from(m: image::Model) -> Self {
        Self { id: m.id, url: m.url }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub store_id: i32,
    pub category_id: i32,
    pub size_id: i32,
    pub color_id: i32,
    pub name: String,
    #[schema(value_type = String, example = "49.99")]
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductResponse {
    pub fn new(m: product::Model, images: Vec<image::Model>) -> Self {
        Self {
            id: m.id,
            store_id: m.store_id,
            category_id: m.category_id,
            size_id: m.size_id,
            color_id: m.color_id,
            name: m.name,
            // numeric(100, 20) comes back padded with trailing zeros
            price: m.price.normalize(),
            is_featured: m.is_featured,
            is_archived: m.is_archived,
            images: images.into_iter().map(ImageResponse::from).collect(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
