use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{category, color, image, order_item, product, size};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::handlers::store::{ensure_in_store, find_store};
use crate::models::product::*;
use crate::query;
use crate::state::AppState;

async fn find_product<C: ConnectionTrait>(
    db: &C,
    store_id: i32,
    product_id: i32,
) -> Result<product::Model, AppError> {
    query::find_in_store::<product::Entity, _>(db, store_id, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))
}

#[utoipa::path(
    post,
    path = "/stores/{store_id}/products",
    tag = "Products",
    operation_id = "createProduct",
    summary = "Create a product",
    description = "Creates a product together with its images. Category, size and color must belong to the same store.",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, name = %payload.name))]
pub async fn create_product(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_product(&payload)?;

    let txn = state.db.begin().await?;
    find_store(&txn, store_id).await?;

    ensure_in_store::<category::Entity, _>(&txn, store_id, payload.category_id, "Category")
        .await?;
    ensure_in_store::<size::Entity, _>(&txn, store_id, payload.size_id, "Size").await?;
    ensure_in_store::<color::Entity, _>(&txn, store_id, payload.color_id, "Color").await?;

    let model = product::ActiveModel {
        store_id: Set(store_id),
        category_id: Set(payload.category_id),
        size_id: Set(payload.size_id),
        color_id: Set(payload.color_id),
        name: Set(payload.name.trim().to_string()),
        price: Set(payload.price),
        is_featured: Set(payload.is_featured.unwrap_or(false)),
        is_archived: Set(payload.is_archived.unwrap_or(false)),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(AppError::from_write)?;

    let mut images = Vec::with_capacity(payload.images.len());
    for url in payload.images {
        let row = image::ActiveModel {
            product_id: Set(model.id),
            url: Set(url.trim().to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(AppError::from_write)?;
        images.push(row);
    }

    txn.commit().await?;

    tracing::info!(product_id = model.id, images = images.len(), "Product created");
    Ok((StatusCode::CREATED, Json(ProductResponse::new(model, images))))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/products",
    tag = "Products",
    operation_id = "listProducts",
    summary = "List a store's products",
    description = "Archived products are excluded unless `include_archived=true`.",
    params(("store_id" = i32, Path, description = "Store ID"), ProductListQuery),
    responses(
        (status = 200, description = "Products with their images", body = [ProductResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, filter), fields(store_id))]
pub async fn list_products(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    Query(filter): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    find_store(&state.db, store_id).await?;

    let mut select = query::in_store::<product::Entity>(store_id);
    if let Some(category_id) = filter.category_id {
        select = select.filter(product::Column::CategoryId.eq(category_id));
    }
    if let Some(size_id) = filter.size_id {
        select = select.filter(product::Column::SizeId.eq(size_id));
    }
    if let Some(color_id) = filter.color_id {
        select = select.filter(product::Column::ColorId.eq(color_id));
    }
    if let Some(is_featured) = filter.is_featured {
        select = select.filter(product::Column::IsFeatured.eq(is_featured));
    }
    if !filter.include_archived.unwrap_or(false) {
        select = select.filter(product::Column::IsArchived.eq(false));
    }

    let rows = select
        .find_with_related(image::Entity)
        .order_by_asc(image::Column::Id)
        .all(&state.db)
        .await?;

    let data = rows
        .into_iter()
        .map(|(p, images)| ProductResponse::new(p, images))
        .collect();
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/products/{product_id}",
    tag = "Products",
    operation_id = "getProduct",
    summary = "Get a product",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product with its images", body = ProductResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id, product_id))]
pub async fn get_product(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<ProductResponse>, AppError> {
    let model = find_product(&state.db, store_id, product_id).await?;
    let images = model
        .find_related(image::Entity)
        .order_by_asc(image::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(ProductResponse::new(model, images)))
}

#[utoipa::path(
    delete,
    path = "/stores/{store_id}/products/{product_id}",
    tag = "Products",
    operation_id = "deleteProduct",
    summary = "Delete a product",
    description = "Deletes the product. Its images are removed by the database cascade. Returns 400 if the product is part of an order.",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Product is referenced by an order (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id, product_id))]
pub async fn delete_product(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let txn = state.db.begin().await?;
    find_product(&txn, store_id, product_id).await?;

    let ordered = order_item::Entity::find()
        .filter(order_item::Column::ProductId.eq(product_id))
        .count(&txn)
        .await?;
    if ordered > 0 {
        return Err(AppError::Validation(format!(
            "Product {product_id} is part of {ordered} order(s)"
        )));
    }

    product::Entity::delete_by_id(product_id)
        .exec(&txn)
        .await
        .map_err(AppError::from_delete)?;
    txn.commit().await?;

    tracing::info!(product_id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
