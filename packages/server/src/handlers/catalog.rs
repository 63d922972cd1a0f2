//! Store-scoped catalog resources: categories, billboards, sizes and colors.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{billboard, category, color, size};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::handlers::store::{ensure_in_store, find_store};
use crate::models::catalog::*;
use crate::query;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/stores/{store_id}/categories",
    tag = "Categories",
    operation_id = "listCategories",
    summary = "List a store's categories",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Categories", body = [CategoryResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn list_categories(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    find_store(&state.db, store_id).await?;
    let rows = query::in_store::<category::Entity>(store_id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(CategoryResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/stores/{store_id}/categories",
    tag = "Categories",
    operation_id = "createCategory",
    summary = "Create a category",
    description = "Creates a category in the store. If `billboard_id` is given it must refer to a billboard of the same store.",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, name = %payload.name))]
pub async fn create_category(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_category(&payload)?;
    find_store(&state.db, store_id).await?;
    if let Some(billboard_id) = payload.billboard_id {
        ensure_in_store::<billboard::Entity, _>(&state.db, store_id, billboard_id, "Billboard")
            .await?;
    }

    let model = category::ActiveModel {
        store_id: Set(store_id),
        billboard_id: Set(payload.billboard_id),
        name: Set(payload.name.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/billboards",
    tag = "Billboards",
    operation_id = "listBillboards",
    summary = "List a store's billboards",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Billboards", body = [BillboardResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn list_billboards(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<Vec<BillboardResponse>>, AppError> {
    find_store(&state.db, store_id).await?;
    let rows = query::in_store::<billboard::Entity>(store_id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(BillboardResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/stores/{store_id}/billboards",
    tag = "Billboards",
    operation_id = "createBillboard",
    summary = "Create a billboard",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateBillboardRequest,
    responses(
        (status = 201, description = "Billboard created", body = BillboardResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, label = %payload.label))]
pub async fn create_billboard(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateBillboardRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_billboard(&payload)?;
    find_store(&state.db, store_id).await?;
    if let Some(category_id) = payload.category_id {
        ensure_in_store::<category::Entity, _>(&state.db, store_id, category_id, "Category")
            .await?;
    }

    let model = billboard::ActiveModel {
        store_id: Set(store_id),
        label: Set(payload.label.trim().to_string()),
        image_url: Set(payload.image_url.trim().to_string()),
        category_id: Set(payload.category_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(BillboardResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/sizes",
    tag = "Sizes",
    operation_id = "listSizes",
    summary = "List a store's sizes",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Sizes", body = [VariantResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn list_sizes(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<Vec<VariantResponse>>, AppError> {
    find_store(&state.db, store_id).await?;
    let rows = query::in_store::<size::Entity>(store_id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(VariantResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/stores/{store_id}/sizes",
    tag = "Sizes",
    operation_id = "createSize",
    summary = "Create a size",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateSizeRequest,
    responses(
        (status = 201, description = "Size created", body = VariantResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, name = %payload.name))]
pub async fn create_size(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateSizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_size(&payload)?;
    find_store(&state.db, store_id).await?;

    let model = size::ActiveModel {
        store_id: Set(store_id),
        name: Set(payload.name.trim().to_string()),
        value: Set(payload.value.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(VariantResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/colors",
    tag = "Colors",
    operation_id = "listColors",
    summary = "List a store's colors",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Colors", body = [VariantResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn list_colors(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<Vec<VariantResponse>>, AppError> {
    find_store(&state.db, store_id).await?;
    let rows = query::in_store::<color::Entity>(store_id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(VariantResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/stores/{store_id}/colors",
    tag = "Colors",
    operation_id = "createColor",
    summary = "Create a color",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateColorRequest,
    responses(
        (status = 201, description = "Color created", body = VariantResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, name = %payload.name))]
pub async fn create_color(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateColorRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_color(&payload)?;
    find_store(&state.db, store_id).await?;

    let model = color::ActiveModel {
        store_id: Set(store_id),
        name: Set(payload.name.trim().to_string()),
        value: Set(payload.value.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(VariantResponse::from(model))))
}
