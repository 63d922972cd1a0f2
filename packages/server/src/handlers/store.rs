use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::store;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::store::*;
use crate::query;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/stores",
    tag = "Stores",
    operation_id = "createStore",
    summary = "Create a store",
    description = "Creates a store owned by an existing user. Returns 400 if the user does not exist.",
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created", body = StoreResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(name = %payload.name))]
pub async fn create_store(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_store(&payload)?;

    let new_store = store::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        user_id: Set(payload.user_id),
        ..Default::default()
    };

    let model = new_store
        .insert(&state.db)
        .await
        .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(StoreResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/stores",
    tag = "Stores",
    operation_id = "listStores",
    summary = "List stores",
    params(StoreListQuery),
    responses(
        (status = 200, description = "Stores, ordered by ID", body = [StoreResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, query))]
pub async fn list_stores(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<StoreListQuery>,
) -> Result<Json<Vec<StoreResponse>>, AppError> {
    let mut select = store::Entity::find();
    if let Some(user_id) = query.user_id {
        select = select.filter(store::Column::UserId.eq(user_id));
    }

    let stores = select
        .order_by_asc(store::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(stores.into_iter().map(StoreResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}",
    tag = "Stores",
    operation_id = "getStore",
    summary = "Get a store by ID",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store details", body = StoreResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn get_store(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<StoreResponse>, AppError> {
    let model = find_store(&state.db, store_id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/summary",
    tag = "Stores",
    operation_id = "getStoreSummary",
    summary = "Count a store's rows per table",
    description = "Returns the store and, for every table that references it, how many rows belong to the store.",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store summary", body = StoreSummaryResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn get_store_summary(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<StoreSummaryResponse>, AppError> {
    let model = find_store(&state.db, store_id).await?;
    let counts = query::count_children(&state.db, "stores", store_id).await?;

    Ok(Json(StoreSummaryResponse {
        store: model.into(),
        counts: counts
            .into_iter()
            .map(|(table, n)| (table.to_string(), n))
            .collect(),
    }))
}

/// Load a store or fail with `NOT_FOUND`.
pub(crate) async fn find_store<C: ConnectionTrait>(
    db: &C,
    store_id: i32,
) -> Result<store::Model, AppError> {
    store::Entity::find_by_id(store_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Store {store_id} not found")))
}

/// Reject a reference to a row of `E` that lives outside `store_id`.
pub(crate) async fn ensure_in_store<E, C>(
    db: &C,
    store_id: i32,
    id: i32,
    what: &str,
) -> Result<(), AppError>
where
    E: query::StoreScoped,
    C: ConnectionTrait,
{
    match query::find_in_store::<E, _>(db, store_id, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Validation(format!(
            "{what} {id} does not belong to store {store_id}"
        ))),
    }
}
