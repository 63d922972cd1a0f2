use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{order, order_item, product};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::handlers::store::find_store;
use crate::models::order::*;
use crate::models::shared::trimmed;
use crate::query;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/stores/{store_id}/orders",
    tag = "Orders",
    operation_id = "createOrder",
    summary = "Create an order",
    description = "Creates an order and one order item per product. Every product must belong to the store.",
    params(("store_id" = i32, Path, description = "Store ID")),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(store_id, items = payload.product_ids.len()))]
pub async fn create_order(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_order(&payload)?;

    let txn = state.db.begin().await?;
    find_store(&txn, store_id).await?;

    let found = query::in_store::<product::Entity>(store_id)
        .filter(product::Column::Id.is_in(payload.product_ids.clone()))
        .all(&txn)
        .await?;
    if found.len() != payload.product_ids.len() {
        let missing: Vec<String> = payload
            .product_ids
            .iter()
            .filter(|id| !found.iter().any(|p| p.id == **id))
            .map(|id| id.to_string())
            .collect();
        return Err(AppError::Validation(format!(
            "Products not in store {store_id}: {}",
            missing.join(", ")
        )));
    }

    let mut new_order = order::ActiveModel {
        store_id: Set(store_id),
        ..Default::default()
    };
    // Unset columns fall back to the column defaults.
    if let Some(is_paid) = payload.is_paid {
        new_order.is_paid = Set(is_paid);
    }
    if let Some(phone) = trimmed(payload.phone) {
        new_order.phone = Set(phone);
    }
    if let Some(address) = trimmed(payload.address) {
        new_order.address = Set(address);
    }
    let model = new_order.insert(&txn).await.map_err(AppError::from_write)?;

    let mut items = Vec::with_capacity(payload.product_ids.len());
    for product_id in payload.product_ids {
        let item = order_item::ActiveModel {
            order_id: Set(model.id),
            product_id: Set(product_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(AppError::from_write)?;
        items.push(item);
    }

    txn.commit().await?;

    tracing::info!(order_id = model.id, items = items.len(), "Order created");
    Ok((StatusCode::CREATED, Json(OrderResponse::new(model, items))))
}

#[utoipa::path(
    get,
    path = "/stores/{store_id}/orders",
    tag = "Orders",
    operation_id = "listOrders",
    summary = "List a store's orders",
    params(("store_id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Orders with their items", body = [OrderResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Store not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(store_id))]
pub async fn list_orders(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(store_id): Path<i32>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    find_store(&state.db, store_id).await?;

    let rows = query::in_store::<order::Entity>(store_id)
        .find_with_related(order_item::Entity)
        .order_by_asc(order_item::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(o, items)| OrderResponse::new(o, items))
            .collect(),
    ))
}
