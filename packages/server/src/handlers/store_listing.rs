use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::user::UserResponse;
use crate::state::AppState;

/// Caller identity for the listing route. A missing or invalid token is a
/// bare 401 with an empty body, not the JSON error body used under `/api/v1`.
pub struct ListingCaller(pub AuthUser);

impl FromRequestParts<AppState> for ListingCaller {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state)
            .await
            .map(ListingCaller)
            .map_err(|_| StatusCode::UNAUTHORIZED)
    }
}

#[utoipa::path(
    post,
    path = "/store",
    tag = "Store",
    operation_id = "listStoreUsers",
    summary = "List all users",
    description = "Authenticates the caller, parses the JSON body (any object is accepted and otherwise ignored) and returns every user. Performs a single read of the users table and no writes. A body that is not valid JSON is treated like any other unexpected failure.",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Missing or invalid token, empty body"),
        (status = 500, description = "Unexpected failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state, body), fields(subject = %caller.0.subject))]
pub async fn list_store_users(
    caller: ListingCaller,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let _payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Failed to parse request body: {e}")))?;

    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
