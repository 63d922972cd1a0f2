//! Countries and their cities. Not store-scoped.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{city, country};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::geography::*;
use crate::state::AppState;

async fn find_country<C: ConnectionTrait>(db: &C, country_id: i32) -> Result<country::Model, AppError> {
    country::Entity::find_by_id(country_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Country {country_id} not found")))
}

#[utoipa::path(
    post,
    path = "/countries",
    tag = "Geography",
    operation_id = "createCountry",
    summary = "Create a country",
    request_body = CreateCountryRequest,
    responses(
        (status = 201, description = "Country created", body = CountryResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Country name already exists (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(name = %payload.name))]
pub async fn create_country(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCountryRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_country(&payload)?;

    let model = country::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(CountryResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/countries",
    tag = "Geography",
    operation_id = "listCountries",
    summary = "List countries",
    responses(
        (status = 200, description = "All countries", body = [CountryResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state))]
pub async fn list_countries(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    let rows = country::Entity::find()
        .order_by_asc(country::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(CountryResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/countries/{country_id}/cities",
    tag = "Geography",
    operation_id = "createCity",
    summary = "Create a city",
    params(("country_id" = i32, Path, description = "Country ID")),
    request_body = CreateCityRequest,
    responses(
        (status = 201, description = "City created", body = CityResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Country not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state, payload), fields(country_id, name = %payload.name))]
pub async fn create_city(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
    AppJson(payload): AppJson<CreateCityRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_city(&payload)?;
    find_country(&state.db, country_id).await?;

    let model = city::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        country_id: Set(Some(country_id)),
        popularity: Set(payload.popularity),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(AppError::from_write)?;

    Ok((StatusCode::CREATED, Json(CityResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/countries/{country_id}/cities",
    tag = "Geography",
    operation_id = "listCities",
    summary = "List a country's cities",
    params(("country_id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Cities", body = [CityResponse]),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Country not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_auth_user, state), fields(country_id))]
pub async fn list_cities(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<Json<Vec<CityResponse>>, AppError> {
    let country = find_country(&state.db, country_id).await?;
    let rows = country
        .find_related(city::Entity)
        .order_by_asc(city::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(CityResponse::from).collect()))
}
