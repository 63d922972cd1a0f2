use common::Popularity;
use serde::{Deserialize, Serialize};

use crate::entity::{city, country};
use crate::error::AppError;

use super::shared::validate_required;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCountryRequest {
    /// Country name, unique across all countries.
    #[schema(example = "Portugal")]
    pub name: String,
}

pub fn validate_create_country(payload: &CreateCountryRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CountryResponse {
    pub id: i32,
    pub name: String,
}

impl From<country::Model> for CountryResponse {
    fn from(m: country::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCityRequest {
    #[schema(example = "Porto")]
    pub name: String,
    pub popularity: Option<Popularity>,
}

pub fn validate_create_city(payload: &CreateCityRequest) -> Result<(), AppError> {
    validate_required("Name", &payload.name, 256)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub country_id: Option<i32>,
    pub popularity: Option<Popularity>,
}

impl From<city::Model> for CityResponse {
    fn from(m: city::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country_id: m.country_id,
            popularity: m.popularity,
        }
    }
}
