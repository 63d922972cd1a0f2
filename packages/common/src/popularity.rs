use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How well known a city is.
///
/// When the `sea-orm` feature is enabled, this enum maps to the Postgres enum
/// type `popularity` and can be used directly in SeaORM entities.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "Enum", enum_name = "popularity")
)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "unknown"))]
    Unknown,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "known"))]
    Known,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "popular"))]
    Popular,
}

impl Popularity {
    /// Name of the database enum type.
    pub const TYPE_NAME: &'static str = "popularity";

    /// All possible values, in declaration order.
    pub const ALL: &'static [Popularity] = &[Self::Unknown, Self::Known, Self::Popular];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Known => "known",
            Self::Popular => "popular",
        }
    }
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid popularity string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid popularity '{invalid}'. Valid values: unknown, known, popular")]
pub struct ParsePopularityError {
    invalid: String,
}

impl FromStr for Popularity {
    type Err = ParsePopularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "known" => Ok(Self::Known),
            "popular" => Ok(Self::Popular),
            _ => Err(ParsePopularityError {
                invalid: s.to_string(),
            }),
        }
    }
}
