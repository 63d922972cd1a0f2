use common::Popularity;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub name: String,

    pub country_id: Option<i32>,
    #[sea_orm(belongs_to, from = "country_id", to = "id")]
    pub country: HasOne<super::country::Entity>,

    /// Stored as the Postgres enum `popularity`.
    pub popularity: Option<Popularity>,
}

impl ActiveModelBehavior for ActiveModel {}
