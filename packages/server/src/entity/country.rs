use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique through the `countries_name_idx` index.
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub name: String,

    #[sea_orm(has_many)]
    pub cities: HasMany<super::city::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
