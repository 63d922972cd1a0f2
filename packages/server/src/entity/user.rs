use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub full_name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub phone: Option<String>,

    #[sea_orm(has_many)]
    pub stores: HasMany<super::store::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
