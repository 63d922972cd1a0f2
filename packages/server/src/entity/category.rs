use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub store_id: i32,
    #[sea_orm(belongs_to, from = "store_id", to = "id")]
    pub store: HasOne<super::store::Entity>,

    pub billboard_id: Option<i32>,
    #[sea_orm(belongs_to, from = "billboard_id", to = "id")]
    pub billboard: HasOne<super::billboard::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub name: String,

    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
