use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub store_id: i32,
    #[sea_orm(belongs_to, from = "store_id", to = "id")]
    pub store: HasOne<super::store::Entity>,

    #[sea_orm(has_many)]
    pub order_items: HasMany<super::order_item::Entity>,

    #[sea_orm(default_value = false)]
    pub is_paid: bool,
    #[sea_orm(column_type = "String(StringLen::N(32))", default_value = "")]
    pub phone: String,
    #[sea_orm(column_type = "String(StringLen::N(64))", default_value = "")]
    pub address: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
