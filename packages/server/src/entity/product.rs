use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub store_id: i32,
    #[sea_orm(belongs_to, from = "store_id", to = "id")]
    pub store: HasOne<super::store::Entity>,

    pub category_id: i32,
    #[sea_orm(belongs_to, from = "category_id", to = "id")]
    pub category: HasOne<super::category::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((100, 20)))")]
    pub price: Decimal,
    pub is_featured: bool,
    #[sea_orm(default_value = false)]
    pub is_archived: bool,

    pub size_id: i32,
    #[sea_orm(belongs_to, from = "size_id", to = "id")]
    pub size: HasOne<super::size::Entity>,

    pub color_id: i32,
    #[sea_orm(belongs_to, from = "color_id", to = "id")]
    pub color: HasOne<super::color::Entity>,

    #[sea_orm(has_many)]
    pub images: HasMany<super::image::Entity>,
    #[sea_orm(has_many)]
    pub order_items: HasMany<super::order_item::Entity>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
