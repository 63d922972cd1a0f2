use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "billboards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub store_id: i32,
    #[sea_orm(belongs_to, from = "store_id", to = "id")]
    pub store: HasOne<super::store::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub label: String,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub image_url: String,

    /// Back-edge to `categories`. The foreign key closes a cycle with
    /// `categories.billboard_id`, so it is added by `schema::ensure_foreign_keys`
    /// after both tables exist rather than declared as a relation here.
    pub category_id: Option<i32>,

    #[sea_orm(has_many)]
    pub categories: HasMany<super::category::Entity>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
