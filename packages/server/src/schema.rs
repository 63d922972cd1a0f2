//! Explicit registry of the persisted schema.
//!
//! The entities in [`crate::entity`] are what SeaORM syncs into the database.
//! This registry restates the same tables as plain data (columns, foreign-key
//! edges and named indexes) so that join resolution and per-store queries can
//! be built from it, and so the pieces schema-sync cannot express (the enum
//! type, named indexes, the cyclic billboard → category edge) are applied from
//! one place.

use common::Popularity;
use sea_orm::sea_query::{
    Alias, ForeignKey, ForeignKeyAction, Index, PostgresQueryBuilder, SchemaStatementBuilder,
};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, Statement};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Auto-incrementing integer primary key.
    Serial,
    Integer,
    Text,
    Varchar(u32),
    Numeric { precision: u32, scale: u32 },
    Boolean,
    Timestamp,
    /// A Postgres enum type, by name.
    Enum(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnDefault {
    Now,
    Bool(bool),
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
}

impl ColumnSpec {
    const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            default: None,
        }
    }

    const fn null(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    const fn default(self, default: ColumnDefault) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnDelete {
    NoAction,
    Cascade,
}

/// A foreign-key edge from `column` to `references.id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignKeySpec {
    pub column: &'static str,
    pub references: &'static str,
    pub on_delete: OnDelete,
    /// Not declared on the entity; added by [`ensure_foreign_keys`] once both
    /// tables exist.
    pub deferred: bool,
}

impl ForeignKeySpec {
    const fn new(column: &'static str, references: &'static str) -> Self {
        Self {
            column,
            references,
            on_delete: OnDelete::NoAction,
            deferred: false,
        }
    }

    const fn cascade(self) -> Self {
        Self {
            on_delete: OnDelete::Cascade,
            ..self
        }
    }

    const fn deferred(self) -> Self {
        Self {
            deferred: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub unique: bool,
}

impl IndexSpec {
    const fn on(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            unique: false,
        }
    }

    const fn unique(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            unique: true,
        }
    }
}

#[derive(Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
    pub foreign_keys: &'static [ForeignKeySpec],
    pub indexes: &'static [IndexSpec],
}

impl TableSpec {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }
}

use ColumnKind::*;

const ID: ColumnSpec = ColumnSpec::new("id", Serial);
const NAME: ColumnSpec = ColumnSpec::new("name", Varchar(256));
const STORE_ID: ColumnSpec = ColumnSpec::new("store_id", Integer);
const CREATED_AT: ColumnSpec = ColumnSpec::new("created_at", Timestamp).default(ColumnDefault::Now);
const UPDATED_AT: ColumnSpec = ColumnSpec::new("updated_at", Timestamp).null();

const STORE_FK: ForeignKeySpec = ForeignKeySpec::new("store_id", "stores");

/// Every table, parents before children.
static TABLES: &[TableSpec] = &[
    TableSpec {
        name: "users",
        columns: &[
            ID,
            ColumnSpec::new("full_name", Text).null(),
            ColumnSpec::new("phone", Varchar(256)).null(),
        ],
        foreign_keys: &[],
        indexes: &[],
    },
    TableSpec {
        name: "countries",
        columns: &[ID, NAME],
        foreign_keys: &[],
        indexes: &[IndexSpec::unique("countries_name_idx", "name")],
    },
    TableSpec {
        name: "cities",
        columns: &[
            ID,
            NAME,
            ColumnSpec::new("country_id", Integer).null(),
            ColumnSpec::new("popularity", Enum(Popularity::TYPE_NAME)).null(),
        ],
        foreign_keys: &[ForeignKeySpec::new("country_id", "countries")],
        indexes: &[IndexSpec::on("cities_country_id_idx", "country_id")],
    },
    TableSpec {
        name: "stores",
        columns: &[
            ID,
            NAME,
            ColumnSpec::new("user_id", Integer),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[ForeignKeySpec::new("user_id", "users")],
        indexes: &[IndexSpec::on("stores_user_id_idx", "user_id")],
    },
    TableSpec {
        name: "billboards",
        columns: &[
            ID,
            STORE_ID,
            ColumnSpec::new("label", Varchar(256)),
            ColumnSpec::new("image_url", Varchar(256)),
            ColumnSpec::new("category_id", Integer).null(),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[
            STORE_FK,
            ForeignKeySpec::new("category_id", "categories").deferred(),
        ],
        indexes: &[
            IndexSpec::on("billboards_store_id_idx", "store_id"),
            IndexSpec::on("billboards_category_id_idx", "category_id"),
        ],
    },
    TableSpec {
        name: "categories",
        columns: &[
            ID,
            STORE_ID,
            ColumnSpec::new("billboard_id", Integer).null(),
            NAME,
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[STORE_FK, ForeignKeySpec::new("billboard_id", "billboards")],
        indexes: &[
            IndexSpec::on("categories_store_id_idx", "store_id"),
            IndexSpec::on("categories_billboard_id_idx", "billboard_id"),
        ],
    },
    TableSpec {
        name: "sizes",
        columns: &[
            ID,
            STORE_ID,
            NAME,
            ColumnSpec::new("value", Varchar(256)),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[STORE_FK],
        indexes: &[IndexSpec::on("sizes_store_id_idx", "store_id")],
    },
    TableSpec {
        name: "colors",
        columns: &[
            ID,
            STORE_ID,
            NAME,
            ColumnSpec::new("value", Varchar(256)),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[STORE_FK],
        indexes: &[IndexSpec::on("colors_store_id_idx", "store_id")],
    },
    TableSpec {
        name: "products",
        columns: &[
            ID,
            STORE_ID,
            ColumnSpec::new("category_id", Integer),
            NAME,
            ColumnSpec::new(
                "price",
                Numeric {
                    precision: 100,
                    scale: 20,
                },
            ),
            ColumnSpec::new("is_featured", Boolean),
            ColumnSpec::new("is_archived", Boolean).default(ColumnDefault::Bool(false)),
            ColumnSpec::new("size_id", Integer),
            ColumnSpec::new("color_id", Integer),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[
            STORE_FK,
            ForeignKeySpec::new("category_id", "categories"),
            ForeignKeySpec::new("size_id", "sizes"),
            ForeignKeySpec::new("color_id", "colors"),
        ],
        indexes: &[
            IndexSpec::on("products_store_id_idx", "store_id"),
            IndexSpec::on("products_category_id_idx", "category_id"),
            IndexSpec::on("products_size_id_idx", "size_id"),
            IndexSpec::on("products_color_id_idx", "color_id"),
        ],
    },
    TableSpec {
        name: "image",
        columns: &[
            ID,
            ColumnSpec::new("product_id", Integer),
            ColumnSpec::new("url", Varchar(256)),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[ForeignKeySpec::new("product_id", "products").cascade()],
        indexes: &[IndexSpec::on("image_product_id_idx", "product_id")],
    },
    TableSpec {
        name: "orders",
        columns: &[
            ID,
            STORE_ID,
            ColumnSpec::new("is_paid", Boolean).default(ColumnDefault::Bool(false)),
            ColumnSpec::new("phone", Varchar(32)).default(ColumnDefault::Text("")),
            ColumnSpec::new("address", Varchar(64)).default(ColumnDefault::Text("")),
            CREATED_AT,
            UPDATED_AT,
        ],
        foreign_keys: &[STORE_FK],
        indexes: &[IndexSpec::on("orders_store_id_idx", "store_id")],
    },
    TableSpec {
        name: "order_items",
        columns: &[
            ID,
            ColumnSpec::new("order_id", Integer),
            ColumnSpec::new("product_id", Integer),
        ],
        foreign_keys: &[
            ForeignKeySpec::new("order_id", "orders"),
            ForeignKeySpec::new("product_id", "products"),
        ],
        indexes: &[
            IndexSpec::on("order_items_order_id_idx", "order_id"),
            IndexSpec::on("order_items_product_id_idx", "product_id"),
        ],
    },
];

pub fn tables() -> &'static [TableSpec] {
    TABLES
}

pub fn table(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|t| t.name == name)
}

/// The edge a join from `child` to `parent` follows, if one is declared.
pub fn foreign_key(child: &str, parent: &str) -> Option<&'static ForeignKeySpec> {
    table(child)?
        .foreign_keys
        .iter()
        .find(|fk| fk.references == parent)
}

/// Every table holding a foreign key into `parent`, with the edge used.
pub fn children_of(parent: &str) -> Vec<(&'static TableSpec, &'static ForeignKeySpec)> {
    TABLES
        .iter()
        .flat_map(|t| {
            t.foreign_keys
                .iter()
                .filter(move |fk| fk.references == parent)
                .map(move |fk| (t, fk))
        })
        .collect()
}

/// Create registered Postgres enum types that don't exist yet.
///
/// Must run before schema-sync, which expects the types to be present.
pub async fn ensure_enums<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let exists = db
        .query_one_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_type WHERE typname = $1",
            [Popularity::TYPE_NAME.into()],
        ))
        .await?
        .is_some();

    if !exists {
        let variants = Popularity::ALL
            .iter()
            .map(|p| format!("'{}'", p.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        db.execute_unprepared(&format!(
            "CREATE TYPE \"{}\" AS ENUM ({variants})",
            Popularity::TYPE_NAME
        ))
        .await?;
        info!("Created enum type {}", Popularity::TYPE_NAME);
    }

    Ok(())
}

/// Ensure every registered index exists.
///
/// Schema-sync only creates indexes it can infer from entity attributes, so
/// the named per-column indexes are created here.
pub async fn ensure_indexes<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let mut created = 0u32;
    for table in TABLES {
        for idx in table.indexes {
            let mut stmt = Index::create();
            stmt.if_not_exists()
                .name(idx.name)
                .table(Alias::new(table.name))
                .col(Alias::new(idx.column));
            if idx.unique {
                stmt.unique();
            }

            db.execute_unprepared(&stmt.to_string(PostgresQueryBuilder))
                .await?;
            created += 1;
        }
    }

    info!("Ensured {} indexes exist", created);
    Ok(())
}

/// Add deferred foreign keys that are missing.
pub async fn ensure_foreign_keys<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for table in TABLES {
        for fk in table.foreign_keys.iter().filter(|fk| fk.deferred) {
            let name = format!("fk_{}_{}", table.name, fk.column);

            let exists = db
                .query_one_raw(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    "SELECT 1 FROM pg_constraint WHERE conname = $1",
                    [name.clone().into()],
                ))
                .await?
                .is_some();
            if exists {
                continue;
            }

            let action = match fk.on_delete {
                OnDelete::NoAction => ForeignKeyAction::NoAction,
                OnDelete::Cascade => ForeignKeyAction::Cascade,
            };
            let stmt = ForeignKey::create()
                .name(&name)
                .from(Alias::new(table.name), Alias::new(fk.column))
                .to(Alias::new(fk.references), Alias::new("id"))
                .on_delete(action)
                .to_string(PostgresQueryBuilder);

            db.execute_unprepared(&stmt).await?;
            info!("Added foreign key {}", name);
        }
    }

    Ok(())
}
