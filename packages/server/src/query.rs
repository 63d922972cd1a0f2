use sea_orm::*;

use crate::entity::{billboard, category, color, order, product, size};
use crate::schema;

/// An entity whose rows belong to exactly one store.
pub trait StoreScoped: EntityTrait {
    fn store_column() -> Self::Column;
    fn id_column() -> Self::Column;
}

macro_rules! store_scoped {
    ($($module:ident),* $(,)?) => {
        $(
            impl StoreScoped for $module::Entity {
                fn store_column() -> Self::Column {
                    $module::Column::StoreId
                }

                fn id_column() -> Self::Column {
                    $module::Column::Id
                }
            }
        )*
    };
}

store_scoped!(category, billboard, size, color, product, order);

/// All rows of `E` in the given store, oldest first.
pub fn in_store<E: StoreScoped>(store_id: i32) -> Select<E> {
    E::find()
        .filter(E::store_column().eq(store_id))
        .order_by_asc(E::id_column())
}

/// Fetch one row, but only if it belongs to `store_id`.
pub async fn find_in_store<E, C>(db: &C, store_id: i32, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: StoreScoped,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::store_column().eq(store_id))
        .filter(E::id_column().eq(id))
        .one(db)
        .await
}

/// Count the rows referencing `parent_id` in every child table of `parent`.
///
/// Child tables and join columns are resolved through the schema registry,
/// so a new store-scoped table shows up here without code changes.
pub async fn count_children<C: ConnectionTrait>(
    db: &C,
    parent: &str,
    parent_id: i32,
) -> Result<Vec<(&'static str, i64)>, DbErr> {
    let mut counts = Vec::new();
    for (table, fk) in schema::children_of(parent) {
        // Identifiers come from the static registry, never from the request.
        let sql = format!(
            "SELECT COUNT(*) AS count FROM \"{}\" WHERE \"{}\" = $1",
            table.name, fk.column
        );
        let row = db
            .query_one_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                [parent_id.into()],
            ))
            .await?;
        let count = match row {
            Some(row) => row.try_get::<i64>("", "count")?,
            None => 0,
        };
        counts.push((table.name, count));
    }
    Ok(counts)
}
