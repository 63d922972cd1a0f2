use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::schema;

/// Connect, then bring the database up to the declared schema.
pub async fn init_db(db_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    schema::ensure_enums(&db).await?;
    db.get_schema_registry("server::entity::*")
        .sync(&db)
        .await?;
    schema::ensure_foreign_keys(&db).await?;
    schema::ensure_indexes(&db).await?;

    info!("Database schema is up to date");
    Ok(db)
}
