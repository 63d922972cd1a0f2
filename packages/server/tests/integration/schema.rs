use sea_orm::{ConnectionTrait, DbBackend, Statement};

use server::schema;

use crate::common::TestApp;

async fn exists(app: &TestApp, sql: &str, value: &str) -> bool {
    app.db
        .query_one_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [value.into()],
        ))
        .await
        .expect("catalog query failed")
        .is_some()
}

#[tokio::test]
async fn every_registered_index_exists() {
    let app = TestApp::spawn().await;

    for table in schema::tables() {
        for idx in table.indexes {
            assert!(
                exists(&app, "SELECT 1 FROM pg_indexes WHERE indexname = $1", idx.name).await,
                "missing index {}",
                idx.name
            );
        }
    }
}

#[tokio::test]
async fn cyclic_billboard_edge_is_a_real_foreign_key() {
    let app = TestApp::spawn().await;

    assert!(
        exists(
            &app,
            "SELECT 1 FROM pg_constraint WHERE conname = $1 AND contype = 'f'",
            "fk_billboards_category_id",
        )
        .await
    );
}

#[tokio::test]
async fn initialization_is_idempotent() {
    let app = TestApp::spawn().await;
    app.create_user("Survivor").await;

    let again = server::database::init_db(&app.db_url, 1).await;

    assert!(again.is_ok(), "{:?}", again.err());
    assert_eq!(app.count_rows("users", "").await, 1);
}

#[tokio::test]
async fn omitted_columns_take_their_defaults() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Defaults").await;

    app.db
        .execute_unprepared(&format!(
            "INSERT INTO orders (store_id) VALUES ({store_id})"
        ))
        .await
        .unwrap();

    let row = app
        .db
        .query_one_raw(Statement::from_string(
            DbBackend::Postgres,
            "SELECT is_paid, phone, address, created_at IS NOT NULL AS stamped, updated_at IS NULL AS untouched FROM orders",
        ))
        .await
        .unwrap()
        .unwrap();
    assert!(!row.try_get::<bool>("", "is_paid").unwrap());
    assert_eq!(row.try_get::<String>("", "phone").unwrap(), "");
    assert_eq!(row.try_get::<String>("", "address").unwrap(), "");
    assert!(row.try_get::<bool>("", "stamped").unwrap());
    assert!(row.try_get::<bool>("", "untouched").unwrap());
}

#[tokio::test]
async fn popularity_rejects_unknown_labels() {
    let app = TestApp::spawn().await;

    let ok = app
        .db
        .execute_unprepared("INSERT INTO cities (name, popularity) VALUES ('Lisbon', 'popular')")
        .await;
    assert!(ok.is_ok(), "{:?}", ok.err());

    let bad = app
        .db
        .execute_unprepared("INSERT INTO cities (name, popularity) VALUES ('Atlantis', 'famous')")
        .await;
    assert!(bad.is_err());
    assert_eq!(app.count_rows("cities", "").await, 1);
}

#[tokio::test]
async fn varchar_limits_are_enforced_by_the_database() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Limits").await;

    let res = app
        .db
        .execute_unprepared(&format!(
            "INSERT INTO orders (store_id, phone) VALUES ({store_id}, '{}')",
            "9".repeat(33)
        ))
        .await;

    assert!(res.is_err());
}

#[tokio::test]
async fn only_is_archived_carries_a_product_flag_default() {
    let app = TestApp::spawn().await;

    let row = app
        .db
        .query_one_raw(Statement::from_string(
            DbBackend::Postgres,
            "SELECT \
               (SELECT column_default IS NULL FROM information_schema.columns \
                 WHERE table_name = 'products' AND column_name = 'is_featured') AS featured_bare, \
               (SELECT column_default IS NOT NULL FROM information_schema.columns \
                 WHERE table_name = 'products' AND column_name = 'is_archived') AS archived_default",
        ))
        .await
        .unwrap()
        .unwrap();

    assert!(row.try_get::<bool>("", "featured_bare").unwrap());
    assert!(row.try_get::<bool>("", "archived_default").unwrap());
}
