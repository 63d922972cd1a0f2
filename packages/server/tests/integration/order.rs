use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn order_gets_column_defaults() {
    let app = TestApp::spawn().await;
    let catalog = app.create_catalog("Shop").await;
    let product = app.create_product(&catalog, "Tee", &[]).await;

    let res = app
        .post(
            &routes::scoped(catalog.store_id, "orders"),
            &json!({"product_ids": [product]}),
        )
        .await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["is_paid"], false);
    assert_eq!(res.body["phone"], "");
    assert_eq!(res.body["address"], "");
    assert!(res.body["created_at"].is_string());
    assert_eq!(res.body["items"][0]["product_id"], product);
}

#[tokio::test]
async fn order_lists_with_its_items() {
    let app = TestApp::spawn().await;
    let catalog = app.create_catalog("Shop").await;
    let tee = app.create_product(&catalog, "Tee", &[]).await;
    let polo = app.create_product(&catalog, "Polo", &[]).await;

    let created = app
        .post(
            &routes::scoped(catalog.store_id, "orders"),
            &json!({
                "product_ids": [tee, polo],
                "phone": "+1 555 0100",
                "address": "1 Main St",
                "is_paid": true,
            }),
        )
        .await;
    assert_eq!(created.status, 201, "{}", created.text);

    let res = app.get(&routes::scoped(catalog.store_id, "orders")).await;
    assert_eq!(res.status, 200);
    let orders = res.body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["is_paid"], true);
    assert_eq!(orders[0]["phone"], "+1 555 0100");
    let product_ids: Vec<i64> = orders[0]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["product_id"].as_i64().unwrap())
        .collect();
    assert_eq!(product_ids, vec![tee as i64, polo as i64]);
}

#[tokio::test]
async fn order_with_foreign_product_writes_nothing() {
    let app = TestApp::spawn().await;
    let mine = app.create_catalog("Mine").await;
    let theirs = app.create_catalog("Theirs").await;
    let own = app.create_product(&mine, "Tee", &[]).await;
    let foreign = app.create_product(&theirs, "Tee", &[]).await;

    let res = app
        .post(
            &routes::scoped(mine.store_id, "orders"),
            &json!({"product_ids": [own, foreign]}),
        )
        .await;

    assert_eq!(res.status, 400);
    assert!(res.body["message"].as_str().unwrap().contains(&foreign.to_string()));
    assert_eq!(app.count_rows("orders", "").await, 0);
    assert_eq!(app.count_rows("order_items", "").await, 0);
}

#[tokio::test]
async fn duplicate_or_empty_product_lists_are_rejected() {
    let app = TestApp::spawn().await;
    let catalog = app.create_catalog("Shop").await;
    let product = app.create_product(&catalog, "Tee", &[]).await;
    let path = routes::scoped(catalog.store_id, "orders");

    let empty = app.post(&path, &json!({"product_ids": []})).await;
    assert_eq!(empty.status, 400);

    let dup = app
        .post(&path, &json!({"product_ids": [product, product]}))
        .await;
    assert_eq!(dup.status, 400);

    let long_phone = app
        .post(&path, &json!({"product_ids": [product], "phone": "9".repeat(33)}))
        .await;
    assert_eq!(long_phone.status, 400);
}
