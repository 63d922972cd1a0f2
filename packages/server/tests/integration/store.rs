use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn store_can_be_created_and_fetched() {
    let app = TestApp::spawn().await;
    let user_id = app.create_user("Owner").await;

    let res = app
        .post(routes::STORES, &json!({"name": "Corner Shop", "user_id": user_id}))
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["user_id"], user_id);
    assert!(res.body["created_at"].is_string());
    assert!(res.body["updated_at"].is_null());

    let fetched = app.get(&routes::store(res.id())).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["name"], "Corner Shop");
}

#[tokio::test]
async fn store_for_unknown_user_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::STORES, &json!({"name": "Ghost", "user_id": 9999}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn stores_can_be_filtered_by_owner() {
    let app = TestApp::spawn().await;
    let alice = app.create_user("Alice").await;
    let bob = app.create_user("Bob").await;
    for (name, owner) in [("A1", alice), ("B1", bob), ("A2", alice)] {
        let res = app
            .post(routes::STORES, &json!({"name": name, "user_id": owner}))
            .await;
        assert_eq!(res.status, 201);
    }

    let all = app.get(routes::STORES).await;
    assert_eq!(all.body.as_array().unwrap().len(), 3);

    let mine = app.get(&format!("{}?user_id={alice}", routes::STORES)).await;
    let names: Vec<&str> = mine
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);
}

#[tokio::test]
async fn unknown_store_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::store(404)).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn summary_counts_rows_per_child_table() {
    let app = TestApp::spawn().await;
    let catalog = app.create_catalog("Summary").await;
    app.create_product(&catalog, "Tee", &[]).await;
    app.create_product(&catalog, "Polo", &[]).await;
    app.create_in_store(catalog.store_id, "billboards", json!({"label": "Sale", "image_url": "https://img/sale.png"}))
        .await;

    let res = app.get(&routes::store_summary(catalog.store_id)).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["store"]["id"], catalog.store_id);
    let counts = &res.body["counts"];
    assert_eq!(counts["products"], 2);
    assert_eq!(counts["categories"], 1);
    assert_eq!(counts["sizes"], 1);
    assert_eq!(counts["colors"], 1);
    assert_eq!(counts["billboards"], 1);
    assert_eq!(counts["orders"], 0);
}
