use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn store_can_hold_many_categories() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Shop").await;

    for name in ["Shirts", "Trousers", "Hats"] {
        app.create_in_store(store_id, "categories", json!({"name": name}))
            .await;
    }

    let res = app.get(&routes::scoped(store_id, "categories")).await;
    assert_eq!(res.status, 200);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Shirts", "Trousers", "Hats"]);
}

#[tokio::test]
async fn rows_of_one_store_are_invisible_from_another() {
    let app = TestApp::spawn().await;
    let a = app.create_store("A").await;
    let b = app.create_store("B").await;
    app.create_in_store(a, "sizes", json!({"name": "Small", "value": "S"}))
        .await;

    let from_a = app.get(&routes::scoped(a, "sizes")).await;
    let from_b = app.get(&routes::scoped(b, "sizes")).await;

    assert_eq!(from_a.body.as_array().unwrap().len(), 1);
    assert_eq!(from_b.body, json!([]));
}

#[tokio::test]
async fn category_cannot_use_another_stores_billboard() {
    let app = TestApp::spawn().await;
    let a = app.create_store("A").await;
    let b = app.create_store("B").await;
    let billboard = app
        .create_in_store(
            a,
            "billboards",
            json!({"label": "Sale", "image_url": "https://img/sale.png"}),
        )
        .await;

    let ok = app
        .post(
            &routes::scoped(a, "categories"),
            &json!({"name": "Shirts", "billboard_id": billboard}),
        )
        .await;
    assert_eq!(ok.status, 201, "{}", ok.text);
    assert_eq!(ok.body["billboard_id"], billboard);

    let res = app
        .post(
            &routes::scoped(b, "categories"),
            &json!({"name": "Shirts", "billboard_id": billboard}),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn billboard_may_point_back_at_a_category() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Shop").await;
    let category = app
        .create_in_store(store_id, "categories", json!({"name": "Shirts"}))
        .await;

    let res = app
        .post(
            &routes::scoped(store_id, "billboards"),
            &json!({"label": "Shirts", "image_url": "https://img/s.png", "category_id": category}),
        )
        .await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["category_id"], category);
    assert_eq!(res.body["label"], "Shirts");
    assert_eq!(res.body["image_url"], "https://img/s.png");
}

#[tokio::test]
async fn creating_in_a_missing_store_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            &routes::scoped(777, "colors"),
            &json!({"name": "Red", "value": "#f00"}),
        )
        .await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn color_value_is_stored_as_sent() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Shop").await;

    for value in ["#ABCDEF", "navy blue"] {
        let res = app
            .post(
                &routes::scoped(store_id, "colors"),
                &json!({"name": "Color", "value": value}),
            )
            .await;
        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["value"], value);
    }

    let blank = app
        .post(
            &routes::scoped(store_id, "colors"),
            &json!({"name": "Red", "value": "   "}),
        )
        .await;
    assert_eq!(blank.status, 400);
}

#[tokio::test]
async fn blank_size_name_is_rejected() {
    let app = TestApp::spawn().await;
    let store_id = app.create_store("Shop").await;

    let res = app
        .post(
            &routes::scoped(store_id, "sizes"),
            &json!({"name": "   ", "value": "M"}),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
