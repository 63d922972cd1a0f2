use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn country_names_are_unique() {
    let app = TestApp::spawn().await;

    let first = app.post(routes::COUNTRIES, &json!({"name": "Portugal"})).await;
    assert_eq!(first.status, 201, "{}", first.text);

    let second = app.post(routes::COUNTRIES, &json!({"name": "Portugal"})).await;
    assert_eq!(second.status, 409);
    assert_eq!(second.body["code"], "CONFLICT");

    let list = app.get(routes::COUNTRIES).await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn cities_are_listed_per_country() {
    let app = TestApp::spawn().await;
    let pt = app.post(routes::COUNTRIES, &json!({"name": "Portugal"})).await.id();
    let es = app.post(routes::COUNTRIES, &json!({"name": "Spain"})).await.id();

    let porto = app
        .post(&routes::cities(pt), &json!({"name": "Porto", "popularity": "popular"}))
        .await;
    assert_eq!(porto.status, 201, "{}", porto.text);
    assert_eq!(porto.body["popularity"], "popular");
    assert_eq!(porto.body["country_id"], pt);

    let braga = app.post(&routes::cities(pt), &json!({"name": "Braga"})).await;
    assert!(braga.body["popularity"].is_null());
    app.post(&routes::cities(es), &json!({"name": "Vigo"})).await;

    let res = app.get(&routes::cities(pt)).await;
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Porto", "Braga"]);
}

#[tokio::test]
async fn unknown_popularity_value_is_rejected() {
    let app = TestApp::spawn().await;
    let pt = app.post(routes::COUNTRIES, &json!({"name": "Portugal"})).await.id();

    let res = app
        .post(&routes::cities(pt), &json!({"name": "Porto", "popularity": "famous"}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn cities_of_a_missing_country_are_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::cities(31337)).await;

    assert_eq!(res.status, 404);
}
