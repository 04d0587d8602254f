mod common;

use axum::http::StatusCode;
use petclinic::config::ServiceKind;
use petclinic::infrastructure::memory::InMemoryStore;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_create_visit_uses_path_pet_id() {
    let server = common::make_server();

    let response = server
        .post("/owners/*/pets/333/visits")
        .json(&json!({ "date": "2013-01-01", "description": "rabies shot", "petId": 0 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["petId"], 333);
    assert_eq!(json["date"], "2013-01-01");
    assert_eq!(json["description"], "rabies shot");
}

#[tokio::test]
async fn test_create_visit_description_too_long() {
    let server = common::make_server();

    let response = server
        .post("/owners/1/pets/7/visits")
        .json(&json!({ "description": "x".repeat(8193) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pet_visits_bare_array() {
    let server = common::make_server();
    for description in ["rabies shot", "spayed"] {
        server
            .post("/owners/6/pets/7/visits")
            .json(&json!({ "date": "2013-01-04", "description": description }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/owners/6/pets/7/visits").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let visits = json.as_array().unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0]["petId"], 7);
}

#[tokio::test]
async fn test_pet_visits_empty() {
    let server = common::make_server();

    let response = server.get("/owners/1/pets/42/visits").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_visits_for_several_pets() {
    let server = common::make_server();
    for (pet_id, description) in [(111, "first"), (222, "second"), (333, "other")] {
        server
            .post(&format!("/owners/*/pets/{pet_id}/visits"))
            .json(&json!({ "description": description }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/pets/visits?petId=111,222").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["petId"], 111);
    assert_eq!(items[1]["petId"], 222);
}

#[tokio::test]
async fn test_visits_for_several_pets_requires_pet_ids() {
    let server = common::make_server();

    for uri in ["/pets/visits", "/pets/visits?petId=7,x"] {
        let response = server.get(uri).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["details"]["source"], "query");
    }
}

#[tokio::test]
async fn test_pet_visits_non_numeric_pet_id() {
    let server = common::make_server();

    let response = server.get("/owners/1/pets/rex/visits").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["details"]["source"], "path");
}

#[tokio::test]
async fn test_visits_only_service_has_no_customer_routes() {
    let server = common::make_server_with(Arc::new(InMemoryStore::new()), &[ServiceKind::Visits]);

    server.get("/owners").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/owners/1/pets/1/visits").await.assert_status_ok();
}
