mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_owner_success() {
    let server = common::make_server();

    let response = server
        .post("/owners")
        .json(&common::owner_body("George", "Franklin"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["firstName"], "George");
    assert_eq!(json["lastName"], "Franklin");
    assert_eq!(json["telephone"], "6085551023");
    assert_eq!(json["pets"], json!([]));
}

#[tokio::test]
async fn test_create_owner_blank_name() {
    let server = common::make_server();

    let mut body = common::owner_body("George", "Franklin");
    body["firstName"] = json!("  ");

    let response = server.post("/owners").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_owner_invalid_telephone() {
    let server = common::make_server();

    for telephone in ["608-555-1023", "1234567890123", "", "phone"] {
        let mut body = common::owner_body("George", "Franklin");
        body["telephone"] = json!(telephone);

        let response = server.post("/owners").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_create_owner_name_too_long() {
    let server = common::make_server();

    let mut body = common::owner_body("George", "Franklin");
    body["lastName"] = json!("x".repeat(31));

    let response = server.post("/owners").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    server.get("/owners").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_owner_malformed_body() {
    let server = common::make_server();

    let response = server
        .post("/owners")
        .json(&json!({ "firstName": "George" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["source"], "body");
}

// ─── FIND ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_owner_with_pets_sorted() {
    let server = common::make_server();
    let owner_id = common::create_owner(&server, "Jean", "Coleman").await;
    common::create_pet(&server, owner_id, "Whiskers", 1).await;
    common::create_pet(&server, owner_id, "Buddy", 2).await;

    let response = server.get(&format!("/owners/{owner_id}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["firstName"], "Jean");
    let names: Vec<&str> = json["pets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Buddy", "Whiskers"]);
    assert_eq!(json["pets"][0]["type"]["name"], "dog");
    assert_eq!(json["pets"][0]["birthDate"], "2020-01-15");
}

#[tokio::test]
async fn test_find_missing_owner_returns_null() {
    let server = common::make_server();

    let response = server.get("/owners/99").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_find_owner_rejects_zero_id() {
    let server = common::make_server();

    let response = server.get("/owners/0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_owner_non_numeric_id() {
    let server = common::make_server();

    let response = server.get("/owners/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["source"], "path");
}

#[tokio::test]
async fn test_list_owners_in_store_order() {
    let server = common::make_server();
    common::create_owner(&server, "Zed", "Last").await;
    common::create_owner(&server, "Amy", "First").await;

    let response = server.get("/owners").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let owners = json.as_array().unwrap();
    assert_eq!(owners.len(), 2);
    assert_eq!(owners[0]["firstName"], "Zed");
    assert_eq!(owners[1]["firstName"], "Amy");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_owner_overwrites_fields() {
    let server = common::make_server();
    let owner_id = common::create_owner(&server, "George", "Franklin").await;

    let response = server
        .put(&format!("/owners/{owner_id}"))
        .json(&json!({
            "firstName": "Harold",
            "lastName": "Davis",
            "address": "563 Friendly St.",
            "city": "Windsor",
            "telephone": "6085553198"
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let json = server
        .get(&format!("/owners/{owner_id}"))
        .await
        .json::<Value>();
    assert_eq!(json["firstName"], "Harold");
    assert_eq!(json["lastName"], "Davis");
    assert_eq!(json["city"], "Windsor");
    assert_eq!(json["telephone"], "6085553198");
}

#[tokio::test]
async fn test_update_missing_owner() {
    let server = common::make_server();

    let response = server
        .put("/owners/99")
        .json(&common::owner_body("George", "Franklin"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Owner 99 not found");
    assert_eq!(json["error"]["details"]["id"], 99);
}

#[tokio::test]
async fn test_update_owner_trailing_fields_ignored() {
    let server = common::make_server();
    let owner_id = common::create_owner(&server, "George", "Franklin").await;

    let mut body = common::owner_body("Betty", "Davis");
    body["id"] = json!(12345);

    let response = server.put(&format!("/owners/{owner_id}")).json(&body).await;

    response.assert_status(StatusCode::NO_CONTENT);
    let json = server.get("/owners").await.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], owner_id);
}
