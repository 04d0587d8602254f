#![allow(dead_code)]

use axum::routing::get;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use petclinic::api::handlers::health_handler;
use petclinic::config::ServiceKind;
use petclinic::infrastructure::memory::InMemoryStore;
use petclinic::routes::service_routes;
use petclinic::state::AppState;

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store.clone(), store.clone(), store)
}

/// Server over a fresh in-memory store serving every route group and `/health`.
pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryStore::new()), &ServiceKind::ALL)
}

pub fn make_server_with(store: Arc<InMemoryStore>, services: &[ServiceKind]) -> TestServer {
    let state = create_test_state(store).with_services(services);
    let app = service_routes(services)
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn owner_body(first: &str, last: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "address": "110 W. Liberty St.",
        "city": "Madison",
        "telephone": "6085551023"
    })
}

/// Creates an owner through the API and returns its id.
pub async fn create_owner(server: &TestServer, first: &str, last: &str) -> i64 {
    let response = server.post("/owners").json(&owner_body(first, last)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Creates a pet through the API and returns its id.
pub async fn create_pet(server: &TestServer, owner_id: i64, name: &str, type_id: i32) -> i64 {
    let response = server
        .post(&format!("/owners/{owner_id}/pets"))
        .json(&json!({ "name": name, "birthDate": "2020-01-15", "typeId": type_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
