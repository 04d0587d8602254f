mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_store() {
    let server = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["services"], serde_json::json!(["customers", "visits"]));
    assert!(json["version"].is_string());
}
