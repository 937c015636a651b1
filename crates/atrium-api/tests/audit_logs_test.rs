mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_entry(server: &axum_test::TestServer, action: &str, severity: &str) -> Value {
    let response = server
        .post("/api/audit-logs")
        .json(&json!({
            "userId": "u1",
            "userName": "Ada Lovelace",
            "userEmail": "ada@acme.com",
            "action": action,
            "resource": "Authentication",
            "ipAddress": "192.168.1.1",
            "timestamp": "2023-07-15 09:23:45",
            "status": "Success",
            "severity": severity
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_and_fetch_an_entry() {
    let (server, _pool) = helpers::spawn_server().await;

    let entry = create_entry(&server, "User Login", "Info").await;
    let id = entry["id"].as_str().unwrap();

    let response = server.get(&format!("/api/audit-logs/{}", id)).await;
    response.assert_status_ok();
    let fetched = response.json::<Value>();
    assert_eq!(fetched["action"], "User Login");
    assert_eq!(fetched["severity"], "Info");
}

#[tokio::test]
async fn entries_cannot_be_updated() {
    let (server, _pool) = helpers::spawn_server().await;

    let entry = create_entry(&server, "User Login", "Info").await;
    let id = entry["id"].as_str().unwrap();

    // The audit trail is append-only; there is no PATCH route.
    let response = server
        .patch(&format!("/api/audit-logs/{}", id))
        .json(&json!({ "action": "rewritten" }))
        .await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn list_filters_by_severity_and_searches_actions() {
    let (server, _pool) = helpers::spawn_server().await;

    create_entry(&server, "User Login", "Info").await;
    create_entry(&server, "Failed Login Attempt", "Warning").await;
    create_entry(&server, "Unauthorized Access Attempt", "Critical").await;

    let response = server
        .get("/api/audit-logs")
        .add_query_param("severity", "Critical")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);

    let response = server
        .get("/api/audit-logs")
        .add_query_param("search", "Login")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn entries_can_be_purged() {
    let (server, _pool) = helpers::spawn_server().await;

    let entry = create_entry(&server, "User Login", "Info").await;
    let id = entry["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/audit-logs/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Audit log deleted successfully"
    );

    server
        .get(&format!("/api/audit-logs/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
