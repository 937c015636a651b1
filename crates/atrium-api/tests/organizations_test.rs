mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_org(server: &axum_test::TestServer, name: &str, domain: &str, plan: &str) -> Value {
    let response = server
        .post("/api/organizations")
        .json(&json!({
            "name": name,
            "domain": domain,
            "plan": plan,
            "users": 10,
            "status": "Active"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_assigns_id_and_display_date() {
    let (server, _pool) = helpers::spawn_server().await;

    let org = create_org(&server, "Acme Inc.", "acme.com", "Enterprise").await;

    assert!(!org["id"].as_str().unwrap().is_empty());
    assert_eq!(org["plan"], "Enterprise");
    // createdAt is a human-readable display date, e.g. "Jan 15, 2023".
    let created_at = org["createdAt"].as_str().unwrap();
    assert!(created_at.contains(", 20"));
}

#[tokio::test]
async fn create_rejects_short_domain() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .post("/api/organizations")
        .json(&json!({
            "name": "Acme Inc.",
            "domain": "ab",
            "plan": "Starter",
            "users": 10,
            "status": "Active"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Validation error");
    let messages: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Domain must be at least 3 characters"));
}

#[tokio::test]
async fn list_filters_by_plan_and_status() {
    let (server, _pool) = helpers::spawn_server().await;

    create_org(&server, "Acme Inc.", "acme.com", "Enterprise").await;
    create_org(&server, "Globex Corp", "globex.com", "Business").await;
    create_org(&server, "Initech", "initech.com", "Enterprise").await;

    let response = server
        .get("/api/organizations")
        .add_query_param("plan", "Enterprise")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 2);

    let response = server
        .get("/api/organizations")
        .add_query_param("search", "Globex")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Globex Corp");
}

#[tokio::test]
async fn patch_can_change_plan_without_touching_name() {
    let (server, _pool) = helpers::spawn_server().await;

    let org = create_org(&server, "Acme Inc.", "acme.com", "Starter").await;
    let id = org["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/organizations/{}", id))
        .json(&json!({ "plan": "Business" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();

    assert_eq!(updated["plan"], "Business");
    assert_eq!(updated["name"], "Acme Inc.");
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found_envelope() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server.delete("/api/organizations/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Organization not found");
}
