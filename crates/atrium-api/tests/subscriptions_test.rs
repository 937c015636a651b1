mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_subscription(server: &axum_test::TestServer, organization: &str, status: &str) -> Value {
    let response = server
        .post("/api/subscriptions")
        .json(&json!({
            "organization": organization,
            "plan": "Business",
            "status": status,
            "amount": "$499.00",
            "billingCycle": "Monthly",
            "nextBilling": "Jul 22, 2023",
            "paymentMethod": "Visa ending in 4242"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_preserves_display_fields() {
    let (server, _pool) = helpers::spawn_server().await;

    let sub = create_subscription(&server, "Acme Inc.", "Active").await;

    assert!(!sub["id"].as_str().unwrap().is_empty());
    assert_eq!(sub["amount"], "$499.00");
    assert_eq!(sub["billingCycle"], "Monthly");
}

#[tokio::test]
async fn past_due_status_round_trips_with_a_space() {
    let (server, _pool) = helpers::spawn_server().await;

    let sub = create_subscription(&server, "Soylent Corp", "Past Due").await;
    assert_eq!(sub["status"], "Past Due");

    let response = server
        .get("/api/subscriptions")
        .add_query_param("status", "Past Due")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["status"], "Past Due");
}

#[tokio::test]
async fn list_searches_by_organization_name() {
    let (server, _pool) = helpers::spawn_server().await;

    create_subscription(&server, "Acme Inc.", "Active").await;
    create_subscription(&server, "Globex Corp", "Active").await;

    let response = server
        .get("/api/subscriptions")
        .add_query_param("search", "Globex")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["organization"], "Globex Corp");
}

#[tokio::test]
async fn patch_can_cancel_a_subscription() {
    let (server, _pool) = helpers::spawn_server().await;

    let sub = create_subscription(&server, "Massive Dynamic", "Active").await;
    let id = sub["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/subscriptions/{}", id))
        .json(&json!({ "status": "Canceled", "nextBilling": "N/A" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();

    assert_eq!(updated["status"], "Canceled");
    assert_eq!(updated["nextBilling"], "N/A");
    assert_eq!(updated["organization"], "Massive Dynamic");
}

#[tokio::test]
async fn unknown_status_value_is_rejected() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .post("/api/subscriptions")
        .json(&json!({
            "organization": "Acme Inc.",
            "plan": "Business",
            "status": "Paused",
            "amount": "$499.00",
            "billingCycle": "Monthly",
            "nextBilling": "Jul 22, 2023",
            "paymentMethod": "Visa ending in 4242"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation error");
    assert_eq!(body["details"][0]["field"], "body");
}
