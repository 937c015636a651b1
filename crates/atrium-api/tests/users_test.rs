mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_user(server: &axum_test::TestServer, name: &str, email: &str) -> Value {
    let response = server
        .post("/api/users")
        .json(&json!({
            "name": name,
            "email": email,
            "role": "User",
            "organization": "Acme Inc.",
            "status": "Active"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_fills_generated_fields() {
    let (server, _pool) = helpers::spawn_server().await;

    let user = create_user(&server, "Ada Lovelace", "ada@acme.com").await;

    assert!(!user["id"].as_str().unwrap().is_empty());
    assert_eq!(user["lastActive"], "Just now");
    assert!(!user["createdAt"].as_str().unwrap().is_empty());
    assert_eq!(user["role"], "User");
}

#[tokio::test]
async fn create_rejects_invalid_body_with_details() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .post("/api/users")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "role": "User",
            "organization": "Acme Inc.",
            "status": "Active"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation error");

    let details = body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));

    let messages: Vec<&str> = details
        .iter()
        .map(|d| d["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Name must be at least 2 characters"));
    assert!(messages.contains(&"Invalid email address"));
}

#[tokio::test]
async fn create_rejects_missing_field_with_envelope() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .post("/api/users")
        .json(&json!({
            "email": "grace@acme.com",
            "role": "User",
            "organization": "Acme Inc.",
            "status": "Active"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation error");

    let details = body["details"].as_array().unwrap();
    assert_eq!(details[0]["field"], "body");
    assert!(details[0]["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_rejects_unknown_role_with_envelope() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .post("/api/users")
        .json(&json!({
            "name": "Grace Hall",
            "email": "grace@acme.com",
            "role": "Superuser",
            "organization": "Acme Inc.",
            "status": "Active"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation error");
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn list_returns_envelope_with_defaults() {
    let (server, _pool) = helpers::spawn_server().await;

    for i in 0..12 {
        create_user(&server, &format!("User {:02}", i), &format!("u{}@acme.com", i)).await;
    }

    let response = server.get("/api/users").await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn list_pages_beyond_the_data_are_empty_but_keep_totals() {
    let (server, _pool) = helpers::spawn_server().await;

    for i in 0..3 {
        create_user(&server, &format!("User {}", i), &format!("u{}@acme.com", i)).await;
    }

    let response = server
        .get("/api/users")
        .add_query_param("page", "5")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["page"], 5);
}

#[tokio::test]
async fn search_and_filters_constrain_the_count() {
    let (server, _pool) = helpers::spawn_server().await;

    create_user(&server, "Grace Hopper", "grace@acme.com").await;
    create_user(&server, "Alan Turing", "alan@acme.com").await;
    create_user(&server, "Grace Kelly", "kelly@acme.com").await;

    let response = server
        .get("/api/users")
        .add_query_param("search", "Grace")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 2);

    let response = server
        .get("/api/users")
        .add_query_param("role", "Admin")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn get_unknown_id_returns_not_found_envelope() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server.get("/api/users/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn patch_applies_only_supplied_fields() {
    let (server, _pool) = helpers::spawn_server().await;

    let user = create_user(&server, "Ada Lovelace", "ada@acme.com").await;
    let id = user["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/users/{}", id))
        .json(&json!({ "status": "Suspended" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();

    assert_eq!(updated["status"], "Suspended");
    assert_eq!(updated["name"], "Ada Lovelace");
    assert_eq!(updated["email"], "ada@acme.com");
}

#[tokio::test]
async fn patch_unknown_id_returns_not_found() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server
        .patch("/api/users/nope")
        .json(&json!({ "status": "Suspended" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_acknowledges_and_removes_the_row() {
    let (server, _pool) = helpers::spawn_server().await;

    let user = create_user(&server, "Ada Lovelace", "ada@acme.com").await;
    let id = user["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/users/{}", id)).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User deleted successfully");

    server
        .get(&format!("/api/users/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
