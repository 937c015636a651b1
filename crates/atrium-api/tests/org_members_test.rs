mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_member(
    server: &axum_test::TestServer,
    name: &str,
    department: &str,
    organization_id: &str,
) -> Value {
    let response = server
        .post("/api/organization-members")
        .json(&json!({
            "name": name,
            "email": format!("{}@acme.com", name.to_lowercase().replace(' ', ".")),
            "role": "User",
            "department": department,
            "status": "Active",
            "organizationId": organization_id
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

/// Membership rows carry an organization foreign key, so tests create the
/// parent organization first.
async fn setup_org(server: &axum_test::TestServer) -> String {
    let response = server
        .post("/api/organizations")
        .json(&json!({
            "name": "Acme Inc.",
            "domain": "acme.com",
            "plan": "Enterprise",
            "users": 42,
            "status": "Active"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_fills_generated_fields() {
    let (server, _pool) = helpers::spawn_server().await;
    let org = setup_org(&server).await;

    let member = create_member(&server, "Ada Lovelace", "Engineering", &org).await;

    assert!(!member["id"].as_str().unwrap().is_empty());
    assert_eq!(member["lastActive"], "Just now");
    assert_eq!(member["organizationId"], org.as_str());
}

#[tokio::test]
async fn list_filters_by_department_and_organization() {
    let (server, _pool) = helpers::spawn_server().await;
    let org = setup_org(&server).await;

    create_member(&server, "Ada Lovelace", "Engineering", &org).await;
    create_member(&server, "Grace Hopper", "Engineering", &org).await;
    create_member(&server, "Jean Bartik", "Marketing", &org).await;

    let response = server
        .get("/api/organization-members")
        .add_query_param("department", "Engineering")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 2);

    let response = server
        .get("/api/organization-members")
        .add_query_param("organizationId", &org)
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 3);

    let response = server
        .get("/api/organization-members")
        .add_query_param("organizationId", "does-not-exist")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn patch_can_move_a_member_between_departments() {
    let (server, _pool) = helpers::spawn_server().await;
    let org = setup_org(&server).await;

    let member = create_member(&server, "Ada Lovelace", "Engineering", &org).await;
    let id = member["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/organization-members/{}", id))
        .json(&json!({ "department": "Product", "role": "Manager" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();

    assert_eq!(updated["department"], "Product");
    assert_eq!(updated["role"], "Manager");
    assert_eq!(updated["name"], "Ada Lovelace");
}

#[tokio::test]
async fn delete_unknown_member_returns_not_found_envelope() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server.delete("/api/organization-members/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Organization member not found"
    );
}
