mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn team_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Product development",
        "members": 8,
        "organization": "Acme Inc.",
        "lead": {
            "userId": "u1",
            "name": "Ada Lovelace",
            "email": "ada@acme.com"
        }
    })
}

#[tokio::test]
async fn create_pairs_a_lead_with_the_team() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server.post("/api/teams").json(&team_body("Platform")).await;
    response.assert_status(StatusCode::CREATED);
    let team = response.json::<Value>();

    assert_eq!(team["name"], "Platform");
    assert_eq!(team["lead"]["name"], "Ada Lovelace");
    assert_eq!(team["lead"]["teamId"], team["id"]);
    assert_eq!(team["leadId"], team["lead"]["id"]);
}

#[tokio::test]
async fn invalid_lead_email_is_reported_under_the_lead_key() {
    let (server, _pool) = helpers::spawn_server().await;

    let mut body = team_body("Platform");
    body["lead"]["email"] = json!("not-an-email");

    let response = server.post("/api/teams").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<Value>();

    assert_eq!(error["error"], "Validation error");
    let fields: Vec<&str> = error["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"lead.email"));
}

#[tokio::test]
async fn list_embeds_leads_and_filters_by_organization() {
    let (server, _pool) = helpers::spawn_server().await;

    server
        .post("/api/teams")
        .json(&team_body("Platform"))
        .await
        .assert_status(StatusCode::CREATED);

    let mut other = team_body("Design");
    other["organization"] = json!("Globex Corp");
    server
        .post("/api/teams")
        .json(&other)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/teams")
        .add_query_param("organization", "Acme Inc.")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Platform");
    assert_eq!(body["data"][0]["lead"]["email"], "ada@acme.com");
}

#[tokio::test]
async fn patch_updates_team_fields_but_not_the_lead() {
    let (server, _pool) = helpers::spawn_server().await;

    let created = server
        .post("/api/teams")
        .json(&team_body("Platform"))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/teams/{}", id))
        .json(&json!({ "members": 20 }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();

    assert_eq!(updated["members"], 20);
    assert_eq!(updated["lead"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn delete_removes_the_team_and_its_lead() {
    let (server, pool) = helpers::spawn_server().await;

    let created = server
        .post("/api/teams")
        .json(&team_body("Platform"))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    server
        .delete(&format!("/api/teams/{}", id))
        .await
        .assert_status_ok();

    server
        .get(&format!("/api/teams/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let leads: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM team_leads WHERE team_id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(leads, 0);
}
