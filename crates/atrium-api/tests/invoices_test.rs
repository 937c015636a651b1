mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_invoice(server: &axum_test::TestServer, organization: &str, status: &str) -> Value {
    let response = server
        .post("/api/invoices")
        .json(&json!({
            "organization": organization,
            "amount": "$999.00",
            "status": status,
            "date": "Jun 15, 2023"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_assigns_a_human_readable_invoice_code() {
    let (server, _pool) = helpers::spawn_server().await;

    let invoice = create_invoice(&server, "Acme Inc.", "Paid").await;

    let id = invoice["id"].as_str().unwrap();
    assert!(id.starts_with("INV-"), "unexpected invoice id {}", id);
    assert_eq!(invoice["amount"], "$999.00");
}

#[tokio::test]
async fn list_filters_by_status() {
    let (server, _pool) = helpers::spawn_server().await;

    create_invoice(&server, "Acme Inc.", "Paid").await;
    create_invoice(&server, "Soylent Corp", "Unpaid").await;
    create_invoice(&server, "Massive Dynamic", "Refunded").await;

    let response = server
        .get("/api/invoices")
        .add_query_param("status", "Unpaid")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["organization"], "Soylent Corp");
}

#[tokio::test]
async fn patch_can_mark_an_invoice_refunded() {
    let (server, _pool) = helpers::spawn_server().await;

    let invoice = create_invoice(&server, "Acme Inc.", "Paid").await;
    let id = invoice["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/invoices/{}", id))
        .json(&json!({ "status": "Refunded" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["status"], "Refunded");
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn get_unknown_invoice_returns_not_found() {
    let (server, _pool) = helpers::spawn_server().await;

    let response = server.get("/api/invoices/INV-999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Invoice not found");
}
