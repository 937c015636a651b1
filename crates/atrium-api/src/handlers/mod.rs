//! HTTP handlers, one module per resource.
//!
//! Handlers translate requests into repository calls and normalized JSON
//! responses; the only business logic they carry is the existence pre-check
//! before PATCH and DELETE.

pub mod audit_logs;
pub mod health;
pub mod invoices;
pub mod org_members;
pub mod organizations;
pub mod subscriptions;
pub mod teams;
pub mod users;

use axum::Json;
use serde_json::{json, Value};

/// Standard acknowledgment body for successful deletes.
pub(crate) fn deleted(resource: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": format!("{} deleted successfully", resource),
    }))
}
