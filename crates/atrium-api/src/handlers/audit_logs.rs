//! Audit log handlers.
//!
//! Audit entries are append-only: they can be created, read, and purged,
//! but there is deliberately no update route.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::{ApiError, ApiJson};
use crate::handlers::deleted;
use crate::state::AppState;
use atrium_core::models::{AuditLog, CreateAuditLogRequest};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAuditLogsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the recorded action.
    pub search: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/audit-logs",
    params(ListAuditLogsParams),
    responses(
        (status = 200, description = "Paginated list of audit log entries"),
        (status = 500, description = "Internal server error")
    ),
    tag = "audit-logs"
)]
#[tracing::instrument(skip(state))]
pub async fn list_audit_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListAuditLogsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .audit_logs
        .list(&query, params.severity.as_deref(), params.status.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/audit-logs",
    request_body = CreateAuditLogRequest,
    responses(
        (status = 201, description = "Audit log entry created", body = AuditLog),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "audit-logs"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_audit_log(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateAuditLogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state.db.audit_logs.create(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/audit-logs/{id}",
    params(("id" = String, Path, description = "Audit log entry id")),
    responses(
        (status = 200, description = "Audit log entry details", body = AuditLog),
        (status = 404, description = "Audit log not found")
    ),
    tag = "audit-logs"
)]
#[tracing::instrument(skip(state))]
pub async fn get_audit_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .db
        .audit_logs
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Audit log".to_string()))?;
    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/audit-logs/{id}",
    params(("id" = String, Path, description = "Audit log entry id")),
    responses(
        (status = 200, description = "Audit log entry deleted"),
        (status = 404, description = "Audit log not found")
    ),
    tag = "audit-logs"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_audit_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .audit_logs
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Audit log".to_string()))?;

    state.db.audit_logs.delete(&id).await?;
    Ok(deleted("Audit log"))
}
