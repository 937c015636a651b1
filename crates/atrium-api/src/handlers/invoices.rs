//! Invoice management handlers.

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
use atrium_core::models::{CreateInvoiceRequest, Invoice, UpdateInvoiceRequest};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListInvoicesParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the billed organization's name.
    pub search: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/invoices",
    params(ListInvoicesParams),
    responses(
        (status = 200, description = "Paginated list of invoices"),
        (status = 500, description = "Internal server error")
    ),
    tag = "invoices"
)]
#[tracing::instrument(skip(state))]
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListInvoicesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .invoices
        .list(&query, params.status.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = Invoice),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "invoices"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = state.db.invoices.create(request).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    params(("id" = String, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice details", body = Invoice),
        (status = 404, description = "Invoice not found")
    ),
    tag = "invoices"
)]
#[tracing::instrument(skip(state))]
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = state
        .db
        .invoices
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice".to_string()))?;
    Ok(Json(invoice))
}

#[utoipa::path(
    patch,
    path = "/api/invoices/{id}",
    params(("id" = String, Path, description = "Invoice id")),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Updated invoice", body = Invoice),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Invoice not found")
    ),
    tag = "invoices"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .invoices
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice".to_string()))?;

    let invoice = state
        .db
        .invoices
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice".to_string()))?;
    Ok(Json(invoice))
}

#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    params(("id" = String, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice deleted"),
        (status = 404, description = "Invoice not found")
    ),
    tag = "invoices"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .invoices
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice".to_string()))?;

    state.db.invoices.delete(&id).await?;
    Ok(deleted("Invoice"))
}
