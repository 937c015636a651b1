//! Organization management handlers.

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
use atrium_core::models::{CreateOrganizationRequest, Organization, UpdateOrganizationRequest};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrganizationsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the organization's name.
    pub search: Option<String>,
    pub plan: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/organizations",
    params(ListOrganizationsParams),
    responses(
        (status = 200, description = "Paginated list of organizations"),
        (status = 500, description = "Internal server error")
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip(state))]
pub async fn list_organizations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListOrganizationsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .organizations
        .list(&query, params.plan.as_deref(), params.status.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/organizations",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 201, description = "Organization created", body = Organization),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateOrganizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let organization = state.db.organizations.create(request).await?;
    Ok((StatusCode::CREATED, Json(organization)))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    params(("id" = String, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization details", body = Organization),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip(state))]
pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let organization = state
        .db
        .organizations
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization".to_string()))?;
    Ok(Json(organization))
}

#[utoipa::path(
    patch,
    path = "/api/organizations/{id}",
    params(("id" = String, Path, description = "Organization id")),
    request_body = UpdateOrganizationRequest,
    responses(
        (status = 200, description = "Updated organization", body = Organization),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateOrganizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .organizations
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization".to_string()))?;

    let organization = state
        .db
        .organizations
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization".to_string()))?;
    Ok(Json(organization))
}

#[utoipa::path(
    delete,
    path = "/api/organizations/{id}",
    params(("id" = String, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization deleted"),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .organizations
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization".to_string()))?;

    state.db.organizations.delete(&id).await?;
    Ok(deleted("Organization"))
}
