//! Organization member handlers.

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
use atrium_core::models::{
    CreateOrganizationMemberRequest, OrganizationMember, UpdateOrganizationMemberRequest,
};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrganizationMembersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the member's name.
    pub search: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "organizationId")]
    pub organization_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/organization-members",
    params(ListOrganizationMembersParams),
    responses(
        (status = 200, description = "Paginated list of organization members"),
        (status = 500, description = "Internal server error")
    ),
    tag = "organization-members"
)]
#[tracing::instrument(skip(state))]
pub async fn list_organization_members(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListOrganizationMembersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .org_members
        .list(
            &query,
            params.role.as_deref(),
            params.department.as_deref(),
            params.status.as_deref(),
            params.organization_id.as_deref(),
        )
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/organization-members",
    request_body = CreateOrganizationMemberRequest,
    responses(
        (status = 201, description = "Organization member created", body = OrganizationMember),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "organization-members"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_organization_member(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateOrganizationMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member = state.db.org_members.create(request).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/api/organization-members/{id}",
    params(("id" = String, Path, description = "Member id")),
    responses(
        (status = 200, description = "Organization member details", body = OrganizationMember),
        (status = 404, description = "Organization member not found")
    ),
    tag = "organization-members"
)]
#[tracing::instrument(skip(state))]
pub async fn get_organization_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member = state
        .db
        .org_members
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization member".to_string()))?;
    Ok(Json(member))
}

#[utoipa::path(
    patch,
    path = "/api/organization-members/{id}",
    params(("id" = String, Path, description = "Member id")),
    request_body = UpdateOrganizationMemberRequest,
    responses(
        (status = 200, description = "Updated organization member", body = OrganizationMember),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Organization member not found")
    ),
    tag = "organization-members"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_organization_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateOrganizationMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .org_members
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization member".to_string()))?;

    let member = state
        .db
        .org_members
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization member".to_string()))?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/api/organization-members/{id}",
    params(("id" = String, Path, description = "Member id")),
    responses(
        (status = 200, description = "Organization member deleted"),
        (status = 404, description = "Organization member not found")
    ),
    tag = "organization-members"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_organization_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .org_members
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization member".to_string()))?;

    state.db.org_members.delete(&id).await?;
    Ok(deleted("Organization member"))
}
