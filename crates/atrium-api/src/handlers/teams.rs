//! Team management handlers.
//!
//! Teams carry an optional embedded lead row, so the list and detail
//! responses serve [`TeamWithLead`] rather than the bare table record.

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
use atrium_core::models::{CreateTeamRequest, TeamWithLead, UpdateTeamRequest};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTeamsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the team's name.
    pub search: Option<String>,
    pub organization: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/teams",
    params(ListTeamsParams),
    responses(
        (status = 200, description = "Paginated list of teams with their leads"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
#[tracing::instrument(skip(state))]
pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTeamsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .teams
        .list(&query, params.organization.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamWithLead),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "teams"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let team = state.db.teams.create(request).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team details with lead", body = TeamWithLead),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
#[tracing::instrument(skip(state))]
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let team = state
        .db
        .teams
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team".to_string()))?;
    Ok(Json(team))
}

#[utoipa::path(
    patch,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Updated team with lead", body = TeamWithLead),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .teams
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team".to_string()))?;

    let team = state
        .db
        .teams
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Team".to_string()))?;
    Ok(Json(team))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team and its lead deleted"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .teams
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team".to_string()))?;

    state.db.teams.delete(&id).await?;
    Ok(deleted("Team"))
}
