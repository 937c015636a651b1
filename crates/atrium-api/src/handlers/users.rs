//! User management handlers.

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
use atrium_core::models::{CreateUserRequest, UpdateUserRequest, User};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the user's name.
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Paginated list of users"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .users
        .list(&query, params.role.as_deref(), params.status.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.db.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .users
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;
    Ok(Json(user))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .users
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let user = state
        .db
        .users
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .users
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    state.db.users.delete(&id).await?;
    Ok(deleted("User"))
}
