//! Subscription management handlers.

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
use atrium_core::models::{CreateSubscriptionRequest, Subscription, UpdateSubscriptionRequest};
use atrium_core::{AppError, PageQuery};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSubscriptionsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Substring match on the subscribing organization's name.
    pub search: Option<String>,
    pub plan: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/subscriptions",
    params(ListSubscriptionsParams),
    responses(
        (status = 200, description = "Paginated list of subscriptions"),
        (status = 500, description = "Internal server error")
    ),
    tag = "subscriptions"
)]
#[tracing::instrument(skip(state))]
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSubscriptionsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = PageQuery::new(params.page, params.limit, params.search.clone());
    let result = state
        .db
        .subscriptions
        .list(&query, params.plan.as_deref(), params.status.as_deref())
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription created", body = Subscription),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "subscriptions"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let subscription = state.db.subscriptions.create(request).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions/{id}",
    params(("id" = String, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "Subscription details", body = Subscription),
        (status = 404, description = "Subscription not found")
    ),
    tag = "subscriptions"
)]
#[tracing::instrument(skip(state))]
pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let subscription = state
        .db
        .subscriptions
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription".to_string()))?;
    Ok(Json(subscription))
}

#[utoipa::path(
    patch,
    path = "/api/subscriptions/{id}",
    params(("id" = String, Path, description = "Subscription id")),
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 200, description = "Updated subscription", body = Subscription),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Subscription not found")
    ),
    tag = "subscriptions"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .subscriptions
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription".to_string()))?;

    let subscription = state
        .db
        .subscriptions
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription".to_string()))?;
    Ok(Json(subscription))
}

#[utoipa::path(
    delete,
    path = "/api/subscriptions/{id}",
    params(("id" = String, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "Subscription deleted"),
        (status = 404, description = "Subscription not found")
    ),
    tag = "subscriptions"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .subscriptions
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription".to_string()))?;

    state.db.subscriptions.delete(&id).await?;
    Ok(deleted("Subscription"))
}
