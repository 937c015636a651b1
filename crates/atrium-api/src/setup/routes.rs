//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use anyhow::Result;
use atrium_core::Config;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Build the application router with all API routes and middleware.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let cors = setup_cors(config);

    let app = api_routes()
        .route("/health", get(handlers::health::health_check))
        .merge(
            RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/docs"),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// CORS configuration. Wide-open origins are allowed but flagged in the log.
fn setup_cors(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    }
}

/// All /api resource routes.
///
/// Every resource exposes the same list/create/get/update/delete shape,
/// except audit logs which are append-only and have no PATCH route.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::users::get_user)
                .patch(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/api/organizations",
            get(handlers::organizations::list_organizations)
                .post(handlers::organizations::create_organization),
        )
        .route(
            "/api/organizations/{id}",
            get(handlers::organizations::get_organization)
                .patch(handlers::organizations::update_organization)
                .delete(handlers::organizations::delete_organization),
        )
        .route(
            "/api/teams",
            get(handlers::teams::list_teams).post(handlers::teams::create_team),
        )
        .route(
            "/api/teams/{id}",
            get(handlers::teams::get_team)
                .patch(handlers::teams::update_team)
                .delete(handlers::teams::delete_team),
        )
        .route(
            "/api/subscriptions",
            get(handlers::subscriptions::list_subscriptions)
                .post(handlers::subscriptions::create_subscription),
        )
        .route(
            "/api/subscriptions/{id}",
            get(handlers::subscriptions::get_subscription)
                .patch(handlers::subscriptions::update_subscription)
                .delete(handlers::subscriptions::delete_subscription),
        )
        .route(
            "/api/invoices",
            get(handlers::invoices::list_invoices).post(handlers::invoices::create_invoice),
        )
        .route(
            "/api/invoices/{id}",
            get(handlers::invoices::get_invoice)
                .patch(handlers::invoices::update_invoice)
                .delete(handlers::invoices::delete_invoice),
        )
        .route(
            "/api/audit-logs",
            get(handlers::audit_logs::list_audit_logs)
                .post(handlers::audit_logs::create_audit_log),
        )
        .route(
            "/api/audit-logs/{id}",
            get(handlers::audit_logs::get_audit_log)
                .delete(handlers::audit_logs::delete_audit_log),
        )
        .route(
            "/api/organization-members",
            get(handlers::org_members::list_organization_members)
                .post(handlers::org_members::create_organization_member),
        )
        .route(
            "/api/organization-members/{id}",
            get(handlers::org_members::get_organization_member)
                .patch(handlers::org_members::update_organization_member)
                .delete(handlers::org_members::delete_organization_member),
        )
}
