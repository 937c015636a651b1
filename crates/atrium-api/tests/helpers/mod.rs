use atrium_api::handlers;
use atrium_api::setup::routes;
use atrium_api::state::AppState;
use axum::routing::get;
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Boot the full API router over a fresh in-memory database.
///
/// The pool is returned alongside the server so tests can assert directly
/// against storage. A single connection keeps the in-memory database alive
/// and shared for the test's duration.
pub async fn spawn_server() -> (TestServer, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = Arc::new(AppState::new(pool.clone()));
    let app = routes::api_routes()
        .route("/health", get(handlers::health::health_check))
        .with_state(state);

    let server = TestServer::new(app).expect("failed to start test server");
    (server, pool)
}
