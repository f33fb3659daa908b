//! Route definitions for the TableHub HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(auth_routes())
        .merge(table_routes())
        .merge(employee_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: signup, login, employee login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/employee-login", post(handlers::auth::employee_login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Dining table CRUD
fn table_routes() -> Router<AppState> {
    Router::new()
        .route("/tables", get(handlers::table::list_tables))
        .route("/tables", post(handlers::table::create_table))
        .route("/tables/{id}", delete(handlers::table::delete_table))
}

/// Employee management
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(handlers::employee::list_employees))
        .route("/employees", post(handlers::employee::create_employee))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
///
/// Credentials are always allowed because the session cookie is the auth
/// transport, which rules out wildcard origins.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};

    let cors_config = &state.config.server.cors;

    let origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
