//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use tablehub_auth::session::validator::SessionValidator;
use tablehub_core::config::AppConfig;
use tablehub_service::account::AccountService;
use tablehub_service::auth::AuthService;
use tablehub_service::table::TableService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Session validator (token to principal)
    pub session_validator: Arc<SessionValidator>,
    /// Signup/login/logout orchestration
    pub auth_service: Arc<AuthService>,
    /// Employee management
    pub account_service: Arc<AccountService>,
    /// Table management
    pub table_service: Arc<TableService>,
}
