//! TableHub Server — restaurant-management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tablehub_core::config::AppConfig;
use tablehub_core::error::AppError;

#[tokio::main]
async fn main() {
    // Config load validates required secrets; a missing PIN salt stops the
    // process here, before anything binds or connects.
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TableHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db_pool = tablehub_database::connection::create_pool(&config.database).await?;
    tablehub_database::migration::run_migrations(&db_pool).await?;

    // ── Repositories ─────────────────────────────────────────────
    let owner_repo = Arc::new(tablehub_database::repositories::owner::OwnerRepository::new(
        db_pool.clone(),
    ));
    let employee_repo = Arc::new(
        tablehub_database::repositories::employee::EmployeeRepository::new(db_pool.clone()),
    );
    let session_repo = Arc::new(
        tablehub_database::repositories::session::SessionRepository::new(db_pool.clone()),
    );
    let invite_repo = Arc::new(
        tablehub_database::repositories::invite::InviteRepository::new(db_pool.clone()),
    );
    let table_repo = Arc::new(tablehub_database::repositories::table::TableRepository::new(
        db_pool.clone(),
    ));
    let provisioner = Arc::new(tablehub_database::provision::AccountProvisioner::new(
        db_pool.clone(),
    ));

    // ── Auth core ────────────────────────────────────────────────
    let hasher = Arc::new(tablehub_auth::password::hasher::CredentialHasher::new(
        &config.auth,
    ));
    let strength = Arc::new(tablehub_auth::password::strength::PasswordStrengthChecker::new(
        &config.auth,
    )?);
    let invite_gate = Arc::new(tablehub_auth::invite::InviteGate::new(Arc::clone(
        &invite_repo,
    )));
    let session_validator = Arc::new(tablehub_auth::session::validator::SessionValidator::new(
        Arc::clone(&session_repo),
        Arc::clone(&owner_repo),
        Arc::clone(&employee_repo),
        config.session.ttl(),
    ));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(tablehub_service::auth::AuthService::new(
        Arc::clone(&owner_repo),
        Arc::clone(&employee_repo),
        Arc::clone(&session_repo),
        Arc::clone(&provisioner),
        Arc::clone(&invite_gate),
        Arc::clone(&hasher),
        Arc::clone(&strength),
        config.session.ttl(),
    ));
    let account_service = Arc::new(tablehub_service::account::AccountService::new(
        Arc::clone(&employee_repo),
        Arc::clone(&hasher),
    ));
    let table_service = Arc::new(tablehub_service::table::TableService::new(Arc::clone(
        &table_repo,
    )));

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = tablehub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        session_validator,
        auth_service,
        account_service,
        table_service,
    };

    let app = tablehub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("TableHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("TableHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
