//! Health check handler.

use axum::Json;
use axum::extract::State;

use tablehub_database::connection;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let database_ok = connection::health_check(&state.db_pool).await.unwrap_or(false);

    Ok(Json(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
