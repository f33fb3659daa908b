//! Dining table handlers (owner-only).

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use tablehub_core::error::AppError;

use crate::dto::request::CreateTableRequest;
use crate::dto::response::{SuccessResponse, TableResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthPrincipal};
use crate::state::AppState;

/// POST /tables
pub async fn create_table(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    ApiJson(req): ApiJson<CreateTableRequest>,
) -> Result<Json<TableResponse>, ApiError> {
    let owner = auth.require_owner()?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let table = state
        .table_service
        .create_table(owner.restaurant_id, &req.name)
        .await?;

    Ok(Json(table.into()))
}

/// GET /tables
pub async fn list_tables(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<TableResponse>>, ApiError> {
    let restaurant_id = auth.principal().restaurant_id();

    let tables = state.table_service.list_tables(restaurant_id).await?;

    Ok(Json(tables.into_iter().map(Into::into).collect()))
}

/// DELETE /tables/{id}
pub async fn delete_table(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(table_id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let owner = auth.require_owner()?;

    state
        .table_service
        .delete_table(owner.restaurant_id, table_id)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
