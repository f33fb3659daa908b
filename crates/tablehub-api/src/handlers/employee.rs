//! Employee management handlers (owner-only).

use axum::Json;
use axum::extract::State;
use validator::Validate;

use tablehub_core::error::AppError;

use crate::dto::request::CreateEmployeeRequest;
use crate::dto::response::EmployeeResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthPrincipal};
use crate::state::AppState;

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    ApiJson(req): ApiJson<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let owner = auth.require_owner()?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let employee = state
        .account_service
        .create_employee(owner.restaurant_id, &req.name, &req.pin)
        .await?;

    Ok(Json(employee.into()))
}

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let owner = auth.require_owner()?;

    let employees = state
        .account_service
        .list_employees(owner.restaurant_id)
        .await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}
