//! Auth handlers — signup, login, employee login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use validator::Validate;

use tablehub_core::error::AppError;
use tablehub_service::auth::AuthOutcome;

use crate::cookie;
use crate::dto::request::{EmployeeLoginRequest, LoginRequest, SignupRequest};
use crate::dto::response::{AccountResponse, SuccessResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthPrincipal};
use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> Result<Response, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .auth_service
        .signup(&req.email, &req.password, &req.invite_code)
        .await?;

    Ok(respond_with_session(&state, outcome))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Response, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(respond_with_session(&state, outcome))
}

/// POST /auth/employee-login
pub async fn employee_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<EmployeeLoginRequest>,
) -> Result<Response, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .auth_service
        .employee_login(req.restaurant_id, &req.name, &req.pin)
        .await?;

    Ok(respond_with_session(&state, outcome))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let cookie_name = &state.config.session.cookie_name;
    let Some(token) = cookie::cookie_value(&headers, cookie_name) else {
        return Err(AppError::validation("session cookie is required").into());
    };

    state.auth_service.logout(&token).await?;

    Ok((
        [(SET_COOKIE, cookie::clear_session_cookie(cookie_name))],
        Json(SuccessResponse::ok()),
    )
        .into_response())
}

/// GET /auth/me
pub async fn me(auth: AuthPrincipal) -> Json<AccountResponse> {
    Json(AccountResponse::from(auth.principal()))
}

/// Build the success response for a fresh login/signup: the public account
/// projection plus the session cookie.
fn respond_with_session(state: &AppState, outcome: AuthOutcome) -> Response {
    let cookie = cookie::session_cookie(
        &state.config.session.cookie_name,
        &outcome.token,
        outcome.session.expires_at,
    );

    (
        [(SET_COOKIE, cookie)],
        Json(AccountResponse::from(&outcome.principal)),
    )
        .into_response()
}
