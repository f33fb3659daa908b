//! `AuthPrincipal` extractor — pulls the session cookie, validates the
//! token, and injects the resolved principal.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use tablehub_auth::session::validator::{AuthenticatedSession, SessionValidation};
use tablehub_core::error::AppError;
use tablehub_entity::account::Principal;

use crate::cookie;
use crate::dto::response::SuccessResponse;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// Validation runs against the store on every extraction, so sliding
/// renewal and expiry cleanup happen as a side effect of simply using this
/// extractor.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub AuthenticatedSession);

impl AuthPrincipal {
    /// The resolved principal.
    pub fn principal(&self) -> &Principal {
        &self.0.principal
    }

    /// The principal if it is an owner, otherwise an anti-enumeration 404.
    pub fn require_owner(&self) -> Result<&tablehub_entity::account::Owner, AppError> {
        match &self.0.principal {
            Principal::Owner(owner) => Ok(owner),
            Principal::Employee(_) => Err(AppError::not_found("not found")),
        }
    }
}

/// Rejection for an invalid or missing session: redirect-style status with
/// the cookie proactively cleared, `{"success": false}` in the body.
#[derive(Debug)]
pub struct AuthRejection {
    cookie_name: String,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let mut response =
            (StatusCode::FOUND, Json(SuccessResponse { success: false })).into_response();

        let headers = response.headers_mut();
        if let Ok(value) = cookie::clear_session_cookie(&self.cookie_name).parse() {
            headers.insert(SET_COOKIE, value);
        }
        headers.insert(LOCATION, axum::http::HeaderValue::from_static("/"));
        response
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = &state.config.session.cookie_name;
        let token = cookie::cookie_value(&parts.headers, cookie_name);

        let validation = state
            .session_validator
            .validate(token.as_deref())
            .await
            .map_err(|e| crate::error::ApiError::from(e).into_response())?;

        match validation {
            SessionValidation::Authenticated(authenticated) => Ok(AuthPrincipal(authenticated)),
            SessionValidation::Unauthenticated => Err(AuthRejection {
                cookie_name: cookie_name.clone(),
            }
            .into_response()),
        }
    }
}
