//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tablehub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable reason string.
    pub error: String,
}

/// HTTP-facing wrapper around the domain error.
///
/// Handlers return this so that `?` on any fallible call produces the
/// canonical status and body mapping.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        let status = match &err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            // Bad credentials and dead sessions are indistinguishable from
            // "no such account" on purpose.
            ErrorKind::NotFound | ErrorKind::Authentication => StatusCode::NOT_FOUND,
            ErrorKind::ExternalService | ErrorKind::ServiceUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal details never reach the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            err.message.clone()
        };

        let body = ApiErrorResponse {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_409() {
        let response = ApiError::from(AppError::conflict("invite code has expired")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_and_authentication_both_map_to_404() {
        for err in [
            AppError::not_found("account not found"),
            AppError::authentication("dead session"),
        ] {
            assert_eq!(ApiError::from(err).into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_external_service_maps_to_503() {
        let response =
            ApiError::from(AppError::external_service("breach lookup failed")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_error_hides_details() {
        let response =
            ApiError::from(AppError::database("SELECT blew up on table owners")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
