//! JSON body extractor with a 400 rejection.
//!
//! Axum's stock `Json` rejects undeserializable bodies with 422; the API
//! contract treats a missing or malformed field as a plain validation
//! failure, so this wrapper maps every body rejection to 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use tablehub_core::error::AppError;

use crate::error::ApiError;

/// `Json<T>` with validation-flavored rejections.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}
