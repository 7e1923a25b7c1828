//! JSON body extractor with domain error rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use jobspark_core::error::AppError;

use crate::error::ApiError;

/// Like `axum::Json`, but a malformed body becomes a 400 in the API's
/// error shape instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                Err(AppError::validation(format!("Invalid JSON body: {}", rejection.body_text())).into())
            }
        }
    }
}

impl<T> ApiJson<T>
where
    T: DeserializeOwned + Default,
{
    /// Parses a raw body that may be empty. A blank body yields `T::default()`.
    pub fn parse_or_default(body: &[u8]) -> Result<T, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected JSON body");
            AppError::validation(format!("Invalid JSON body: {e}")).into()
        })
    }
}
