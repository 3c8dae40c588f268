//! Shared HTTP edge helpers for the service routers.

use async_trait::async_trait;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Uniform JSON error body: `{ "error": <code>, "message": <text> }`.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// JSON body extractor that reads an absent body as `T::default()`.
///
/// No content-type is required. A body that is present but not valid JSON
/// for `T` is answered with 400.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| json_error(StatusCode::BAD_REQUEST, "malformed_body", e.to_string()))
    }
}
