//! JSON body extractor that treats a missing body as an empty object.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

/// Message returned when a JSON body cannot be parsed.
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Extracts `T` from a JSON request body without rejecting absent bodies.
///
/// - No `Content-Type`, a non-JSON `Content-Type`, or a blank body yields
///   `T::default()`, so field-level validation still produces its own message.
/// - A JSON body that is malformed or not an object is rejected with
///   400 `{"error": "Invalid JSON body"}`.
///
/// Use with request types whose fields are all optional.
///
/// ```ignore
/// #[derive(Deserialize, Default)]
/// struct CreateItem { name: Option<serde_json::Value> }
///
/// async fn create(LenientJson(body): LenientJson<CreateItem>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed JSON body");
            AppError::InvalidJson(INVALID_JSON_BODY.to_string())
        })?;

        if !value.is_object() {
            return Err(AppError::InvalidJson(INVALID_JSON_BODY.to_string()));
        }

        serde_json::from_value(value)
            .map(LenientJson)
            .map_err(|_| AppError::InvalidJson(INVALID_JSON_BODY.to_string()))
    }
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
