//! Request body extraction.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::ApiError;

/// JSON body read the way a form-tolerant body parser reads it.
///
/// An empty body, a missing or non-JSON content type, or a JSON value other
/// than an object all read as `{}`, so the handler reports missing inputs.
/// Syntax errors in a JSON body are unclassified failures.
pub struct LenientJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn parse_body(json: bool, bytes: &[u8]) -> Result<Value, ApiError> {
    if !json || bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Ok(Value::Object(Map::new())),
        Err(e) => Err(ApiError::Unclassified(e.to_string())),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(&req);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Unclassified(rejection.body_text()))?;
        let value = parse_body(json, &bytes)?;
        serde_json::from_value(value)
            .map(LenientJson)
            .map_err(|e| ApiError::Unclassified(e.to_string()))
    }
}
