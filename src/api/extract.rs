//! Request body extraction for the arithmetic endpoints.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;

/// JSON request body, defaulting to an empty object.
///
/// The body is parsed only when the request declares a JSON content type
/// and carries at least one byte. Otherwise it is `{}`, which then fails
/// operand validation like any other body without `a` and `b`.
/// Malformed JSON and oversized bodies keep axum's own rejections.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for OperandBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !is_json || bytes.is_empty() {
            debug!(is_json, "No JSON body, treating as empty object");
            return Ok(Self(Value::Object(Map::new())));
        }

        let Json(value) = Json::<Value>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(Self(value))
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
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

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
