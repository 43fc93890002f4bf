use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::json::{self, json};

/// The content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Serializes `value` into a JSON response with the given status.
pub fn json_response<T: Serialize + ?Sized>(value: &T, status: StatusCode) -> Response {
    match json::to_vec(value) {
        Ok(body) => {
            let mut response = (status, body).into_response();
            let value = HeaderValue::from_static(JSON_CONTENT_TYPE);
            response.headers_mut().insert(CONTENT_TYPE, value);
            response
        },
        Err(why) => {
            error!("Failed to serialize response body: {why}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

/// A plain text response with the given status.
pub fn text_response(body: impl Into<String>, status: StatusCode) -> Response {
    (status, body.into()).into_response()
}

pub(crate) fn unknown_type() -> Response {
    json_response(&json!({"error": "Unknown Type"}), StatusCode::BAD_REQUEST)
}

pub(crate) fn bad_signature() -> Response {
    text_response("Bad request signature.", StatusCode::UNAUTHORIZED)
}

pub(crate) fn not_found() -> Response {
    text_response("Not Found.", StatusCode::NOT_FOUND)
}
