//! JSON response shaping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Headers attached to every response, preflight included
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type, X-BR-API-KEY"),
    ("content-type", "application/json"),
];

/// Pretty-printed JSON body with the CORS header set
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(json) => (status, CORS_HEADERS, json).into_response(),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORS_HEADERS,
                r#"{"error": "Failed to serialize response"}"#,
            )
                .into_response()
        }
    }
}

/// Empty-bodied answer to a CORS preflight
pub fn preflight_response() -> Response {
    (StatusCode::OK, CORS_HEADERS).into_response()
}
