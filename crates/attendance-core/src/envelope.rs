//! JSON envelope shared by every error response.
//!
//! Success payloads are returned as-is; failures always render as
//! `{"status": "Error", "error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const STATUS_ERROR: &str = "Error";

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub status: &'static str,
    pub error: &'a str,
}

/// Render `message` as an error envelope with the given HTTP status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorEnvelope {
        status: STATUS_ERROR,
        error: message,
    };
    (status, Json(body)).into_response()
}
