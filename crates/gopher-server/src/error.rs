//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gopher_core::{GopherError, TranslationError};
use serde_json::json;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: "bad_request", message: msg.into() }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: "internal_error", message: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: err.kind().as_str(),
            message: format!("Translation failed: {err}"),
        }
    }
}

impl From<GopherError> for ApiError {
    fn from(err: GopherError) -> Self {
        ApiError::internal(err.to_string())
    }
}
