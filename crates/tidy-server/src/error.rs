//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tidy_core::TidyError;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, code: "not_found", message: msg.into() }
    }
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: "bad_request", message: msg.into() }
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "unprocessable",
            message: msg.into(),
        }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal_error",
            message: msg.into(),
        }
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

impl From<TidyError> for ApiError {
    fn from(err: TidyError) -> Self {
        match &err {
            TidyError::EmptyInput => ApiError::bad_request(err.to_string()),
            TidyError::InvalidStylesheet { errors } if !errors.is_empty() => {
                ApiError::unprocessable(errors.join(" "))
            }
            TidyError::InvalidStylesheet { .. } => ApiError::unprocessable(err.to_string()),
            TidyError::JsonSyntax { .. } => ApiError::unprocessable(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}
