//! Status mapping for the Postbox HTTP binding.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ErrorCode;
use crate::service::{ListAccountsResponse, LoginResponse, MessagesResponse, StatusResponse};

/// Get the HTTP status code for an error kind.
pub fn status_code(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A service response that may describe a failure.
pub trait Outcome {
    /// Error kind, if the operation failed.
    fn error_code(&self) -> Option<ErrorCode>;
}

impl Outcome for StatusResponse {
    fn error_code(&self) -> Option<ErrorCode> {
        self.error
    }
}

impl Outcome for LoginResponse {
    fn error_code(&self) -> Option<ErrorCode> {
        self.error
    }
}

impl Outcome for ListAccountsResponse {
    fn error_code(&self) -> Option<ErrorCode> {
        self.error
    }
}

impl Outcome for MessagesResponse {
    fn error_code(&self) -> Option<ErrorCode> {
        self.error
    }
}

/// JSON reply whose status follows the response's error kind.
#[derive(Debug)]
pub struct ApiReply<T>(pub T);

impl<T: Serialize + Outcome> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let status = self.0.error_code().map_or(StatusCode::OK, status_code);
        (status, Json(self.0)).into_response()
    }
}
