//! Translates handler results into HTTP responses.
//!
//! Handlers return [`HandlerResult`]. `Ok` becomes a 200 JSON body; `Err(AppError)` is
//! classified and written as the uniform `{message, code}` envelope.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::AppError;

pub type HandlerResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

/// Every JSON body rejection is a BadRequest, including bodies over the size limit.
pub fn body_rejection(rejection: JsonRejection) -> AppError {
    let message = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        "request body too large"
    } else {
        "invalid request body"
    };
    AppError::bad_request_wrapped(rejection, message)
}

/// First matching predicate wins: Unauthorized, BadRequest, NotFound, Forbidden, else Internal.
pub fn status_for(err: &AppError) -> StatusCode {
    if err.is_unauthorized() {
        StatusCode::UNAUTHORIZED
    } else if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_forbidden() {
        StatusCode::FORBIDDEN
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// Internal causes (driver errors etc.) stay in the logs.
fn public_message(err: &AppError, status: StatusCode) -> String {
    if status.is_server_error() {
        err.message()
            .map(str::to_string)
            .unwrap_or_else(|| "internal server error".to_string())
    } else {
        err.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        if status.is_server_error() {
            error!(error = %self, kind = ?self.kind(), "request failed");
        } else {
            debug!(error = %self, kind = ?self.kind(), status = status.as_u16(), "request rejected");
        }

        let body = ErrorResponse {
            message: public_message(&self, status),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
