//! Errors a client can provoke, rendered as `{"status":"error","message":...}`.

use crate::api::schemas::{ErrorBody, Status};
use crate::core::positions::UnknownPosition;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid position")]
    InvalidPosition,

    #[error("No force value provided")]
    MissingForceValue,

    #[error("Force value must be a number")]
    InvalidForceValue,

    #[error("`Host` header is missing")]
    MissingHost,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<UnknownPosition> for ApiError {
    fn from(_: UnknownPosition) -> Self {
        ApiError::InvalidPosition
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: Status::Error,
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
