//! Unified error handling for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orderflow_core::PrintError;
use serde_json::json;
use thiserror::Error;

use crate::source::DataError;

/// Application-level error type for the dashboard API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A data-layer query failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// A print job could not be assembled.
    #[error(transparent)]
    Print(#[from] PrintError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Data(DataError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Data(e) if e.is_remote() => StatusCode::BAD_GATEWAY,
            Self::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Print(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Dashboard request error");
        }

        // Remote failures carry the operation name the dashboard shows to the
        // user; anything else server-side stays opaque.
        let message = match &self {
            Self::Data(e) if !e.is_remote() && status.is_server_error() => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use orderflow_core::OrderId;

    use super::*;
    use crate::source::Operation;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Data(DataError::NotFound(OrderId::new("ORD-1")));
        assert_eq!(err.to_string(), "Order ORD-1 not found");

        let err = AppError::BadRequest("invalid date".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid date");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::Data(DataError::NotFound(OrderId::new("x")))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Data(DataError::Status {
                operation: Operation::Analytics,
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Data(DataError::Client("tls".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Print(PrintError::EmptySelection)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Data(DataError::InvalidSeed("dup".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
