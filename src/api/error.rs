//! API error responses.
//!
//! Every failure the API emits has the wire shape `{"error": "<message>"}`.
//! This module provides the fixed messages for validation and load failures
//! and carries storage error text through for create failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Fixed message for creation requests missing a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "produceName, tonnage, and cost are required";

/// Fixed message for request bodies that fail to parse as JSON.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON payload";

/// Fixed message for list requests that cannot load the collection.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load procurement data";

/// An API error response: HTTP status plus the `error` message body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

/// Wire body for error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// 400 - a required creation field is missing.
    pub fn missing_fields() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: REQUIRED_FIELDS_MESSAGE.to_string(),
        }
    }

    /// 400 - the request body is not valid JSON.
    pub fn invalid_payload() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_PAYLOAD_MESSAGE.to_string(),
        }
    }

    /// 500 - the collection could not be loaded; cause not exposed.
    pub fn load_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    /// 500 - a storage failure during create; the error text is exposed.
    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
