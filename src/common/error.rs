// Error types callers use to present validation failures over HTTP

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationError, ValidationResult};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServer(String),
    ValidationError(Vec<ValidationError>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ValidationError(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "Validation Error: {}", messages.join(", "))
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// JSON error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ValidationError>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client; field errors keep their declaration order
    pub fn to_response_body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(msg) => ErrorResponse {
                error: msg.clone(),
                code: "BAD_REQUEST".to_string(),
                fields: Vec::new(),
            },
            ApiError::InternalServer(msg) => ErrorResponse {
                error: msg.clone(),
                code: "INTERNAL_SERVER_ERROR".to_string(),
                fields: Vec::new(),
            },
            ApiError::ValidationError(errors) => ErrorResponse {
                error: "Validation failed".to_string(),
                code: "VALIDATION_ERROR".to_string(),
                fields: errors.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::InternalServer(msg) = &self {
            error!(error = %msg, "Internal error while validating input");
        }

        (self.status(), Json(self.to_response_body())).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::ValidationError(result.errors)
        }
    }
}
