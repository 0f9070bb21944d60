//! API error handling module
//!
//! Provides a unified error type for all API endpoints with structured error variants.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::manifest_store::ManifestStoreError;

/// API error type with structured variants for different error categories
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - client provided invalid input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found - requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict - resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request timeout - operation took too long
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Internal server error - unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Service unavailable - required service is not configured or available
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Manifest store error - error from the persistence layer
    #[error("Store error: {0}")]
    Store(#[from] ManifestStoreError),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(ref e) => match e {
                // Client-side structural outcomes
                ManifestStoreError::Validation(_) => StatusCode::BAD_REQUEST,
                ManifestStoreError::NotFound => StatusCode::NOT_FOUND,
                ManifestStoreError::Conflict(_) => StatusCode::CONFLICT,

                // Backing store unavailable → 503
                ManifestStoreError::Connection(_) | ManifestStoreError::Migration(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }

                // Everything else is an internal failure
                ManifestStoreError::Query(_) | ManifestStoreError::Serialization(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Get the error code for programmatic error handling
    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Store(ref e) => match e {
                ManifestStoreError::Validation(_) => "INVALID_INPUT",
                ManifestStoreError::NotFound => "NOT_FOUND",
                ManifestStoreError::Conflict(_) => "CONFLICT",
                ManifestStoreError::Connection(_) | ManifestStoreError::Migration(_) => {
                    "SERVICE_UNAVAILABLE"
                }
                ManifestStoreError::Query(_) | ManifestStoreError::Serialization(_) => {
                    "INTERNAL_ERROR"
                }
            },
        }
    }

    /// Get sanitized error message for client response
    fn client_message(&self) -> String {
        match self {
            // Never leak SQL or connection details to clients
            Self::Store(ref e) => match e {
                ManifestStoreError::Validation(msg) => msg.clone(),
                ManifestStoreError::NotFound => "Manifest not found".to_string(),
                ManifestStoreError::Conflict(id) => {
                    format!("Manifest already exists: {}", id)
                }
                ManifestStoreError::Connection(_) | ManifestStoreError::Migration(_) => {
                    "Storage unavailable".to_string()
                }
                ManifestStoreError::Query(_) => "Storage error".to_string(),
                ManifestStoreError::Serialization(_) => {
                    "Stored manifest content is unreadable".to_string()
                }
            },
            // For other errors, use the Display message
            _ => self.to_string(),
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Timeout(_) => "timeout",
            Self::Internal(_) => "internal",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Store(_) => "store",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_category();
        let code = self.error_code();
        let internal_message = self.to_string();
        let client_message = self.client_message();

        // Log based on severity, always including internal details
        if status.is_client_error() {
            tracing::warn!(
                status = %status,
                category = category,
                code = code,
                error = %internal_message,
                "Client error"
            );
        } else {
            tracing::error!(
                status = %status,
                category = category,
                code = code,
                error = %internal_message,
                client_message = %client_message,
                "Server error"
            );
        }

        // All error responses include a `code` field for programmatic error handling
        let body = serde_json::json!({
            "error": client_message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_distinct_statuses() {
        let cases = [
            (ManifestStoreError::Validation("missing id".into()), StatusCode::BAD_REQUEST),
            (ManifestStoreError::NotFound, StatusCode::NOT_FOUND),
            (ManifestStoreError::Conflict("m1".into()), StatusCode::CONFLICT),
            (ManifestStoreError::Connection("refused".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ManifestStoreError::Query("syntax".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ManifestStoreError::Serialization("eof".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn query_details_are_not_leaked() {
        let err = ApiError::from(ManifestStoreError::Query(
            "SELECT * FROM manifests WHERE secret".into(),
        ));
        assert_eq!(err.client_message(), "Storage error");
    }
}
