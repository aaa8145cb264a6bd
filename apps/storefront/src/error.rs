//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_to_cart', { id })                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ─── CoreError::ArtworkNotFound ───────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Write failed? ─── StoreError::Backend ─────────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code = "NOT_FOUND", e.message = "Artwork not found: a9"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate adds and toggling an unknown favorite are not errors; the
//! frontend learns about them from notifications.

use serde::Serialize;
use tracing::error;

use atelier_core::{CoreError, ValidationError};
use atelier_store::StoreError;

use crate::config::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Artwork not found: a9"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Artwork does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Reading or writing shopper state failed
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedState { key, reason } => {
                error!(%key, %reason, "Persisted state is malformed");
                ApiError::new(
                    ErrorCode::StorageError,
                    format!("Saved {} data could not be read", key),
                )
            }
            StoreError::Serialization(e) => {
                error!("State serialization failed: {}", e);
                ApiError::internal("Could not encode shopper state")
            }
            other => {
                // Log the actual error but return a generic message
                error!("Storage operation failed: {}", other);
                ApiError::new(ErrorCode::StorageError, "Could not save your changes")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ArtworkNotFound(id) => ApiError::not_found("Artwork", &id),
            CoreError::DuplicateArtwork(id) => {
                error!(artwork_id = %id, "Catalog contains a duplicate id");
                ApiError::internal("Catalog is inconsistent")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Result type for storefront commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Artwork", "a9");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["code"], "NOT_FOUND");
        assert_eq!(value["message"], "Artwork not found: a9");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ArtworkNotFound("a9".into()));
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = ApiError::from(ValidationError::NotAllowed {
            field: "category".into(),
            allowed: vec!["all".into(), "oil".into()],
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("category must be one of"));
    }

    #[test]
    fn test_store_error_hides_details() {
        let err = ApiError::from(StoreError::Backend("disk full at /dev/sda1".into()));
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("sda1"));

        let err = ApiError::from(StoreError::MalformedState {
            key: "cart".into(),
            reason: "expected `[`".into(),
        });
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Saved cart data could not be read");
    }
}
