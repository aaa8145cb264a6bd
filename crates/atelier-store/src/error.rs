//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / poisoned lock                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key / path context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (storefront app) ← Serialized for frontend                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate adds, removing a missing item and toggling an unknown id never
//! produce a `StoreError`.

use thiserror::Error;

/// Persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value backend could not complete a read or write.
    #[error("Storage backend failed: {0}")]
    Backend(String),

    /// File-backed storage hit an I/O error.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persisted value could not be understood.
    ///
    /// ## When This Occurs
    /// - Only with `MalformedStatePolicy::Fail`
    /// - The value under `key` is not valid JSON of the expected shape
    /// - A persisted cart line has a quantity outside 1..=99
    #[error("Persisted value under '{key}' is malformed: {reason}")]
    MalformedState { key: String, reason: String },
}

impl StoreError {
    /// Backend error for a poisoned lock.
    pub(crate) fn poisoned(what: &str) -> Self {
        StoreError::Backend(format!("{} lock poisoned", what))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
