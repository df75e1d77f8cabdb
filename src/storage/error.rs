//! Persistence error types.

use thiserror::Error;

/// Errors that can occur when writing structured values to the store.
///
/// Read-side failures (missing or corrupt values) are not errors: they
/// degrade to the empty default and are never surfaced.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serializing a structured value failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
