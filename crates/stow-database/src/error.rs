//! Error types for the document store layer

use thiserror::Error;

/// Errors that can occur against the backing document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document matched the selector. Callers rely on this being
    /// distinguishable from other store failures.
    #[error("document not found")]
    NotFound,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// True when the error means "no matching document" rather than a
    /// genuine store failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
