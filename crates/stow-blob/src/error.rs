//! Error types for the blob service

use stow_database::StoreError;
use thiserror::Error;

/// Errors that can occur in the blob service
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("blob already exists: {0}")]
    AlreadyExists(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store error: {0}")]
    Store(StoreError),
}
