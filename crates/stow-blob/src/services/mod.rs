//! Blob service implementation
//!
//! Backed by any [`stow_database::DocumentStore`]; the service is the sole
//! writer of the blob collection.

mod blob_service;

pub use blob_service::{Blob, BlobService, BLOB_COLLECTION};
