//! stow-blob: schema-less metadata records ("blobs") for the Stow platform
//!
//! Provides the blob store manager: lookup, guarded creation, full replace,
//! and shallow partial merge over a single document collection.

pub mod error;
pub mod services;

pub use error::BlobError;
pub use services::{Blob, BlobService};
