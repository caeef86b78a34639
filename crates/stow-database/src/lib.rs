//! stow-database: document store access for the Stow upload services
//!
//! Exposes the [`DocumentStore`] trait consumed by the service crates and a
//! MongoDB-backed implementation. Documents cross the trait boundary as
//! `serde_json::Value`; the backing driver owns durability and per-document
//! write ordering.

pub mod error;
mod mongo;
mod store;

// Export test utilities for use by other crates in their tests
pub mod test_utils;

pub use error::StoreError;
pub use mongo::MongoStore;
pub use store::{DocumentStore, Selector};
