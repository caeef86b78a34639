//! Document store abstraction
//!
//! The services in this workspace only ever need three primitives against a
//! schema-less collection: fetch one document by an equality selector,
//! insert a document, and overwrite the document matching a selector.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Equality match on a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub field: String,
    pub value: String,
}

impl Selector {
    /// Build a selector matching `field == value`
    pub fn field_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Access to a schema-less document collection
///
/// Implementations are shared via `Arc` across concurrent callers and must
/// be safe for concurrent use. No ordering is guaranteed across calls; the
/// backing store is the sole arbiter of per-document write isolation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the first document matching the selector.
    ///
    /// Returns [`StoreError::NotFound`] when no document matches.
    async fn find_one(&self, collection: &str, selector: &Selector) -> Result<Value, StoreError>;

    /// Insert a document into the collection
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError>;

    /// Overwrite the document matching the selector with `document`.
    ///
    /// This is a blind selector-based write: a missing document surfaces as
    /// [`StoreError::WriteFailed`], not as `NotFound`.
    async fn update(
        &self,
        collection: &str,
        selector: &Selector,
        document: Value,
    ) -> Result<(), StoreError>;
}
