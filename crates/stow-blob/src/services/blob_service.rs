//! Blob service implementation with a document-store backend

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stow_database::{DocumentStore, Selector, StoreError};
use tracing::debug;

use crate::error::BlobError;

/// Collection holding all blob records
pub const BLOB_COLLECTION: &str = "blobstore";

/// A schema-less metadata record keyed by a caller-assigned id
///
/// `data` is an arbitrary JSON object; nested values are opaque to the
/// service and never merged recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub id: String,
    pub data: Value,
}

impl Blob {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Blob service for metadata record lifecycle
///
/// Operations are single round trips against the backing store. `create`'s
/// existence check and `update_partial`'s read-modify-write are not atomic:
/// callers needing atomicity for a given id must serialize updates to it
/// themselves.
pub struct BlobService {
    store: Arc<dyn DocumentStore>,
}

impl BlobService {
    /// Create a new blob service over a shared document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn selector(id: &str) -> Selector {
        Selector::field_eq("id", id)
    }

    /// Fetch the blob with the given id
    pub async fn get(&self, id: &str) -> Result<Blob, BlobError> {
        debug!("BLOB GET {}", id);

        let document = self
            .store
            .find_one(BLOB_COLLECTION, &Self::selector(id))
            .await
            .map_err(|e| match e {
                StoreError::NotFound => BlobError::NotFound(id.to_string()),
                other => BlobError::Store(other),
            })?;

        serde_json::from_value(document).map_err(|e| BlobError::Serialization(e.to_string()))
    }

    /// Create and store a blob
    ///
    /// Fails with [`BlobError::AlreadyExists`] when a blob with the same id
    /// is already present; any lookup failure other than "not found"
    /// propagates unchanged.
    pub async fn create(&self, blob: Blob) -> Result<(), BlobError> {
        debug!("BLOB CREATE {}", blob.id);

        match self.get(&blob.id).await {
            Ok(_) => return Err(BlobError::AlreadyExists(blob.id)),
            Err(BlobError::NotFound(_)) => {}
            Err(other) => return Err(other),
        }

        let document = to_document(&blob)?;

        self.store
            .insert(BLOB_COLLECTION, document)
            .await
            .map_err(BlobError::Store)
    }

    /// Overwrite the blob with the given id with the full supplied record
    ///
    /// All keys in `data` are replaced, not merged. The write is a blind
    /// selector-based update: a missing id surfaces as a store failure.
    pub async fn replace(&self, blob: Blob) -> Result<(), BlobError> {
        debug!("BLOB REPLACE {}", blob.id);

        let document = to_document(&blob)?;

        self.store
            .update(BLOB_COLLECTION, &Self::selector(&blob.id), document)
            .await
            .map_err(BlobError::Store)
    }

    /// Merge partial data into the blob with the given id
    ///
    /// Shallow, last-writer-wins, key-level merge: every top-level key of
    /// the partial record overwrites (or inserts) the matching key of the
    /// stored record; keys absent from the partial record survive. Nested
    /// objects and arrays are opaque leaf values, never merged recursively.
    ///
    /// Fails with [`BlobError::NotFound`] when the blob cannot be fetched.
    pub async fn update_partial(&self, partial: Blob) -> Result<(), BlobError> {
        debug!("BLOB PATCH {}", partial.id);

        // Lookup failures are collapsed: callers only learn the blob is missing.
        let existing = match self.get(&partial.id).await {
            Ok(blob) => blob,
            Err(_) => return Err(BlobError::NotFound(partial.id)),
        };

        let mut merged = flatten(&existing.data)?;
        let incoming = flatten(&partial.data)?;

        for (key, value) in incoming {
            merged.insert(key, value);
        }

        self.replace(Blob {
            id: partial.id,
            data: Value::Object(merged),
        })
        .await
    }
}

fn to_document(blob: &Blob) -> Result<Value, BlobError> {
    serde_json::to_value(blob).map_err(|e| BlobError::Serialization(e.to_string()))
}

/// Flatten blob data into its top-level key mapping
fn flatten(data: &Value) -> Result<Map<String, Value>, BlobError> {
    match data {
        Value::Object(map) => Ok(map.clone()),
        other => Err(BlobError::Serialization(format!(
            "blob data must be a JSON object, got {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
