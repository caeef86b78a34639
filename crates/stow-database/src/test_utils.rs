//! Test utilities for the document store layer
//!
//! Provides an in-memory [`DocumentStore`] so service crates can exercise
//! their semantics without a running MongoDB instance.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::{DocumentStore, Selector};

/// In-memory document store for unit tests
///
/// Matches the MongoDB implementation's observable contract: `find_one`
/// returns [`StoreError::NotFound`] on no match, `update` reports a missing
/// document as a write failure.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `find_one` calls fail with a non-NotFound error,
    /// simulating a store outage
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every document in a collection
    pub async fn documents(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: &str) -> usize {
        self.documents(collection).await.len()
    }

    fn matches(document: &Value, selector: &Selector) -> bool {
        document
            .get(&selector.field)
            .and_then(Value::as_str)
            .map(|v| v == selector.value)
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(&self, collection: &str, selector: &Selector) -> Result<Value, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::QueryFailed("simulated outage".to_string()));
        }

        let collections = self.collections.lock().await;

        collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| Self::matches(d, selector)))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        selector: &Selector,
        document: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;

        let documents = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::WriteFailed("no such collection".to_string()))?;

        let slot = documents
            .iter_mut()
            .find(|d| Self::matches(d, selector))
            .ok_or_else(|| {
                StoreError::WriteFailed(format!(
                    "no document matched {}={}",
                    selector.field, selector.value
                ))
            })?;

        *slot = document;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_one_not_found() {
        let store = MemoryStore::new();
        let selector = Selector::field_eq("id", "missing");

        let err = store.find_one("things", &selector).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_insert_then_find_one() {
        let store = MemoryStore::new();
        store
            .insert("things", json!({"id": "t1", "name": "widget"}))
            .await
            .unwrap();

        let found = store
            .find_one("things", &Selector::field_eq("id", "t1"))
            .await
            .unwrap();
        assert_eq!(found["name"], "widget");
    }

    #[tokio::test]
    async fn test_update_missing_is_write_failure() {
        let store = MemoryStore::new();
        store.insert("things", json!({"id": "t1"})).await.unwrap();

        let err = store
            .update("things", &Selector::field_eq("id", "t2"), json!({"id": "t2"}))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::WriteFailed(_)));
    }

    #[tokio::test]
    async fn test_fail_reads_is_not_not_found() {
        let store = MemoryStore::new();
        store.fail_reads(true);

        let err = store
            .find_one("things", &Selector::field_eq("id", "t1"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::QueryFailed(_)));
    }
}
