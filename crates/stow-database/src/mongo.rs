//! MongoDB implementation of the [`DocumentStore`] trait

use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::{options::ClientOptions, Client, Database};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::StoreError;
use crate::store::{DocumentStore, Selector};

/// MongoDB-backed document store
///
/// Constructed once at startup and shared across all concurrent operations;
/// the driver's client is safe for concurrent use.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to MongoDB and verify the connection
    ///
    /// # Arguments
    ///
    /// * `host` - MongoDB connection string (e.g., "mongodb://localhost:27017")
    /// * `database` - Database name holding the collections
    pub async fn connect(host: &str, database: &str) -> Result<Self, StoreError> {
        debug!("Connecting to MongoDB at {}", host);

        let client_options = ClientOptions::parse(host).await.map_err(|e| {
            error!("Failed to parse MongoDB URL: {}", e);
            StoreError::ConnectionFailed(format!("Failed to parse MongoDB URL: {}", e))
        })?;

        let client = Client::with_options(client_options).map_err(|e| {
            error!("Failed to create MongoDB client: {}", e);
            StoreError::ConnectionFailed(format!("Failed to create MongoDB client: {}", e))
        })?;

        // Test connection
        client.list_database_names().await.map_err(|e| {
            error!("Failed to connect to MongoDB: {}", e);
            StoreError::ConnectionFailed(format!("Failed to connect to MongoDB: {}", e))
        })?;

        debug!("MongoDB client created successfully");

        Ok(Self {
            database: client.database(database),
        })
    }

    fn filter(selector: &Selector) -> Document {
        doc! { &selector.field: &selector.value }
    }

    fn to_document(value: &Value) -> Result<Document, StoreError> {
        bson::to_document(value).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_one(&self, collection: &str, selector: &Selector) -> Result<Value, StoreError> {
        debug!("findOne {} {}={}", collection, selector.field, selector.value);

        let coll = self.database.collection::<Document>(collection);

        let document = coll
            .find_one(Self::filter(selector))
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .ok_or(StoreError::NotFound)?;

        serde_json::to_value(&document).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        debug!("insert {}", collection);

        let coll = self.database.collection::<Document>(collection);
        let document = Self::to_document(&document)?;

        coll.insert_one(document)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        selector: &Selector,
        document: Value,
    ) -> Result<(), StoreError> {
        debug!("update {} {}={}", collection, selector.field, selector.value);

        let coll = self.database.collection::<Document>(collection);
        let document = Self::to_document(&document)?;

        let result = coll
            .replace_one(Self::filter(selector), document)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(StoreError::WriteFailed(format!(
                "no document matched {}={}",
                selector.field, selector.value
            )));
        }

        Ok(())
    }
}
