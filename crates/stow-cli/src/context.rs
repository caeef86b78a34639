//! Application context construction
//!
//! The store handle and storage client are initialized once at startup and
//! shared read-only by every operation.

use std::sync::Arc;

use stow_blob::BlobService;
use stow_core::{DatabaseSettings, StorageSettings};
use stow_database::MongoStore;
use stow_resume::{ResumeService, S3Signer};
use tracing::debug;

/// Shared handles for the upload services
pub struct AppContext {
    pub blobs: BlobService,
    pub resumes: ResumeService,
}

impl AppContext {
    /// Connect to the document store, build the storage client, and wire up
    /// both services
    pub async fn initialize(
        storage: StorageSettings,
        database: DatabaseSettings,
    ) -> anyhow::Result<Self> {
        debug!(
            "Initializing services (database={}, bucket={}, production={})",
            database.database, storage.bucket, storage.production
        );

        let store = Arc::new(MongoStore::connect(&database.host, &database.database).await?);
        let signer = Arc::new(S3Signer::new(&storage).await);

        Ok(Self {
            blobs: BlobService::new(store),
            resumes: ResumeService::new(signer, storage.production),
        })
    }
}
