//! Object storage signing collaborator

use std::time::Duration;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Region, SharedCredentialsProvider};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use stow_core::StorageSettings;
use tracing::debug;

use crate::error::ResumeError;

/// Access scope requested from the object store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// Produces pre-authorized, time-bounded URLs for objects
///
/// Implementations are shared via `Arc` and must be safe for concurrent use.
#[async_trait]
pub trait ObjectSigner: Send + Sync {
    /// Presign a URL granting `mode` access to the object at `key`,
    /// valid for `ttl` from issuance
    async fn presign(
        &self,
        mode: AccessMode,
        key: &str,
        ttl: Duration,
    ) -> Result<String, ResumeError>;
}

/// S3-backed signer
pub struct S3Signer {
    client: Client,
    bucket: String,
}

impl S3Signer {
    /// Build an S3 signer from storage settings
    ///
    /// Uses static credentials when the settings carry them, the ambient
    /// credential chain otherwise. A custom endpoint switches the client to
    /// path-style addressing for MinIO compatibility.
    pub async fn new(settings: &StorageSettings) -> Self {
        debug!("Creating S3 signer for region: {}", settings.region);

        let mut config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));

        if let (Some(access_key), Some(secret_key)) =
            (&settings.access_key_id, &settings.secret_access_key)
        {
            let credentials = Credentials::new(
                access_key.as_str(),
                secret_key.as_str(),
                None,
                None,
                "stow-resume",
            );
            config_builder =
                config_builder.credentials_provider(SharedCredentialsProvider::new(credentials));
        }

        if let Some(endpoint) = &settings.endpoint {
            config_builder = config_builder.endpoint_url(endpoint);
        }

        let config = config_builder.load().await;
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&config);

        if settings.endpoint.is_some() {
            s3_config_builder = s3_config_builder.force_path_style(true);
        }

        let client = Client::from_conf(s3_config_builder.build());

        Self {
            client,
            bucket: settings.bucket.clone(),
        }
    }

    /// Build a signer over an existing client
    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectSigner for S3Signer {
    async fn presign(
        &self,
        mode: AccessMode,
        key: &str,
        ttl: Duration,
    ) -> Result<String, ResumeError> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| ResumeError::LinkGeneration(e.to_string()))?;

        debug!("PRESIGN {:?} {}/{}", mode, self.bucket, key);

        let uri = match mode {
            AccessMode::Read => self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .presigned(presigning)
                .await
                .map_err(|e| ResumeError::LinkGeneration(e.to_string()))?
                .uri()
                .to_string(),
            AccessMode::Write => self
                .client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .presigned(presigning)
                .await
                .map_err(|e| ResumeError::LinkGeneration(e.to_string()))?
                .uri()
                .to_string(),
        };

        Ok(uri)
    }
}
