//! Resume link issuance

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResumeError;
use crate::services::signer::{AccessMode, ObjectSigner};

/// Presigned links stay valid for this long
const LINK_TTL: Duration = Duration::from_secs(15 * 60);

/// Directory standing in for the object store during local development
const LOCAL_UPLOAD_DIR: &str = "/tmp/uploads";

/// An access descriptor for a user's resume
///
/// `link` is a presigned URL or a local path. Constructed fresh per request
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeLink {
    pub id: String,
    pub link: String,
}

/// Issues read or write access links for resume objects
///
/// Issuance is unconditional: no existence check is made against the object
/// store, and no state is held between calls.
pub struct ResumeService {
    signer: Arc<dyn ObjectSigner>,
    production: bool,
}

impl ResumeService {
    /// Create a new resume service
    ///
    /// When `production` is false, links resolve to deterministic local
    /// filesystem paths instead of presigned URLs.
    pub fn new(signer: Arc<dyn ObjectSigner>, production: bool) -> Self {
        Self { signer, production }
    }

    fn object_key(id: &str) -> String {
        format!("resumes/{}.pdf", id)
    }

    fn local_path(id: &str) -> String {
        format!("{}/{}.pdf", LOCAL_UPLOAD_DIR, id)
    }

    /// Issue a link granting read access to the user's resume
    pub async fn download_link(&self, id: &str) -> Result<ResumeLink, ResumeError> {
        self.issue(AccessMode::Read, id).await
    }

    /// Issue a link granting write access to the user's resume
    pub async fn upload_link(&self, id: &str) -> Result<ResumeLink, ResumeError> {
        self.issue(AccessMode::Write, id).await
    }

    async fn issue(&self, mode: AccessMode, id: &str) -> Result<ResumeLink, ResumeError> {
        debug!("RESUME LINK {:?} {}", mode, id);

        let link = if self.production {
            self.signer
                .presign(mode, &Self::object_key(id), LINK_TTL)
                .await?
        } else {
            Self::local_path(id)
        };

        Ok(ResumeLink {
            id: id.to_string(),
            link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Signer that records every presign request
    #[derive(Default)]
    struct RecordingSigner {
        calls: Mutex<Vec<(AccessMode, String, Duration)>>,
        fail: bool,
    }

    impl RecordingSigner {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ObjectSigner for RecordingSigner {
        async fn presign(
            &self,
            mode: AccessMode,
            key: &str,
            ttl: Duration,
        ) -> Result<String, ResumeError> {
            if self.fail {
                return Err(ResumeError::LinkGeneration("expired credentials".into()));
            }
            self.calls.lock().await.push((mode, key.to_string(), ttl));
            Ok(format!("https://signed.example/{}", key))
        }
    }

    #[tokio::test]
    async fn test_development_links_are_local_paths() {
        let signer = Arc::new(RecordingSigner::default());
        let service = ResumeService::new(signer.clone(), false);

        let download = service.download_link("u1").await.unwrap();
        let upload = service.upload_link("u1").await.unwrap();

        assert_eq!(download.link, "/tmp/uploads/u1.pdf");
        assert_eq!(upload.link, "/tmp/uploads/u1.pdf");
        assert_eq!(download.id, "u1");

        // No call ever reaches the object store in development
        assert!(signer.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_production_links_request_distinct_access_modes() {
        let signer = Arc::new(RecordingSigner::default());
        let service = ResumeService::new(signer.clone(), true);

        let download = service.download_link("u1").await.unwrap();
        let upload = service.upload_link("u1").await.unwrap();

        assert_eq!(download.link, "https://signed.example/resumes/u1.pdf");
        assert_eq!(upload.link, "https://signed.example/resumes/u1.pdf");

        let calls = signer.calls.lock().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, AccessMode::Read);
        assert_eq!(calls[1].0, AccessMode::Write);
        // Same key, same validity window for both intents
        assert_eq!(calls[0].1, "resumes/u1.pdf");
        assert_eq!(calls[1].1, "resumes/u1.pdf");
        assert_eq!(calls[0].2, Duration::from_secs(900));
        assert_eq!(calls[1].2, Duration::from_secs(900));
    }

    #[tokio::test]
    async fn test_presign_failure_propagates() {
        let signer = Arc::new(RecordingSigner::failing());
        let service = ResumeService::new(signer, true);

        let err = service.download_link("u1").await.unwrap_err();
        assert!(matches!(err, ResumeError::LinkGeneration(_)));
    }

    #[tokio::test]
    async fn test_identifier_is_not_validated() {
        let signer = Arc::new(RecordingSigner::default());
        let service = ResumeService::new(signer, false);

        let link = service.download_link("any id goes").await.unwrap();
        assert_eq!(link.link, "/tmp/uploads/any id goes.pdf");
    }
}
