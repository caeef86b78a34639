//! Resume link service implementation

mod resume_service;
mod signer;

pub use resume_service::{ResumeLink, ResumeService};
pub use signer::{AccessMode, ObjectSigner, S3Signer};
