//! stow-resume: time-limited access links for stored resume objects
//!
//! Issues read or write links for a user's resume: presigned S3 URLs in
//! production, deterministic local paths in development. Links are
//! ephemeral and recomputed on every request.

pub mod error;
pub mod services;

pub use error::ResumeError;
pub use services::{AccessMode, ObjectSigner, ResumeLink, ResumeService, S3Signer};
