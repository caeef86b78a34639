//! Error types for the resume link service

use thiserror::Error;

/// Errors that can occur when issuing resume links
#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("link generation failed: {0}")]
    LinkGeneration(String),
}
