//! Configuration management utilities

use serde::{Deserialize, Serialize};

/// Default AWS region when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";
/// Default bucket holding uploaded resumes
pub const DEFAULT_BUCKET: &str = "stow-uploads";
/// Default MongoDB connection string for local development
pub const DEFAULT_DB_HOST: &str = "mongodb://localhost:27017";
/// Default database name
pub const DEFAULT_DB_NAME: &str = "stow";

/// Object storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// AWS region (e.g., "us-east-1")
    pub region: String,
    /// Bucket holding uploaded objects
    pub bucket: String,
    /// Custom endpoint for MinIO/S3-compatible storage
    pub endpoint: Option<String>,
    /// Static access key; falls back to the ambient credential chain when unset
    pub access_key_id: Option<String>,
    /// Static secret key; falls back to the ambient credential chain when unset
    pub secret_access_key: Option<String>,
    /// When false, link issuance falls back to local filesystem paths
    pub production: bool,
}

impl StorageSettings {
    /// Read storage settings from the environment
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("S3_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            endpoint: std::env::var("S3_ENDPOINT").ok(),
            access_key_id: std::env::var("S3_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY").ok(),
            production: std::env::var("IS_PRODUCTION")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

/// Document database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// MongoDB connection string
    pub host: String,
    /// Database name
    pub database: String,
}

impl DatabaseSettings {
    /// Read database settings from the environment
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("UPLOAD_DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
            database: std::env::var("UPLOAD_DB_NAME")
                .unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
    }
}
