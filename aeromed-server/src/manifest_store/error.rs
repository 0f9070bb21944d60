//! Error types for the manifest store module.

use aeromed_core::ManifestError;
use thiserror::Error;

/// Errors that can occur when interacting with the manifest store.
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    /// Database connection failed
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// SQL query execution failed
    #[error("Query error: {0}")]
    Query(String),

    /// Requested manifest was not found
    #[error("Manifest not found")]
    NotFound,

    /// A manifest with the same id already exists
    #[error("Manifest already exists: {0}")]
    Conflict(String),

    /// Document failed create validation
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Stored content could not be serialized or parsed back
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sqlx::Error> for ManifestStoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Query(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ManifestStoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(e.to_string())
    }
}

impl From<serde_json::Error> for ManifestStoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<ManifestError> for ManifestStoreError {
    fn from(e: ManifestError) -> Self {
        match e {
            ManifestError::Validation(msg) => Self::Validation(msg),
        }
    }
}
