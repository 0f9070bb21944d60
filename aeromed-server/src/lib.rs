//! AeroMed Server Library - REST API components for transport manifests
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod config;
pub mod error;
pub mod handlers;
pub mod manifest_store;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use handlers::{DeleteManifestResponse, HealthResponse, ListManifestsQuery, ReadyResponse};
pub use manifest_store::{
    ManifestRecord, ManifestStore, ManifestStoreError, MemoryManifestStore, PostgresManifestStore,
};
pub use openapi::ApiDoc;
pub use routes::{create_router, create_router_with_config};
pub use state::AppState;
