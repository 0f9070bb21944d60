//! HTTP request handlers
//!
//! This module contains all the request handlers for the API endpoints.

pub mod health;
pub mod manifests;

pub use crate::state::AppState;
pub use health::{health, ready, HealthResponse, ReadyResponse};
pub use manifests::{
    create_manifest_handler, delete_manifest_handler, get_manifest_handler,
    list_manifests_handler, update_manifest_handler, DeleteManifestResponse, ListManifestsQuery,
};
