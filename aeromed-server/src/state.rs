//! Application state module
//!
//! Defines shared state accessible across all request handlers.

use std::sync::Arc;

use crate::manifest_store::ManifestStore;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Manifest store (PostgreSQL or in-memory fallback)
    pub store: Arc<ManifestStore>,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: ManifestStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
