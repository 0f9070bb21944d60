//! AeroMed Server - REST API for drone medical cargo transport manifests
//!
//! Exposes the manifest lifecycle over HTTP:
//! - GET    /manifests        - List manifests, newest first
//! - POST   /manifests        - Create a manifest
//! - GET    /manifests/{id}   - Fetch a manifest
//! - PUT    /manifests/{id}   - Replace a manifest (re-derives status)
//! - DELETE /manifests/{id}   - Remove a manifest
//! - GET    /health, /ready   - Service probes
//! - GET    /docs             - Swagger UI

use tracing_subscriber::EnvFilter;

use aeromed_server::{create_router_with_config, AppState, Config, ManifestStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = match config.database_url.as_deref() {
        Some(url) => {
            tracing::info!("Using PostgreSQL manifest storage");
            ManifestStore::with_postgres(
                url,
                config.database_max_connections,
                config.database_min_connections,
            )
            .await
            .expect("Failed to initialize manifest store")
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage - manifests will be lost on restart!");
            ManifestStore::in_memory()
        }
    };

    let state = AppState::new(store);
    let app = create_router_with_config(&config, state);

    let addr = config.socket_addr();
    tracing::info!("AeroMed manifest server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
