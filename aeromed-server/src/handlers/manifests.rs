//! Manifest CRUD handlers
//!
//! Handles listing, creating, retrieving, updating, and deleting transport
//! manifests. Documents travel as full camelCase JSON; updates replace the
//! stored document wholesale after status derivation — there are no
//! partial-field patch semantics.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use aeromed_core::{derive_status, ManifestStatus, TransportManifest};

use crate::error::ApiError;
use crate::handlers::AppState;

/// Query parameters for listing manifests
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListManifestsQuery {
    /// Filter by lifecycle status (Draft, PreFlightSigned, InTransit,
    /// Delivered, Completed, Rejected)
    #[param(value_type = Option<String>)]
    pub status: Option<ManifestStatus>,
}

/// Response for manifest deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteManifestResponse {
    /// Whether the manifest was removed
    pub success: bool,
}

/// List manifests
///
/// Returns all manifests, newest-created first. Records whose stored
/// content fails to parse are omitted rather than failing the listing.
#[utoipa::path(
    get,
    path = "/manifests",
    tag = "Manifests",
    params(ListManifestsQuery),
    responses(
        (status = 200, description = "All manifests, newest first", body = [serde_json::Value])
    )
)]
pub async fn list_manifests_handler(
    State(state): State<AppState>,
    Query(query): Query<ListManifestsQuery>,
) -> Result<Json<Vec<TransportManifest>>, ApiError> {
    let docs = state.store.list(query.status).await?;
    Ok(Json(docs))
}

/// Create a manifest
///
/// Persists a new manifest under its caller-supplied id. The status is
/// stored as given (a missing status defaults to Draft); creation never
/// runs status derivation.
#[utoipa::path(
    post,
    path = "/manifests",
    tag = "Manifests",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Stored manifest", body = serde_json::Value),
        (status = 400, description = "Missing id"),
        (status = 409, description = "Duplicate id")
    )
)]
pub async fn create_manifest_handler(
    State(state): State<AppState>,
    Json(doc): Json<TransportManifest>,
) -> Result<(StatusCode, Json<TransportManifest>), ApiError> {
    let stored = state.store.create(&doc).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Get a manifest by id
#[utoipa::path(
    get,
    path = "/manifests/{id}",
    tag = "Manifests",
    params(
        ("id" = String, Path, description = "Manifest id")
    ),
    responses(
        (status = 200, description = "The manifest", body = serde_json::Value),
        (status = 404, description = "Manifest not found")
    )
)]
pub async fn get_manifest_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransportManifest>, ApiError> {
    let doc = state.store.get(&id).await?;
    Ok(Json(doc))
}

/// Update a manifest
///
/// Derives the lifecycle status from the submitted document (pre-flight
/// signatures and destination result), then replaces the stored document
/// wholesale. The row is selected by the path id.
#[utoipa::path(
    put,
    path = "/manifests/{id}",
    tag = "Manifests",
    params(
        ("id" = String, Path, description = "Manifest id")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Updated manifest", body = serde_json::Value),
        (status = 404, description = "Manifest not found")
    )
)]
pub async fn update_manifest_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut doc): Json<TransportManifest>,
) -> Result<Json<TransportManifest>, ApiError> {
    doc.status = derive_status(&doc);
    let updated = state.store.update(&id, &doc).await?;
    Ok(Json(updated))
}

/// Delete a manifest
///
/// Removes the record entirely; there is no soft delete or audit trail.
#[utoipa::path(
    delete,
    path = "/manifests/{id}",
    tag = "Manifests",
    params(
        ("id" = String, Path, description = "Manifest id")
    ),
    responses(
        (status = 200, description = "Manifest removed", body = DeleteManifestResponse),
        (status = 404, description = "Manifest not found")
    )
)]
pub async fn delete_manifest_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteManifestResponse>, ApiError> {
    state.store.delete(&id).await?;
    Ok(Json(DeleteManifestResponse { success: true }))
}
