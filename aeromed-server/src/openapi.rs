//! OpenAPI documentation configuration
//!
//! Generates OpenAPI 3.0 specification for the AeroMed Manifest API.

use utoipa::OpenApi;

use crate::handlers::{DeleteManifestResponse, HealthResponse, ReadyResponse};

/// AeroMed Manifest API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AeroMed Manifest API",
        version = "0.1.0",
        description = r#"
## Drone Medical Cargo Transport Manifests

Record-keeping API for drone-based medical cargo transport. Each manifest
is a full multi-section document (sender/receiver, mission, cargo,
pre-flight checklist, item list, handover log, temperature log,
destination certification) stored as one opaque JSON unit keyed by a
caller-supplied id.

### Lifecycle

A manifest starts as `Draft`. On every update the lifecycle status is
re-derived from the document itself: both pre-flight signatures signed
yields `PreFlightSigned`, a destination result of `Complete` yields
`Completed`, and `Rejected` yields `Rejected` (later rules win).
`InTransit` and `Delivered` are set directly by dispatch actions and
carried through unchanged.
"#,
        license(
            name = "MIT OR Apache-2.0",
            url = "https://github.com/aeromed-labs/aeromed-manifest/blob/main/LICENSE"
        ),
        contact(
            name = "AeroMed Labs",
            url = "https://github.com/aeromed-labs/aeromed-manifest"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "Manifests", description = "Create, list, update, and delete transport manifests"),
        (name = "Health", description = "Service health and readiness endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::health::ready,
        crate::handlers::manifests::list_manifests_handler,
        crate::handlers::manifests::create_manifest_handler,
        crate::handlers::manifests::get_manifest_handler,
        crate::handlers::manifests::update_manifest_handler,
        crate::handlers::manifests::delete_manifest_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            DeleteManifestResponse,
        )
    )
)]
pub struct ApiDoc;
