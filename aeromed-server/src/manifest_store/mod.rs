//! Manifest store module: durable keyed storage for transport manifests.
//!
//! Each manifest is persisted as one record holding the serialized
//! document plus a denormalized status column used for listing and
//! filtering. The document is the single source of truth; the column is
//! rewritten from `doc.status` on every write inside this module, so the
//! two can never disagree after a successful write.
//!
//! Two backends share identical observable semantics:
//! - **PostgreSQL** (production): set `DATABASE_URL`
//! - **In-memory** (development fallback and tests)

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::ManifestStoreError;
pub use memory::MemoryManifestStore;
pub use postgres::PostgresManifestStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aeromed_core::{validate_for_create, ManifestStatus, TransportManifest};

/// A manifest record as stored in the backing table.
///
/// `status` mirrors the TEXT column: a projection of `content.status`,
/// never authoritative on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Caller-supplied identifier, unique across the store
    pub id: String,
    /// Denormalized copy of `content.status`
    pub status: String,
    /// Serialized `TransportManifest`
    pub content: String,
    /// Creation timestamp; sole sort key for listings (descending)
    pub created_at: DateTime<Utc>,
}

/// Storage backend selection.
enum StoreBackend {
    /// PostgreSQL storage (production)
    Postgres(PostgresManifestStore),
    /// In-memory storage (development fallback)
    Memory(MemoryManifestStore),
}

/// Manifest store dispatching to the configured backend.
///
/// All operations are independent, atomic units of work; concurrent
/// updates to the same id are last-write-wins at the storage layer.
pub struct ManifestStore {
    backend: StoreBackend,
}

impl ManifestStore {
    /// Create a store with a PostgreSQL backend.
    pub async fn with_postgres(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, ManifestStoreError> {
        let store =
            PostgresManifestStore::new(database_url, max_connections, min_connections).await?;
        Ok(Self {
            backend: StoreBackend::Postgres(store),
        })
    }

    /// Create a store from an existing PostgreSQL pool (for testing).
    pub fn from_pg_pool(pool: sqlx::PgPool) -> Self {
        Self {
            backend: StoreBackend::Postgres(PostgresManifestStore::from_pool(pool)),
        }
    }

    /// Create a store with an in-memory backend (development and tests).
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::Memory(MemoryManifestStore::new()),
        }
    }

    /// Whether the store survives a restart.
    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, StoreBackend::Postgres(_))
    }

    /// Check backend health (always Ok for the memory backend).
    pub async fn check_health(&self) -> Result<(), ManifestStoreError> {
        match &self.backend {
            StoreBackend::Postgres(pg) => pg.check_health().await,
            StoreBackend::Memory(_) => Ok(()),
        }
    }

    /// Persist a new manifest.
    ///
    /// Requires a non-empty `doc.id` (`Validation` otherwise) and a free
    /// slot for it (`Conflict` otherwise). The document is stored verbatim
    /// with `created_at := now`; create does **not** run status
    /// derivation, so `doc.status` is persisted as given.
    pub async fn create(
        &self,
        doc: &TransportManifest,
    ) -> Result<TransportManifest, ManifestStoreError> {
        validate_for_create(doc)?;
        let content = serde_json::to_string(doc)?;

        match &self.backend {
            StoreBackend::Postgres(pg) => {
                pg.insert(&doc.id, doc.status.as_str(), &content).await?
            }
            StoreBackend::Memory(mem) => mem.insert(&doc.id, doc.status.as_str(), content.clone())?,
        }

        tracing::debug!(id = %doc.id, status = %doc.status, "Stored manifest");

        parse_content(&content)
    }

    /// Fetch the manifest stored under `id`.
    ///
    /// `NotFound` when no record exists; `Serialization` when the stored
    /// content no longer parses (distinct from `NotFound` so callers can
    /// tell a corrupt row from a missing one).
    pub async fn get(&self, id: &str) -> Result<TransportManifest, ManifestStoreError> {
        let record = match &self.backend {
            StoreBackend::Postgres(pg) => pg.fetch(id).await?,
            StoreBackend::Memory(mem) => mem.fetch(id),
        }
        .ok_or(ManifestStoreError::NotFound)?;

        parse_content(&record.content)
    }

    /// Replace the manifest stored under `id` wholesale.
    ///
    /// The status column is rewritten from `doc.status`; callers run
    /// status derivation before handing the document over. `created_at`
    /// is immutable and keeps its original value.
    pub async fn update(
        &self,
        id: &str,
        doc: &TransportManifest,
    ) -> Result<TransportManifest, ManifestStoreError> {
        let content = serde_json::to_string(doc)?;

        match &self.backend {
            StoreBackend::Postgres(pg) => {
                pg.replace(id, doc.status.as_str(), &content).await?
            }
            StoreBackend::Memory(mem) => mem.replace(id, doc.status.as_str(), content.clone())?,
        }

        tracing::debug!(id = %id, status = %doc.status, "Updated manifest");

        parse_content(&content)
    }

    /// Delete the manifest stored under `id`.
    ///
    /// Strict, not idempotent: deleting a missing id is `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<(), ManifestStoreError> {
        let removed = match &self.backend {
            StoreBackend::Postgres(pg) => pg.remove(id).await?,
            StoreBackend::Memory(mem) => mem.remove(id),
        };

        if !removed {
            return Err(ManifestStoreError::NotFound);
        }

        tracing::debug!(id = %id, "Deleted manifest");
        Ok(())
    }

    /// All manifests, newest-created first, optionally filtered by status.
    ///
    /// A record whose content fails to parse is skipped with a warning so
    /// one corrupt row never takes the whole listing down.
    pub async fn list(
        &self,
        status: Option<ManifestStatus>,
    ) -> Result<Vec<TransportManifest>, ManifestStoreError> {
        let status = status.map(|s| s.as_str());
        let records = match &self.backend {
            StoreBackend::Postgres(pg) => pg.list(status).await?,
            StoreBackend::Memory(mem) => mem.list(status),
        };

        Ok(records
            .into_iter()
            .filter_map(|record| match serde_json::from_str(&record.content) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(id = %record.id, error = %e, "Skipping unparseable manifest content");
                    None
                }
            })
            .collect())
    }
}

impl std::fmt::Debug for ManifestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match &self.backend {
            StoreBackend::Postgres(_) => "PostgreSQL",
            StoreBackend::Memory(_) => "Memory",
        };
        f.debug_struct("ManifestStore")
            .field("backend", &backend)
            .finish()
    }
}

fn parse_content(content: &str) -> Result<TransportManifest, ManifestStoreError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeromed_core::derive_status;

    fn doc(id: &str) -> TransportManifest {
        let mut doc = TransportManifest::default();
        doc.id = id.into();
        doc.unit_name = "Rural Health Unit 4".into();
        doc
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = ManifestStore::in_memory();
        let mut d = doc("MAN-001");
        d.status = ManifestStatus::InTransit;
        d.anomalies = "minor turbulence".into();

        let stored = store.create(&d).await.unwrap();
        assert_eq!(stored, d);

        let fetched = store.get("MAN-001").await.unwrap();
        assert_eq!(fetched, d);

        // Reads are idempotent with no intervening writes.
        let again = store.get("MAN-001").await.unwrap();
        assert_eq!(again, fetched);
    }

    #[tokio::test]
    async fn create_without_id_persists_nothing() {
        let store = ManifestStore::in_memory();
        let err = store.create(&TransportManifest::default()).await.unwrap_err();
        assert!(matches!(err, ManifestStoreError::Validation(msg) if msg == "missing id"));
        assert!(store.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_id_conflicts() {
        let store = ManifestStore::in_memory();
        store.create(&doc("MAN-001")).await.unwrap();

        let err = store.create(&doc("MAN-001")).await.unwrap_err();
        assert!(matches!(err, ManifestStoreError::Conflict(id) if id == "MAN-001"));
    }

    #[tokio::test]
    async fn update_projects_status_into_the_column() {
        let store = ManifestStore::in_memory();
        store.create(&doc("MAN-001")).await.unwrap();

        let mut d = doc("MAN-001");
        d.pre_flight.signatures.sender.signed = true;
        d.pre_flight.signatures.pilot.signed = true;
        d.status = derive_status(&d);
        let updated = store.update("MAN-001", &d).await.unwrap();
        assert_eq!(updated.status, ManifestStatus::PreFlightSigned);

        // The denormalized column agrees: filtering on it finds the row.
        let filtered = store
            .list(Some(ManifestStatus::PreFlightSigned))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "MAN-001");
        assert!(store.list(Some(ManifestStatus::Draft)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = ManifestStore::in_memory();
        let err = store.update("ghost", &doc("ghost")).await.unwrap_err();
        assert!(matches!(err, ManifestStoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = ManifestStore::in_memory();
        store.create(&doc("MAN-001")).await.unwrap();

        store.delete("MAN-001").await.unwrap();
        assert!(matches!(
            store.get("MAN-001").await.unwrap_err(),
            ManifestStoreError::NotFound
        ));
        // Strict delete: a second delete is NotFound, not a no-op success.
        assert!(matches!(
            store.delete("MAN-001").await.unwrap_err(),
            ManifestStoreError::NotFound
        ));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = ManifestStore::in_memory();
        for id in ["MAN-001", "MAN-002", "MAN-003"] {
            store.create(&doc(id)).await.unwrap();
        }

        let ids: Vec<_> = store
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["MAN-003", "MAN-002", "MAN-001"]);
    }

    #[tokio::test]
    async fn list_skips_corrupt_rows() {
        let store = ManifestStore::in_memory();
        for id in ["MAN-001", "MAN-002", "MAN-003"] {
            store.create(&doc(id)).await.unwrap();
        }

        // Corrupt the middle row at the storage layer.
        let StoreBackend::Memory(mem) = &store.backend else {
            unreachable!()
        };
        mem.replace("MAN-002", "Draft", "{definitely not json".into())
            .unwrap();

        let ids: Vec<_> = store
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["MAN-003", "MAN-001"]);
    }

    #[tokio::test]
    async fn get_corrupt_row_is_a_serialization_error() {
        let store = ManifestStore::in_memory();
        store.create(&doc("MAN-001")).await.unwrap();

        let StoreBackend::Memory(mem) = &store.backend else {
            unreachable!()
        };
        mem.replace("MAN-001", "Draft", "not json at all".into())
            .unwrap();

        assert!(matches!(
            store.get("MAN-001").await.unwrap_err(),
            ManifestStoreError::Serialization(_)
        ));
    }
}
