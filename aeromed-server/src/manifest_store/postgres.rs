//! PostgreSQL implementation of the manifest store.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

use super::{ManifestRecord, ManifestStoreError};

/// PostgreSQL-backed manifest store.
#[derive(Clone)]
pub struct PostgresManifestStore {
    pool: PgPool,
}

/// Row type for database queries.
#[derive(FromRow)]
struct ManifestRow {
    id: String,
    status: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<ManifestRow> for ManifestRecord {
    fn from(row: ManifestRow) -> Self {
        Self {
            id: row.id,
            status: row.status,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

impl PostgresManifestStore {
    /// Create a new manifest store with the given database URL.
    ///
    /// Runs migrations automatically on connection.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, ManifestStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect(database_url)
            .await
            .map_err(|e| ManifestStoreError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| ManifestStoreError::Migration(e.to_string()))?;

        tracing::info!("Manifest store connected and migrations applied");

        Ok(Self { pool })
    }

    /// Create a manifest store from an existing pool (for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new row. Fails with `Conflict` when the id is taken.
    pub(crate) async fn insert(
        &self,
        id: &str,
        status: &str,
        content: &str,
    ) -> Result<(), ManifestStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO manifests (id, status, content)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(content)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(ManifestStoreError::Conflict(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a row by id.
    pub(crate) async fn fetch(
        &self,
        id: &str,
    ) -> Result<Option<ManifestRecord>, ManifestStoreError> {
        let row: Option<ManifestRow> = sqlx::query_as(
            r#"
            SELECT id, status, content, created_at
            FROM manifests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Replace status and content of an existing row.
    pub(crate) async fn replace(
        &self,
        id: &str,
        status: &str,
        content: &str,
    ) -> Result<(), ManifestStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE manifests
            SET status = $2, content = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(content)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ManifestStoreError::NotFound);
        }
        Ok(())
    }

    /// Remove a row. Returns whether it existed.
    pub(crate) async fn remove(&self, id: &str) -> Result<bool, ManifestStoreError> {
        let result = sqlx::query("DELETE FROM manifests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All rows, newest-created first, optionally filtered by the
    /// denormalized status column.
    pub(crate) async fn list(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<ManifestRecord>, ManifestStoreError> {
        let rows: Vec<ManifestRow> = if let Some(status) = status {
            sqlx::query_as(
                r#"
                SELECT id, status, content, created_at
                FROM manifests
                WHERE status = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(status)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as(
                r#"
                SELECT id, status, content, created_at
                FROM manifests
                ORDER BY created_at DESC
                "#,
            )
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Check database connectivity.
    pub(crate) async fn check_health(&self) -> Result<(), ManifestStoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ManifestStoreError::Connection(e.to_string()))?;
        Ok(())
    }
}
