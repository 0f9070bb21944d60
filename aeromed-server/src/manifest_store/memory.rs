//! In-memory manifest storage.
//!
//! Development fallback used when `DATABASE_URL` is not set, and the
//! backend the test suite runs against. Rows live in a `DashMap` and carry
//! an insertion sequence number so listings stay newest-first even when
//! two rows share a creation timestamp.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use super::{ManifestRecord, ManifestStoreError};

/// Row as held in memory: the record plus its insertion sequence.
struct MemoryRow {
    record: ManifestRecord,
    seq: u64,
}

/// In-memory manifest store (development fallback).
#[derive(Default)]
pub struct MemoryManifestStore {
    rows: DashMap<String, MemoryRow>,
    next_seq: AtomicU64,
}

impl MemoryManifestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new row. Fails with `Conflict` when the id is taken.
    pub(crate) fn insert(
        &self,
        id: &str,
        status: &str,
        content: String,
    ) -> Result<(), ManifestStoreError> {
        use dashmap::mapref::entry::Entry;

        match self.rows.entry(id.to_string()) {
            Entry::Occupied(_) => Err(ManifestStoreError::Conflict(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(MemoryRow {
                    record: ManifestRecord {
                        id: id.to_string(),
                        status: status.to_string(),
                        content,
                        created_at: Utc::now(),
                    },
                    seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
                });
                Ok(())
            }
        }
    }

    /// Fetch a row by id.
    pub(crate) fn fetch(&self, id: &str) -> Option<ManifestRecord> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// Replace status and content of an existing row, keeping `created_at`.
    pub(crate) fn replace(
        &self,
        id: &str,
        status: &str,
        content: String,
    ) -> Result<(), ManifestStoreError> {
        match self.rows.get_mut(id) {
            Some(mut row) => {
                row.record.status = status.to_string();
                row.record.content = content;
                Ok(())
            }
            None => Err(ManifestStoreError::NotFound),
        }
    }

    /// Remove a row. Returns whether it existed.
    pub(crate) fn remove(&self, id: &str) -> bool {
        self.rows.remove(id).is_some()
    }

    /// Snapshot all rows, newest-created first, optionally filtered by the
    /// denormalized status column.
    pub(crate) fn list(&self, status: Option<&str>) -> Vec<ManifestRecord> {
        let mut rows: Vec<(u64, ManifestRecord)> = self
            .rows
            .iter()
            .filter(|row| status.is_none_or(|s| row.record.status == s))
            .map(|row| (row.seq, row.record.clone()))
            .collect();

        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            (b.created_at, seq_b).cmp(&(a.created_at, seq_a))
        });

        rows.into_iter().map(|(_, record)| record).collect()
    }
}

impl std::fmt::Debug for MemoryManifestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryManifestStore")
            .field("rows", &self.rows.len())
            .finish()
    }
}
