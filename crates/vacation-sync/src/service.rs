//! # The Synchronization Service
//!
//! Five mutations/reads over two stores, with one rule: the record store
//! commits first and its verdict is final; the search index is mirrored
//! second, best-effort.
//!
//! Each operation is a short-lived, non-overlapping unit of work scoped to
//! one record id where applicable. Operations on different ids run fully
//! in parallel; same-id writers are serialized by the record store's own
//! transaction isolation (last writer wins). The service itself holds no
//! state beyond the two store handles.

use std::sync::Arc;

use tracing::debug;

use vacation_core::{RecordStore, SearchIndex, VacationPatch, VacationRecord};

use crate::error::{SyncError, SyncResult};
use crate::mirror::{LogMirrorObserver, MirrorFault, MirrorObserver, MirrorOp};

// =============================================================================
// Service
// =============================================================================

/// Orchestrates dual writes across the record store and the search index.
///
/// Both stores arrive through the constructor; there is no global state
/// and no framework wiring.
///
/// ## Usage
/// ```rust,ignore
/// let service = SyncService::new(Arc::new(repo), Arc::new(index));
/// let created = service.create(record).await?;
/// ```
pub struct SyncService {
    records: Arc<dyn RecordStore>,
    index: Arc<dyn SearchIndex>,
    observer: Arc<dyn MirrorObserver>,
}

impl SyncService {
    /// Creates a service over the given stores with the default
    /// log-only mirror observer.
    pub fn new(records: Arc<dyn RecordStore>, index: Arc<dyn SearchIndex>) -> Self {
        SyncService {
            records,
            index,
            observer: Arc::new(LogMirrorObserver),
        }
    }

    /// Replaces the mirror observer (reconciliation hook).
    pub fn with_observer(mut self, observer: Arc<dyn MirrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Creates a new record.
    ///
    /// The record must not carry an id; the store assigns one. The index
    /// step is best-effort: a failure there leaves the create successful
    /// and the new record merely absent from search results.
    pub async fn create(&self, record: VacationRecord) -> SyncResult<VacationRecord> {
        debug!("Request to create vacation record");

        if record.id.is_some() {
            return Err(SyncError::IdAlreadyAssigned);
        }

        let stored = self.records.save(&record).await?;
        self.mirror_index(&stored).await;

        Ok(stored)
    }

    /// Replaces an existing record wholesale.
    ///
    /// The body id must be present, must equal `id`, and must name a
    /// stored record; a missing target is a hard [`SyncError::UnknownId`].
    pub async fn full_update(&self, id: i64, record: VacationRecord) -> SyncResult<VacationRecord> {
        debug!(id = id, "Request to update vacation record");

        let body_id = record.id.ok_or(SyncError::MissingId)?;
        if body_id != id {
            return Err(SyncError::IdMismatch {
                path_id: id,
                body_id,
            });
        }
        if !self.records.exists_by_id(id).await? {
            return Err(SyncError::UnknownId(id));
        }

        let stored = self.records.save(&record).await?;
        self.mirror_index(&stored).await;

        Ok(stored)
    }

    /// Merges supplied fields into an existing record.
    ///
    /// Returns `Ok(None)` when the target id does not exist - a soft miss,
    /// unlike [`SyncService::full_update`]'s hard failure. Unsupplied
    /// fields keep their stored values.
    pub async fn partial_update(
        &self,
        id: i64,
        patch: VacationPatch,
    ) -> SyncResult<Option<VacationRecord>> {
        debug!(id = id, "Request to partially update vacation record");

        let Some(mut existing) = self.records.find_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut existing);

        let stored = self.records.save(&existing).await?;
        self.mirror_index(&stored).await;

        Ok(Some(stored))
    }

    /// Deletes a record from both stores.
    ///
    /// The record store delete is authoritative and a no-op for an absent
    /// id; the index delete is attempted unconditionally (it is idempotent
    /// and the entry may exist even when the record does not).
    pub async fn delete(&self, id: i64) -> SyncResult<()> {
        debug!(id = id, "Request to delete vacation record");

        self.records.delete_by_id(id).await?;
        self.mirror_delete(id).await;

        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns all records. Record store only.
    pub async fn find_all(&self) -> SyncResult<Vec<VacationRecord>> {
        debug!("Request to get all vacation records");
        Ok(self.records.find_all().await?)
    }

    /// Returns one record by id. Record store only.
    pub async fn find_one(&self, id: i64) -> SyncResult<Option<VacationRecord>> {
        debug!(id = id, "Request to get vacation record");
        Ok(self.records.find_by_id(id).await?)
    }

    /// Runs a free-text query. Search index only; unlike mirror writes,
    /// a failing index read propagates to the caller.
    pub async fn search(&self, query: &str) -> SyncResult<Vec<VacationRecord>> {
        debug!(query = %query, "Request to search vacation records");
        Ok(self.index.search(query).await?)
    }

    // =========================================================================
    // Mirror Steps
    // =========================================================================

    /// Upserts the index entry for a committed record. Never fails the
    /// caller: faults are logged and handed to the observer.
    async fn mirror_index(&self, record: &VacationRecord) {
        if let Err(e) = self.index.index(record).await {
            self.observer.mirror_failed(&MirrorFault {
                id: record.id,
                op: MirrorOp::Index,
                error: e.to_string(),
            });
        }
    }

    /// Removes the index entry for a deleted id. Same isolation as
    /// [`SyncService::mirror_index`].
    async fn mirror_delete(&self, id: i64) {
        if let Err(e) = self.index.delete_by_id(id).await {
            self.observer.mirror_failed(&MirrorFault {
                id: Some(id),
                op: MirrorOp::Delete,
                error: e.to_string(),
            });
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
