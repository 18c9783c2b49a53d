//! # Store Contracts
//!
//! The two storage seams of the service, as object-safe async traits.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Who Owns What                                     │
//! │                                                                         │
//! │  RecordStore  ── sole authority for existence and field values.         │
//! │                  Strongly consistent with its own subsequent reads.     │
//! │                                                                         │
//! │  SearchIndex  ── derived, possibly-stale projection keyed by the        │
//! │                  same id. Written AFTER the record store, best-effort.  │
//! │                  Queried with an opaque free-text query language.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sync service holds both seams as `Arc<dyn ...>` passed in through
//! its constructor; nothing here is global.

use async_trait::async_trait;
use thiserror::Error;

use crate::record::VacationRecord;

// =============================================================================
// Error Types
// =============================================================================

/// Failure inside the authoritative record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store backend rejected or failed the operation.
    #[error("record store error: {0}")]
    Backend(String),
}

/// Failure inside the derived search index.
///
/// Mirror writes that fail with this error are swallowed at the sync
/// service boundary; only index reads propagate it to callers.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The record carries no id, so there is nothing to key the entry by.
    #[error("cannot index a record without an id")]
    MissingId,

    /// The index backend rejected or failed the operation.
    #[error("search index error: {0}")]
    Backend(String),
}

// =============================================================================
// Record Store
// =============================================================================

/// Durable, authoritative persistence for vacation records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Saves a record. With no id: insert and assign a fresh identifier.
    /// With an id: overwrite the stored values in place.
    async fn save(&self, record: &VacationRecord) -> Result<VacationRecord, StoreError>;

    /// Fetches a record by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<VacationRecord>, StoreError>;

    /// Returns all stored records.
    async fn find_all(&self) -> Result<Vec<VacationRecord>, StoreError>;

    /// True when a record with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Deletes by id. A missing id is a no-op, not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

// =============================================================================
// Search Index
// =============================================================================

/// Secondary, eventually-consistent text-searchable copy of the records.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Upserts the index entry for a saved record (keyed by its id).
    async fn index(&self, record: &VacationRecord) -> Result<(), IndexError>;

    /// Removes the index entry for an id. Idempotent.
    async fn delete_by_id(&self, id: i64) -> Result<(), IndexError>;

    /// Runs a free-text query and returns the matching records.
    ///
    /// Match rules belong to the index implementation; callers treat the
    /// query string as opaque.
    async fn search(&self, query: &str) -> Result<Vec<VacationRecord>, IndexError>;
}
