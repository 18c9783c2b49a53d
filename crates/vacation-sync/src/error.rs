//! # Synchronization Error Types
//!
//! The error taxonomy exposed to callers of [`crate::SyncService`].
//!
//! Mirror-step failures are deliberately NOT part of this taxonomy: they
//! are isolated at the service boundary (see [`crate::mirror`]) and can
//! never fail an otherwise-valid mutation. Index READS are different -
//! `search` is a plain read against the index and its failure does
//! propagate.

use thiserror::Error;

use vacation_core::{IndexError, StoreError};

/// Errors surfaced by synchronization service operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Create was handed a record that already carries an id.
    ///
    /// Identifiers are assigned by the record store; a caller-assigned id
    /// signals a confused client, not an upsert request.
    #[error("a new vacation cannot already have an id")]
    IdAlreadyAssigned,

    /// An update body carried no id.
    #[error("update requires an id in the record body")]
    MissingId,

    /// Path id and body id disagree.
    #[error("path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i64, body_id: i64 },

    /// Full update targeted an id with no stored record.
    #[error("no vacation record with id {0}")]
    UnknownId(i64),

    /// The authoritative record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A search index READ failed (mirror writes never raise this).
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;
