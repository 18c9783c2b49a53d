//! # Best-Effort Mirror Step
//!
//! The second half of the dual-write pipeline: propagating a committed
//! record store mutation into the search index, with the failure isolation
//! the contract demands.
//!
//! ## Why an Observer Hook
//! There is no retry and no automatic reconciliation here - that is an
//! explicit gap, not a hidden one. The [`MirrorObserver`] seam exists so a
//! reconciliation or retry job can be layered on later (subscribe, collect
//! faults, re-derive index entries) without touching the service contract.

use std::sync::Arc;

use tracing::warn;

// =============================================================================
// Mirror Faults
// =============================================================================

/// Which index write was being attempted when the fault occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOp {
    /// Upserting an index entry after create/update.
    Index,
    /// Removing an index entry after delete.
    Delete,
}

/// A swallowed search index write failure.
#[derive(Debug, Clone)]
pub struct MirrorFault {
    /// The record id involved, when known.
    pub id: Option<i64>,
    /// The write that failed.
    pub op: MirrorOp,
    /// Backend error text.
    pub error: String,
}

// =============================================================================
// Observer Hook
// =============================================================================

/// Receives every swallowed mirror fault.
///
/// Implementations must be cheap and must not fail; they run inline on the
/// request path after the primary commit has already succeeded.
pub trait MirrorObserver: Send + Sync {
    fn mirror_failed(&self, fault: &MirrorFault);
}

/// Default observer: a structured warning log and nothing else.
#[derive(Debug, Default)]
pub struct LogMirrorObserver;

impl MirrorObserver for LogMirrorObserver {
    fn mirror_failed(&self, fault: &MirrorFault) {
        warn!(
            id = ?fault.id,
            op = ?fault.op,
            error = %fault.error,
            "Search index mirror write failed; record store remains authoritative"
        );
    }
}

/// Shared observer handle used by the service.
pub type ObserverHandle = Arc<dyn MirrorObserver>;

// =============================================================================
// Unit Tests
// =============================================================================
