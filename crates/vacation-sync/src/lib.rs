//! # vacation-sync: Dual-Write Synchronization Service
//!
//! This crate is the **heart** of the vacation service. It owns the only
//! part of the system with real design content: the ordering and failure
//! contract between the authoritative record store and the derived search
//! index.
//!
//! ## The Dual-Write Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every Mutation, Two Steps                            │
//! │                                                                         │
//! │  create / full_update / partial_update / delete                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────┐   commit fails → caller gets the error,          │
//! │  │ 1. commit primary │                  index is never touched          │
//! │  │    (RecordStore)  │                                                  │
//! │  └─────────┬─────────┘                                                  │
//! │            │ commit succeeded - the operation is now a success,         │
//! │            │ nothing below can change that                              │
//! │            ▼                                                            │
//! │  ┌───────────────────┐   mirror fails → warn! + MirrorObserver,         │
//! │  │ 2. mirror         │                  caller still sees success,      │
//! │  │    (SearchIndex)  │                  index stays stale until the     │
//! │  └───────────────────┘                  next mutation of that record    │
//! │                                                                         │
//! │  Reads never cross stores: find_all/find_one hit the record store,      │
//! │  search hits the index. There is NO automatic reconciliation path.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - The `SyncService` operations
//! - [`mirror`] - Best-effort mirror step and the `MirrorObserver` hook
//! - [`error`] - Operation error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod mirror;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SyncError, SyncResult};
pub use mirror::{LogMirrorObserver, MirrorFault, MirrorObserver, MirrorOp};
pub use service::SyncService;
