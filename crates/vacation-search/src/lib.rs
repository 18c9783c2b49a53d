//! # vacation-search: Search Index for the Vacation Service
//!
//! The derived, text-searchable copy of the record store. Entries are keyed
//! by the same id as the authoritative record and may lag behind it: a
//! failed mirror write leaves the index stale until a later mutation of the
//! same record resynchronizes it.
//!
//! ## How Search Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FTS5 Search Flow                                   │
//! │                                                                         │
//! │  User query: "2026-08"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sanitize → `"2026-08"`  (every token quoted, FTS syntax disarmed)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ documents_fts (FTS5, external content)  │                           │
//! │  │                                         │                           │
//! │  │ 1 | 2026-08-01T... | 2026-08-15T...    │ ← MATCH!                   │
//! │  │ 2 | 2027-01-02T... | 2027-01-09T...    │                            │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  join back to documents, ORDER BY rank                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`index`] - The index store (pool, migrations, upsert/delete/search)
//! - [`query`] - Free-text to FTS5 MATCH sanitization
//! - [`error`] - Search index error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod index;
pub mod query;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SearchError, SearchResult};
pub use index::{SearchConfig, VacationSearchIndex};
