//! # vacation-core: Domain Model for the Vacation Service
//!
//! This crate is the level-0 foundation of the workspace. It contains the
//! domain types and the store contracts, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vacation Service Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 SyncService (vacation-sync)                     │   │
//! │  │       commit primary first, mirror best-effort second          │   │
//! │  └───────┬─────────────────────────────────────────────┬───────────┘   │
//! │          │ dyn RecordStore                dyn SearchIndex              │
//! │  ┌───────▼────────────┐              ┌─────────────────▼───────────┐  │
//! │  │ vacation-db        │              │ vacation-search             │  │
//! │  │ SQLite (authority) │              │ SQLite FTS5 (derived copy)  │  │
//! │  └────────────────────┘              └─────────────────────────────┘  │
//! │                                                                         │
//! │  ★ vacation-core (THIS CRATE) defines the types and traits that        │
//! │    every arrow above carries. NO I/O • NO DATABASE • NO NETWORK        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - `VacationRecord` and the `VacationPatch` merge wrapper
//! - [`store`] - `RecordStore` / `SearchIndex` traits and their error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod record;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use record::{VacationPatch, VacationRecord};
pub use store::{IndexError, RecordStore, SearchIndex, StoreError};
