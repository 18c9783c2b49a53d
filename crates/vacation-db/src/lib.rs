//! # vacation-db: Record Store for the Vacation Service
//!
//! The authoritative SQLite database behind the service. Every mutation in
//! the system lands here first; the search index only ever sees values
//! that this store has already accepted.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The vacation repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vacation_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/vacations.db")).await?;
//! let saved = db.vacations().save(&record).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::vacation::VacationRepository;
