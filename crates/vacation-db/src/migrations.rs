//! # Database Migrations
//!
//! Embedded SQL migrations for the record store.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/records/` with the next sequence number
//! 2. Name format: `NNN_description.sql` (e.g., `002_add_owner_column.sql`)
//! 3. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/records` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the specified
/// directory into the binary at compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/records");

/// Runs all pending record store migrations.
///
/// Idempotent and ordered; each migration runs in its own transaction and
/// is recorded in `_sqlx_migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending record store migrations");

    MIGRATOR.run(pool).await?;

    info!("All record store migrations applied");
    Ok(())
}
