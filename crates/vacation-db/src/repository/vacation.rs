//! # Vacation Repository
//!
//! Database operations for vacation records.
//!
//! ## Identity Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How save() Assigns Ids                               │
//! │                                                                         │
//! │  save(record with id = None)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT INTO vacation (start_date, end_date) ... RETURNING id           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AUTOINCREMENT hands out a positive, never-reused id                    │
//! │                                                                         │
//! │  save(record with id = Some(n))                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT ... ON CONFLICT(id) DO UPDATE  ← overwrite in place             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All reads here are strongly consistent with prior writes on the same
//! store. This table is the sole authority for existence and field values.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use async_trait::async_trait;
use vacation_core::{RecordStore, StoreError, VacationRecord};

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw row shape of the `vacation` table.
#[derive(Debug, sqlx::FromRow)]
struct VacationRow {
    id: i64,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl From<VacationRow> for VacationRecord {
    fn from(row: VacationRow) -> Self {
        VacationRecord {
            id: Some(row.id),
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for vacation record operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = VacationRepository::new(pool);
/// let saved = repo.save(&record).await?;
/// let found = repo.find_by_id(saved.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct VacationRepository {
    pool: SqlitePool,
}

impl VacationRepository {
    /// Creates a new VacationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VacationRepository { pool }
    }

    /// Saves a record.
    ///
    /// With no id the record is inserted and a fresh identifier assigned.
    /// With an id the stored values are overwritten in place; an id that
    /// does not exist yet is inserted under that id.
    pub async fn save(&self, record: &VacationRecord) -> DbResult<VacationRecord> {
        match record.id {
            None => {
                debug!("Inserting new vacation record");

                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO vacation (start_date, end_date)
                    VALUES (?1, ?2)
                    RETURNING id
                    "#,
                )
                .bind(record.start_date)
                .bind(record.end_date)
                .fetch_one(&self.pool)
                .await?;

                debug!(id = id, "Vacation record inserted");
                Ok(record.clone().with_id(id))
            }
            Some(id) => {
                debug!(id = id, "Overwriting vacation record");

                sqlx::query(
                    r#"
                    INSERT INTO vacation (id, start_date, end_date)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(id) DO UPDATE SET
                        start_date = excluded.start_date,
                        end_date = excluded.end_date
                    "#,
                )
                .bind(id)
                .bind(record.start_date)
                .bind(record.end_date)
                .execute(&self.pool)
                .await?;

                Ok(record.clone())
            }
        }
    }

    /// Fetches a record by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(record))` - Record found
    /// * `Ok(None)` - Record not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<VacationRecord>> {
        let row = sqlx::query_as::<_, VacationRow>(
            r#"
            SELECT id, start_date, end_date
            FROM vacation
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VacationRecord::from))
    }

    /// Returns all stored records, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<VacationRecord>> {
        let rows = sqlx::query_as::<_, VacationRow>(
            r#"
            SELECT id, start_date, end_date
            FROM vacation
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VacationRecord::from).collect())
    }

    /// True when a record with the given id exists.
    pub async fn exists_by_id(&self, id: i64) -> DbResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vacation WHERE id = ?1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    /// Deletes a record by id. A missing id is a no-op, not an error.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM vacation WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(
            id = id,
            deleted = result.rows_affected(),
            "Vacation record delete issued"
        );
        Ok(())
    }

    /// Counts stored records (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vacation")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// RecordStore Contract
// =============================================================================

#[async_trait]
impl RecordStore for VacationRepository {
    async fn save(&self, record: &VacationRecord) -> Result<VacationRecord, StoreError> {
        Ok(VacationRepository::save(self, record).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<VacationRecord>, StoreError> {
        Ok(VacationRepository::find_by_id(self, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<VacationRecord>, StoreError> {
        Ok(VacationRepository::find_all(self).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(VacationRepository::exists_by_id(self, id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        Ok(VacationRepository::delete_by_id(self, id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
