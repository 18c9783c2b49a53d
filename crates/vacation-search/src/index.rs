//! # The Search Index Store
//!
//! A standalone SQLite database holding the text-searchable projection of
//! the vacation records. Dates are stored as RFC 3339 text so that both
//! the id and the date values are matchable as free text.
//!
//! The `documents_fts` virtual table is maintained by triggers installed
//! in the migration; this module only ever touches `documents`.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use async_trait::async_trait;
use vacation_core::{IndexError, SearchIndex, VacationRecord};

use crate::error::{SearchError, SearchResult};
use crate::query;

/// Embedded migrations from the `migrations/search` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/search");

// =============================================================================
// Configuration
// =============================================================================

/// Search index configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Path to the index database file.
    pub index_path: PathBuf,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Connection timeout duration.
    pub connect_timeout: Duration,
}

impl SearchConfig {
    /// Creates a new configuration with the given path. The file is
    /// created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SearchConfig {
            index_path: path.into(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Creates an in-memory index configuration (for testing).
    pub fn in_memory() -> Self {
        SearchConfig {
            index_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            connect_timeout: Duration::from_secs(5),
        }
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw row shape of the `documents` table.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: i64,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl DocumentRow {
    fn into_record(self) -> SearchResult<VacationRecord> {
        Ok(VacationRecord {
            id: Some(self.id),
            start_date: parse_instant(self.start_date)?,
            end_date: parse_instant(self.end_date)?,
        })
    }
}

fn parse_instant(text: Option<String>) -> SearchResult<Option<DateTime<Utc>>> {
    match text {
        None => Ok(None),
        Some(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| SearchError::Internal(format!("bad stored instant '{}': {}", text, e))),
    }
}

// =============================================================================
// Search Index Store
// =============================================================================

/// The FTS5-backed search index over vacation records.
#[derive(Debug, Clone)]
pub struct VacationSearchIndex {
    pool: SqlitePool,
}

impl VacationSearchIndex {
    /// Opens (or creates) the index database and runs its migrations.
    pub async fn open(config: SearchConfig) -> SearchResult<Self> {
        info!(
            path = %config.index_path.display(),
            "Initializing search index connection"
        );

        let connect_url = format!("sqlite://{}?mode=rwc", config.index_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| SearchError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| SearchError::ConnectionFailed(e.to_string()))?;

        MIGRATOR.run(&pool).await?;

        info!("Search index ready");
        Ok(VacationSearchIndex { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Upserts the index entry for a saved record.
    pub async fn index(&self, record: &VacationRecord) -> SearchResult<()> {
        let id = record.id.ok_or(SearchError::MissingId)?;

        debug!(id = id, "Indexing vacation record");

        sqlx::query(
            r#"
            INSERT INTO documents (id, start_date, end_date)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                start_date = excluded.start_date,
                end_date = excluded.end_date
            "#,
        )
        .bind(id)
        .bind(record.start_date.map(|dt| dt.to_rfc3339()))
        .bind(record.end_date.map(|dt| dt.to_rfc3339()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes the index entry for an id. Idempotent.
    pub async fn delete_by_id(&self, id: i64) -> SearchResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(
            id = id,
            deleted = result.rows_affected(),
            "Search index delete issued"
        );
        Ok(())
    }

    /// Runs a free-text query, rank ordered.
    ///
    /// An empty query (no tokens) matches every indexed document.
    pub async fn search(&self, raw_query: &str) -> SearchResult<Vec<VacationRecord>> {
        debug!(query = %raw_query, "Searching vacation index");

        let rows = match query::to_match_expr(raw_query) {
            Some(match_expr) => {
                sqlx::query_as::<_, DocumentRow>(
                    r#"
                    SELECT d.id, d.start_date, d.end_date
                    FROM documents d
                    INNER JOIN documents_fts fts ON d.id = fts.rowid
                    WHERE documents_fts MATCH ?1
                    ORDER BY rank
                    "#,
                )
                .bind(match_expr)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DocumentRow>(
                    r#"
                    SELECT id, start_date, end_date
                    FROM documents
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = rows.len(), "Search returned documents");

        rows.into_iter().map(DocumentRow::into_record).collect()
    }

    /// Closes the index connection pool.
    pub async fn close(&self) {
        info!("Closing search index connection pool");
        self.pool.close().await;
    }
}

// =============================================================================
// SearchIndex Contract
// =============================================================================

#[async_trait]
impl SearchIndex for VacationSearchIndex {
    async fn index(&self, record: &VacationRecord) -> Result<(), IndexError> {
        Ok(VacationSearchIndex::index(self, record).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), IndexError> {
        Ok(VacationSearchIndex::delete_by_id(self, id).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<VacationRecord>, IndexError> {
        Ok(VacationSearchIndex::search(self, query).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn index() -> VacationSearchIndex {
        VacationSearchIndex::open(SearchConfig::in_memory())
            .await
            .unwrap()
    }

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn record(id: i64, start_secs: i64) -> VacationRecord {
        VacationRecord::new(Some(instant(start_secs)), Some(instant(start_secs + 86_400)))
            .with_id(id)
    }

    #[tokio::test]
    async fn test_indexed_record_is_found_by_its_id() {
        let index = index().await;
        index.index(&record(42, 0)).await.unwrap();

        let hits = index.search("42").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, Some(42));
    }

    #[tokio::test]
    async fn test_indexed_record_is_found_by_date_text() {
        let index = index().await;
        // 2026-08-30T00:00:00Z
        let start = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        index
            .index(&VacationRecord::new(Some(start), None).with_id(1))
            .await
            .unwrap();

        let hits = index.search("2026").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].start_date, Some(start));
    }

    #[tokio::test]
    async fn test_reindex_replaces_the_entry() {
        let index = index().await;
        index.index(&record(1, 0)).await.unwrap();

        let updated = VacationRecord::new(
            Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
            None,
        )
        .with_id(1);
        index.index(&updated).await.unwrap();

        assert!(index.search("2030").await.unwrap().len() == 1);
        assert!(index.search("1970").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let index = index().await;
        index.index(&record(7, 0)).await.unwrap();

        index.delete_by_id(7).await.unwrap();
        index.delete_by_id(7).await.unwrap();

        assert!(index.search("7").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_matches_all() {
        let index = index().await;
        index.index(&record(1, 0)).await.unwrap();
        index.index(&record(2, 1_000_000)).await.unwrap();

        let hits = index.search("   ").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_hostile_query_syntax_is_harmless() {
        let index = index().await;
        index.index(&record(1, 0)).await.unwrap();

        // Raw FTS5 syntax would be a parse error; sanitized it just misses.
        let hits = index.search("\"unbalanced AND (").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_indexing_without_id_is_rejected() {
        let index = index().await;
        let err = index
            .index(&VacationRecord::new(Some(instant(0)), None))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::MissingId));
    }
}
