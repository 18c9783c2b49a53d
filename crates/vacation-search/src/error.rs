//! Error types for search index operations.

use thiserror::Error;

use vacation_core::IndexError;

/// Search index operation errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Index database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The record to index carries no id.
    #[error("Cannot index a record without an id")]
    MissingId,

    /// Internal index error.
    #[error("Internal search index error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for SearchError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => SearchError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolClosed => SearchError::ConnectionFailed("Pool is closed".to_string()),
            _ => SearchError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for SearchError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        SearchError::MigrationFailed(err.to_string())
    }
}

impl From<SearchError> for IndexError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::MissingId => IndexError::MissingId,
            other => IndexError::Backend(other.to_string()),
        }
    }
}

/// Result type for search index operations.
pub type SearchResult<T> = Result<T, SearchError>;
