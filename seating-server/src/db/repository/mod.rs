//! Repository Module
//!
//! Free functions over `&mut SqliteConnection`, so callers decide the scope
//! they run in (a [`WriteScope`](super::WriteScope), a read transaction or a
//! pooled connection).

pub mod dining_table;
pub mod reservation;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Transient failure (pool exhausted, I/O, database busy); safe to retry
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_) => RepoError::Unavailable(err.to_string()),
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    RepoError::Duplicate(db_err.message().to_string())
                } else if db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
                    || db_err.code().as_deref().is_some_and(is_foreign_key_code)
                {
                    RepoError::Validation(db_err.message().to_string())
                } else if db_err.code().as_deref().is_some_and(is_busy_code) {
                    RepoError::Unavailable(db_err.message().to_string())
                } else {
                    RepoError::Database(err.to_string())
                }
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// SQLITE_CONSTRAINT_FOREIGNKEY (787) on insert/update, and
/// SQLITE_CONSTRAINT_TRIGGER (1811) raised by an `ON DELETE RESTRICT` action
fn is_foreign_key_code(code: &str) -> bool {
    matches!(code.parse::<i32>(), Ok(787 | 1811))
}

/// SQLITE_BUSY (5) and SQLITE_LOCKED (6), including their extended codes
fn is_busy_code(code: &str) -> bool {
    code.parse::<i32>()
        .map(|c| matches!(c & 0xff, 5 | 6))
        .unwrap_or(false)
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
