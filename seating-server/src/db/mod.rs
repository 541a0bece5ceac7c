//! Database Module
//!
//! Handles the SQLite connection pool, migrations and the write scope every
//! mutating seating operation runs in.

pub mod repository;

use repository::RepoResult;
use shared::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// 写冲突时等待而非立即失败
const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Database service: owns a SQLite connection pool and the write gate
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
    write_gate: Arc<Mutex<()>>,
}

impl DbService {
    /// Open (or create) the database at `db_path` with WAL mode and run migrations
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .busy_timeout(BUSY_TIMEOUT)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SQLite WAL)");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self::with_pool(pool))
    }

    /// Wrap an existing pool (schema must already be migrated)
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Begin a write scope
    ///
    /// Write scopes are serialized in-process: the gate is held until the
    /// scope is committed or dropped, so a check made inside the scope is
    /// still true when the scope's writes land. Dropping the scope without
    /// committing rolls the transaction back.
    pub async fn begin_write(&self) -> RepoResult<WriteScope> {
        let gate = self.write_gate.clone().lock_owned().await;
        let tx = self.pool.begin().await?;
        Ok(WriteScope { tx, _gate: gate })
    }

    /// Begin a read-only transaction (a consistent snapshot under WAL)
    pub async fn begin_read(&self) -> RepoResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// Acquire a plain pooled connection
    pub async fn acquire(&self) -> RepoResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }
}

/// Serialized unit of work over the store
///
/// Field order matters: the transaction is dropped (rolled back) before the
/// gate is released.
pub struct WriteScope {
    tx: Transaction<'static, Sqlite>,
    _gate: OwnedMutexGuard<()>,
}

impl WriteScope {
    /// Connection to run repository calls on inside this scope
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit all writes made in this scope and release the gate
    pub async fn commit(self) -> RepoResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
