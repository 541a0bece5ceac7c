//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableCreate};
use sqlx::SqliteConnection;

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, number, seats FROM dining_table ORDER BY number",
    )
    .fetch_all(conn)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<DiningTable>> {
    let table =
        sqlx::query_as::<_, DiningTable>("SELECT id, number, seats FROM dining_table WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await?;
    Ok(table)
}

pub async fn find_by_number(
    conn: &mut SqliteConnection,
    number: i32,
) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, number, seats FROM dining_table WHERE number = ? LIMIT 1",
    )
    .bind(number)
    .fetch_optional(conn)
    .await?;
    Ok(table)
}

/// Insert a table; a taken number surfaces as [`RepoError::Duplicate`]
pub async fn create(conn: &mut SqliteConnection, data: DiningTableCreate) -> RepoResult<DiningTable> {
    if data.seats < 0 {
        return Err(RepoError::Validation(format!(
            "seats cannot be negative: {}",
            data.seats
        )));
    }

    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO dining_table (id, number, seats) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(data.number)
        .bind(data.seats)
        .execute(&mut *conn)
        .await?;

    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

/// Hard delete a dining table
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM dining_table WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Sum of seats over all tables
pub async fn total_seats(conn: &mut SqliteConnection) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(seats), 0) FROM dining_table")
        .fetch_one(conn)
        .await?;
    Ok(total)
}
