//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, Reservation};
use sqlx::SqliteConnection;

const SELECT_RESERVATION: &str = "SELECT r.id, r.guest, r.accompanying_guests, r.table_id, t.number AS table_number, r.arrival_time, r.created_at FROM reservation r JOIN dining_table t ON t.id = r.table_id";

pub async fn find_by_guest(
    conn: &mut SqliteConnection,
    guest: &str,
) -> RepoResult<Option<Reservation>> {
    let reservation =
        sqlx::query_as::<_, Reservation>(&format!("{SELECT_RESERVATION} WHERE r.guest = ?"))
            .bind(guest)
            .fetch_optional(conn)
            .await?;
    Ok(reservation)
}

pub async fn find_by_table(
    conn: &mut SqliteConnection,
    table_id: i64,
) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "{SELECT_RESERVATION} WHERE r.table_id = ? ORDER BY r.guest"
    ))
    .bind(table_id)
    .fetch_all(conn)
    .await?;
    Ok(reservations)
}

/// All reservations, ordered by guest name
pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Reservation>> {
    let reservations =
        sqlx::query_as::<_, Reservation>(&format!("{SELECT_RESERVATION} ORDER BY r.guest"))
            .fetch_all(conn)
            .await?;
    Ok(reservations)
}

/// Checked-in reservations, ordered by guest name
pub async fn find_arrived(conn: &mut SqliteConnection) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "{SELECT_RESERVATION} WHERE r.arrival_time IS NOT NULL ORDER BY r.guest"
    ))
    .fetch_all(conn)
    .await?;
    Ok(reservations)
}

/// Insert a reservation in the Reserved state (no arrival time)
pub async fn create(
    conn: &mut SqliteConnection,
    table: &DiningTable,
    guest: &str,
    accompanying_guests: i32,
) -> RepoResult<Reservation> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO reservation (id, guest, accompanying_guests, table_id, arrival_time, created_at) VALUES (?1, ?2, ?3, ?4, NULL, ?5)",
    )
    .bind(id)
    .bind(guest)
    .bind(accompanying_guests)
    .bind(table.id)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    find_by_guest(conn, guest)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

/// Set party size and arrival time of an existing reservation
pub async fn update_arrival(
    conn: &mut SqliteConnection,
    id: i64,
    accompanying_guests: i32,
    arrival_time: i64,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE reservation SET accompanying_guests = ?1, arrival_time = ?2 WHERE id = ?3",
    )
    .bind(accompanying_guests)
    .bind(arrival_time)
    .bind(id)
    .execute(conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    Ok(())
}

/// Hard delete a reservation
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn count_by_table(conn: &mut SqliteConnection, table_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservation WHERE table_id = ?")
        .bind(table_id)
        .fetch_one(conn)
        .await?;
    Ok(count)
}

/// Seats held on a table by every reservation, arrived or not
pub async fn seats_used_by_table(conn: &mut SqliteConnection, table_id: i64) -> RepoResult<i64> {
    let used: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(accompanying_guests + 1), 0) FROM reservation WHERE table_id = ?",
    )
    .bind(table_id)
    .fetch_one(conn)
    .await?;
    Ok(used)
}

/// Seats held by checked-in reservations across all tables
pub async fn arrived_seats(conn: &mut SqliteConnection) -> RepoResult<i64> {
    let used: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(accompanying_guests + 1), 0) FROM reservation WHERE arrival_time IS NOT NULL",
    )
    .fetch_one(conn)
    .await?;
    Ok(used)
}
