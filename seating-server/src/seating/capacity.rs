//! Capacity checks (容量校验)
//!
//! A table's capacity counts every reservation referencing it, arrived or
//! not. Checks run on the connection of the caller's write scope so the
//! answer still holds when the write lands.

use super::error::{SeatingError, SeatingResult};
use crate::db::repository::reservation;
use shared::models::DiningTable;
use sqlx::SqliteConnection;

/// `additional` more seats fit into `capacity` with `in_use` already taken
///
/// Zero or negative `additional` (a party shrinking) always fits.
pub fn fits(capacity: i64, in_use: i64, additional: i64) -> bool {
    additional <= 0 || capacity - in_use >= additional
}

/// Seats held on `table` by all reservations
pub async fn seats_in_use(conn: &mut SqliteConnection, table: &DiningTable) -> SeatingResult<i64> {
    Ok(reservation::seats_used_by_table(conn, table.id).await?)
}

pub async fn remaining_seats(
    conn: &mut SqliteConnection,
    table: &DiningTable,
) -> SeatingResult<i64> {
    let used = seats_in_use(conn, table).await?;
    Ok(i64::from(table.seats) - used)
}

pub async fn has_capacity(
    conn: &mut SqliteConnection,
    table: &DiningTable,
    additional: i64,
) -> SeatingResult<bool> {
    if additional <= 0 {
        return Ok(true);
    }
    let used = seats_in_use(conn, table).await?;
    Ok(fits(i64::from(table.seats), used, additional))
}

/// Fail with `CapacityExceeded` unless `additional` seats fit on `table`
pub async fn ensure_capacity(
    conn: &mut SqliteConnection,
    table: &DiningTable,
    additional: i64,
) -> SeatingResult<()> {
    if additional <= 0 {
        return Ok(());
    }
    let remaining = remaining_seats(conn, table).await?;
    if remaining >= additional {
        return Ok(());
    }
    tracing::warn!(
        table_number = table.number,
        requested = additional,
        remaining,
        "Capacity exceeded"
    );
    Err(SeatingError::CapacityExceeded {
        table_number: table.number,
        requested: additional,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::dining_table;
    use crate::db::test_support::test_db;
    use shared::models::DiningTableCreate;

    #[test]
    fn test_fits() {
        assert!(fits(6, 0, 6));
        assert!(!fits(6, 0, 7));
        assert!(fits(6, 6, 0));
        assert!(!fits(6, 6, 1));
        // shrinking always passes, even on an over-full table
        assert!(fits(4, 6, -1));
    }

    #[tokio::test]
    async fn test_capacity_counts_unarrived_reservations() {
        let t = test_db().await;
        let mut conn = t.db.acquire().await.unwrap();
        let table = dining_table::create(&mut conn, DiningTableCreate { number: 1, seats: 6 })
            .await
            .unwrap();
        reservation::create(&mut conn, &table, "bob", 4).await.unwrap();

        assert_eq!(seats_in_use(&mut conn, &table).await.unwrap(), 5);
        assert_eq!(remaining_seats(&mut conn, &table).await.unwrap(), 1);
        assert!(has_capacity(&mut conn, &table, 1).await.unwrap());
        assert!(!has_capacity(&mut conn, &table, 2).await.unwrap());
        assert!(has_capacity(&mut conn, &table, -3).await.unwrap());

        let err = ensure_capacity(&mut conn, &table, 2).await.unwrap_err();
        match err {
            SeatingError::CapacityExceeded {
                table_number,
                requested,
                remaining,
            } => {
                assert_eq!(table_number, 1);
                assert_eq!(requested, 2);
                assert_eq!(remaining, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
