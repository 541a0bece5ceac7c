//! Occupancy reporting
//!
//! Empty seats count only arrived parties, while capacity checks count every
//! reservation. A table fully booked by guests who have not arrived yet still
//! reports its seats as empty.

use super::SeatingManager;
use super::error::SeatingResult;
use crate::db::repository::{dining_table, reservation};
use shared::models::Reservation;

impl SeatingManager {
    /// Checked-in reservations, ordered by guest
    pub async fn list_arrived_reservations(&self) -> SeatingResult<Vec<Reservation>> {
        let mut tx = self.db.begin_read().await?;
        Ok(reservation::find_arrived(&mut tx).await?)
    }

    /// Total seats minus seats held by arrived parties
    pub async fn empty_seats(&self) -> SeatingResult<i64> {
        // one snapshot for both sums
        let mut tx = self.db.begin_read().await?;
        let total = dining_table::total_seats(&mut tx).await?;
        let arrived = reservation::arrived_seats(&mut tx).await?;
        Ok(total - arrived)
    }
}
