//! Arrival tracking (到店)
//!
//! Reserved → Arrived, and Arrived → Arrived on a repeated check-in. The party
//! size may change on arrival; only growth is checked against capacity.

use super::SeatingManager;
use super::capacity;
use super::error::{SeatingError, SeatingResult};
use super::reservations::validate_accompanying;
use crate::db::repository::{dining_table, reservation};
use shared::models::Reservation;

impl SeatingManager {
    /// Check `guest` in with the party size they actually arrived with
    pub async fn record_arrival(
        &self,
        guest: &str,
        accompanying_guests: i32,
    ) -> SeatingResult<Reservation> {
        validate_accompanying(accompanying_guests)?;

        let mut scope = self.db.begin_write().await?;
        let existing = reservation::find_by_guest(scope.conn(), guest)
            .await?
            .ok_or_else(|| SeatingError::ReservationNotFound(guest.to_string()))?;

        let delta = i64::from(accompanying_guests) - i64::from(existing.accompanying_guests);
        if delta > 0 {
            let table = dining_table::find_by_id(scope.conn(), existing.table_id)
                .await?
                .ok_or(SeatingError::TableNotFound(existing.table_number))?;
            capacity::ensure_capacity(scope.conn(), &table, delta).await?;
        }

        let now = shared::util::now_millis();
        reservation::update_arrival(scope.conn(), existing.id, accompanying_guests, now).await?;
        let updated = reservation::find_by_guest(scope.conn(), guest)
            .await?
            .ok_or_else(|| SeatingError::ReservationNotFound(guest.to_string()))?;
        scope.commit().await?;

        tracing::info!(
            guest = %guest,
            table_number = updated.table_number,
            accompanying_guests,
            rearrival = existing.has_arrived(),
            "Guest arrived"
        );
        Ok(updated)
    }
}
