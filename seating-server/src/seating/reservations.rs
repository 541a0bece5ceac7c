//! Reservation lifecycle (预订)

use super::SeatingManager;
use super::capacity;
use super::error::{SeatingError, SeatingResult};
use crate::db::repository::{RepoError, dining_table, reservation};
use shared::models::Reservation;

/// Shared guest/party checks for reservation writes
pub(super) fn validate_party(guest: &str, accompanying_guests: i32) -> SeatingResult<()> {
    if guest.trim().is_empty() {
        return Err(SeatingError::InvalidInput(
            "guest name must not be blank".into(),
        ));
    }
    validate_accompanying(accompanying_guests)
}

pub(super) fn validate_accompanying(accompanying_guests: i32) -> SeatingResult<()> {
    if accompanying_guests < 0 {
        return Err(SeatingError::InvalidInput(format!(
            "accompanying_guests must be non-negative, got {accompanying_guests}"
        )));
    }
    Ok(())
}

impl SeatingManager {
    /// Book `guest` plus `accompanying_guests` onto table `table_number`
    pub async fn create_reservation(
        &self,
        guest: &str,
        table_number: i32,
        accompanying_guests: i32,
    ) -> SeatingResult<Reservation> {
        validate_party(guest, accompanying_guests)?;

        let mut scope = self.db.begin_write().await?;
        let table = dining_table::find_by_number(scope.conn(), table_number)
            .await?
            .ok_or(SeatingError::TableNotFound(table_number))?;

        if reservation::find_by_guest(scope.conn(), guest)
            .await?
            .is_some()
        {
            return Err(SeatingError::GuestAlreadyReserved(guest.to_string()));
        }

        let party = i64::from(accompanying_guests) + 1;
        capacity::ensure_capacity(scope.conn(), &table, party).await?;

        let created = reservation::create(scope.conn(), &table, guest, accompanying_guests)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => SeatingError::GuestAlreadyReserved(guest.to_string()),
                other => other.into(),
            })?;
        scope.commit().await?;

        tracing::info!(
            guest = %guest,
            table_number,
            seats = party,
            "Reservation created"
        );
        Ok(created)
    }

    /// Remove `guest`'s reservation, whether or not they have arrived
    pub async fn delete_reservation(&self, guest: &str) -> SeatingResult<()> {
        let mut scope = self.db.begin_write().await?;
        let existing = reservation::find_by_guest(scope.conn(), guest)
            .await?
            .ok_or_else(|| SeatingError::ReservationNotFound(guest.to_string()))?;

        reservation::delete(scope.conn(), existing.id).await?;
        scope.commit().await?;

        tracing::info!(
            guest = %guest,
            table_number = existing.table_number,
            arrived = existing.has_arrived(),
            "Reservation deleted"
        );
        Ok(())
    }

    /// Every reservation with its table number, ordered by guest
    pub async fn list_reservations(&self) -> SeatingResult<Vec<Reservation>> {
        let mut tx = self.db.begin_read().await?;
        Ok(reservation::find_all(&mut tx).await?)
    }
}
