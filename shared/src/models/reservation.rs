//! Reservation Model

use serde::{Deserialize, Serialize};

/// Arrival timestamp format used by the guest endpoints (`dd/mm/yy HH:MM`)
pub const ARRIVAL_TIME_FORMAT: &str = "%d/%m/%y %H:%M";

/// Reservation entity (预订)
///
/// One named guest plus `accompanying_guests`, booked against one table.
/// The party occupies `accompanying_guests + 1` seats from creation on,
/// whether or not it has arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub guest: String,
    pub accompanying_guests: i32,
    pub table_id: i64,
    /// Number of the referenced table (joined on read)
    pub table_number: i32,
    /// Check-in time in Unix millis; `None` until the guest arrives
    pub arrival_time: Option<i64>,
    pub created_at: i64,
}

/// Reservation state machine: Reserved → Arrived (→ Arrived)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationState {
    Reserved,
    Arrived,
}

impl Reservation {
    /// Seats this reservation holds (the named guest included)
    pub fn party_size(&self) -> i64 {
        i64::from(self.accompanying_guests) + 1
    }

    pub fn state(&self) -> ReservationState {
        if self.arrival_time.is_some() {
            ReservationState::Arrived
        } else {
            ReservationState::Reserved
        }
    }

    pub fn has_arrived(&self) -> bool {
        self.arrival_time.is_some()
    }

    /// Guest-list view (without arrival time, only checked-in guests have one)
    pub fn as_guest_list_entry(&self) -> GuestListEntry {
        GuestListEntry {
            name: self.guest.clone(),
            table: self.table_number,
            accompanying_guests: self.accompanying_guests,
        }
    }

    /// Arrived-guest view (with arrival time, without table)
    pub fn as_arrived_guest(&self) -> ArrivedGuest {
        let time_arrived = self
            .arrival_time
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|t| t.format(ARRIVAL_TIME_FORMAT).to_string())
            .unwrap_or_default();
        ArrivedGuest {
            name: self.guest.clone(),
            accompanying_guests: self.accompanying_guests,
            time_arrived,
        }
    }
}

/// Entry of `GET /guest_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestListEntry {
    pub name: String,
    pub table: i32,
    pub accompanying_guests: i32,
}

/// Entry of `GET /guests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivedGuest {
    pub name: String,
    pub accompanying_guests: i32,
    pub time_arrived: String,
}

/// `{"guests": [...]}` envelope used by both guest listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestsResponse<T> {
    pub guests: Vec<T>,
}

/// `{"seats_empty": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySeatsResponse {
    pub seats_empty: i64,
}

/// `{"name": guest}` returned by reservation and arrival writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestNameResponse {
    pub name: String,
}
