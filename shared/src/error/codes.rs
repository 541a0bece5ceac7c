//! Unified error codes for the seating service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Table and reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request fields failed validation
    ValidationFailed = 2,
    /// No route matches the request
    NotFound = 3,
    /// Malformed body or path parameter
    InvalidRequest = 5,

    // ==================== 70xx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table number already in use
    TableNumberExists = 7002,
    /// Table still has reservations
    TableHasReservations = 7003,

    // ==================== 71xx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 7101,
    /// Guest already holds a reservation
    GuestAlreadyReserved = 7102,
    /// Not enough free seats on the table
    CapacityExceeded = 7103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Request exceeded REQUEST_TIMEOUT_MS
    TimeoutError = 9004,
    /// Store unavailable (transient, retry later)
    StoreUnavailable = 9404,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether the caller may retry the same request later
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, ErrorCode::StoreUnavailable | ErrorCode::TimeoutError)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNumberExists => "A table exists with that number already",
            ErrorCode::TableHasReservations => "Cannot delete a table with a reservation",

            // Reservation
            ErrorCode::ReservationNotFound => "Guest does not have a reservation",
            ErrorCode::GuestAlreadyReserved => "The guest already has a reservation",
            ErrorCode::CapacityExceeded => "Not enough seats available on selected table",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::StoreUnavailable => "Store unavailable, please retry later",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableNumberExists),
            7003 => Ok(ErrorCode::TableHasReservations),

            // Reservation
            7101 => Ok(ErrorCode::ReservationNotFound),
            7102 => Ok(ErrorCode::GuestAlreadyReserved),
            7103 => Ok(ErrorCode::CapacityExceeded),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),
            9404 => Ok(ErrorCode::StoreUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
