use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Seating engine errors
#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("Table not found: {0}")]
    TableNotFound(i32),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Table number already in use: {0}")]
    TableNumberTaken(i32),

    #[error("Guest already has a reservation: {0}")]
    GuestAlreadyReserved(String),

    #[error("Table {0} still has reservations")]
    TableHasReservations(i32),

    #[error(
        "Table {table_number} has {remaining} free seats, {requested} requested"
    )]
    CapacityExceeded {
        table_number: i32,
        requested: i64,
        remaining: i64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transient, the caller may retry
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse error class (for callers that only care about the category)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingErrorKind {
    NotFound,
    Conflict,
    CapacityExceeded,
    StoreUnavailable,
    InvalidInput,
    Internal,
}

impl SeatingError {
    pub fn kind(&self) -> SeatingErrorKind {
        match self {
            SeatingError::TableNotFound(_) | SeatingError::ReservationNotFound(_) => {
                SeatingErrorKind::NotFound
            }
            SeatingError::TableNumberTaken(_)
            | SeatingError::GuestAlreadyReserved(_)
            | SeatingError::TableHasReservations(_) => SeatingErrorKind::Conflict,
            SeatingError::CapacityExceeded { .. } => SeatingErrorKind::CapacityExceeded,
            SeatingError::InvalidInput(_) => SeatingErrorKind::InvalidInput,
            SeatingError::StoreUnavailable(_) => SeatingErrorKind::StoreUnavailable,
            SeatingError::Store(_) => SeatingErrorKind::Internal,
        }
    }
}

/// 存储错误默认映射；唯一约束冲突由调用方映射为具体的 Conflict
impl From<RepoError> for SeatingError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Store unavailable");
                SeatingError::StoreUnavailable(msg)
            }
            RepoError::Validation(msg) => SeatingError::InvalidInput(msg),
            other => {
                tracing::error!(error = %other, "Store error");
                SeatingError::Store(other.to_string())
            }
        }
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let message = err.to_string();
        match err {
            SeatingError::TableNotFound(number) => {
                AppError::with_message(ErrorCode::TableNotFound, message)
                    .with_detail("table_number", number)
            }
            SeatingError::ReservationNotFound(guest) => {
                AppError::with_message(ErrorCode::ReservationNotFound, message)
                    .with_detail("guest", guest)
            }
            SeatingError::TableNumberTaken(number) => {
                AppError::with_message(ErrorCode::TableNumberExists, message)
                    .with_detail("table_number", number)
            }
            SeatingError::GuestAlreadyReserved(guest) => {
                AppError::with_message(ErrorCode::GuestAlreadyReserved, message)
                    .with_detail("guest", guest)
            }
            SeatingError::TableHasReservations(number) => {
                AppError::with_message(ErrorCode::TableHasReservations, message)
                    .with_detail("table_number", number)
            }
            SeatingError::CapacityExceeded {
                table_number,
                requested,
                remaining,
            } => AppError::with_message(ErrorCode::CapacityExceeded, message)
                .with_detail("table_number", table_number)
                .with_detail("requested", requested)
                .with_detail("remaining", remaining),
            SeatingError::InvalidInput(msg) => AppError::validation(msg),
            SeatingError::StoreUnavailable(msg) => AppError::unavailable(msg),
            SeatingError::Store(msg) => AppError::database(msg),
        }
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
