//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound | Self::TableNotFound | Self::ReservationNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::TableNumberExists
            | Self::TableHasReservations
            | Self::GuestAlreadyReserved => StatusCode::CONFLICT,

            // 422 Unprocessable Entity
            Self::CapacityExceeded => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::StoreUnavailable | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}
