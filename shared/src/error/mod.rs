//! Unified error system for the seating service
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body of an error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 70xx: Table errors
//! - 71xx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CapacityExceeded).with_detail("table", 1);
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 7103);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
