//! Transport error and its JSON body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::extract::rejection::{JsonRejection, PathRejection};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by every HTTP handler
///
/// `code` picks the HTTP status; `details` carries machine-readable context
/// such as `table_number` or `remaining`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Unmatched route / resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{resource} not found"))
            .with_detail("resource", resource)
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Transient store failure, the client may retry
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreUnavailable, msg)
    }
}

/// 请求体无法解析 (缺字段、类型错误、非 JSON)
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid(rejection.body_text())
    }
}

/// 路径参数无法解析 (如 `/table/abc`)
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid(rejection.body_text())
    }
}

/// JSON body of an error response
///
/// ```json
/// {"code": 7103, "message": "...", "details": {"remaining": 1}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.code.category() == ErrorCategory::System {
            if self.code.is_transient() {
                tracing::warn!(code = %self.code, message = %self.message, "Transient system error");
            } else {
                tracing::error!(code = %self.code, message = %self.message, "System error occurred");
            }
        }

        let body = ErrorBody::from(&self);
        (self.http_status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::TableNotFound);
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(err.message, "Table not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::new(ErrorCode::CapacityExceeded)
            .with_detail("table_number", 3)
            .with_detail("remaining", 1);

        let details = err.details.unwrap();
        assert_eq!(details.get("table_number").unwrap(), 3);
        assert_eq!(details.get("remaining").unwrap(), 1);
    }

    #[test]
    fn test_constructor_codes() {
        assert_eq!(AppError::validation("x").code, ErrorCode::ValidationFailed);
        assert_eq!(AppError::invalid("x").code, ErrorCode::InvalidRequest);
        assert_eq!(AppError::internal("x").code, ErrorCode::InternalError);
        assert_eq!(AppError::database("x").code, ErrorCode::DatabaseError);
        assert_eq!(
            AppError::unavailable("pool timed out").http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let err = AppError::not_found("Route /nope");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Route /nope not found");
    }

    #[test]
    fn test_error_body_skips_empty_details() {
        let err = AppError::new(ErrorCode::ReservationNotFound);
        let json = serde_json::to_string(&ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            r#"{"code":7101,"message":"Guest does not have a reservation"}"#
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::new(ErrorCode::GuestAlreadyReserved).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
