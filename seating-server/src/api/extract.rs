//! Extractors whose rejections render as [`AppError`] JSON
//!
//! Plain `Json` / `Path` reject with a text/plain body; these wrap them so a
//! malformed body or path parameter answers with `InvalidRequest`.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use http::request::Parts;
use shared::error::AppError;

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Path parameter
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
