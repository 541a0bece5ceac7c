//! Guests API 模块 (到店 / 离店)

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/guests", get(handler::list_arrived))
        .route(
            "/guest/{name}",
            put(handler::arrive).delete(handler::leave),
        )
}
