//! Guest List API 模块 (预订名单)

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/guest_list", get(handler::list))
        .route(
            "/guest_list/{name}",
            post(handler::create).delete(handler::delete),
        )
}
