//! Dining Table API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/tables", get(handler::list))
        .route(
            "/table/{number}",
            get(handler::get_by_number)
                .post(handler::create)
                .delete(handler::delete),
        )
}
