//! 空座统计

use axum::{Json, Router, extract::State, routing::get};

use crate::api::AppResult;
use crate::core::ServerState;
use shared::models::EmptySeatsResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/seats_empty", get(seats_empty))
}

/// GET /seats_empty - 总座位数减去已到店人数
pub async fn seats_empty(State(state): State<ServerState>) -> AppResult<Json<EmptySeatsResponse>> {
    let seats_empty = state.seating.empty_seats().await?;
    Ok(Json(EmptySeatsResponse { seats_empty }))
}
