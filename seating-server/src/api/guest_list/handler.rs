//! Guest List API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::AppResult;
use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_non_negative, validate_required_text};
use shared::models::{GuestListEntry, GuestNameResponse, GuestsResponse};

#[derive(Debug, Deserialize)]
pub struct GuestListRequest {
    pub table: i32,
    pub accompanying_guests: i32,
}

/// GET /guest_list - 所有预订
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<GuestsResponse<GuestListEntry>>> {
    let guests = state
        .seating
        .list_reservations()
        .await?
        .iter()
        .map(|r| r.as_guest_list_entry())
        .collect();
    Ok(Json(GuestsResponse { guests }))
}

/// POST /guest_list/{name} - 新增预订
pub async fn create(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
    JsonBody(payload): JsonBody<GuestListRequest>,
) -> AppResult<Json<GuestNameResponse>> {
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_non_negative(payload.accompanying_guests, "accompanying_guests")?;

    let reservation = state
        .seating
        .create_reservation(&name, payload.table, payload.accompanying_guests)
        .await?;
    Ok(Json(GuestNameResponse {
        name: reservation.guest,
    }))
}

/// DELETE /guest_list/{name} - 取消预订
pub async fn delete(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
) -> AppResult<Json<Value>> {
    state.seating.delete_reservation(&name).await?;
    Ok(Json(json!({ "message": "deleted" })))
}
