//! Guests API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::AppResult;
use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::validation::validate_non_negative;
use shared::models::{ArrivedGuest, GuestNameResponse, GuestsResponse};

#[derive(Debug, Deserialize)]
pub struct ArrivalRequest {
    pub accompanying_guests: i32,
}

/// GET /guests - 已到店客人
pub async fn list_arrived(
    State(state): State<ServerState>,
) -> AppResult<Json<GuestsResponse<ArrivedGuest>>> {
    let guests = state
        .seating
        .list_arrived_reservations()
        .await?
        .iter()
        .map(|r| r.as_arrived_guest())
        .collect();
    Ok(Json(GuestsResponse { guests }))
}

/// PUT /guest/{name} - 到店登记 (可重复登记)
pub async fn arrive(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
    JsonBody(payload): JsonBody<ArrivalRequest>,
) -> AppResult<Json<GuestNameResponse>> {
    validate_non_negative(payload.accompanying_guests, "accompanying_guests")?;
    let reservation = state
        .seating
        .record_arrival(&name, payload.accompanying_guests)
        .await?;
    Ok(Json(GuestNameResponse {
        name: reservation.guest,
    }))
}

/// DELETE /guest/{name} - 离店
pub async fn leave(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
) -> AppResult<Json<Value>> {
    state.seating.delete_reservation(&name).await?;
    Ok(Json(json!({ "message": "deleted" })))
}
