//! Dining Table API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::AppResult;
use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::validation::validate_non_negative;
use shared::models::DiningTable;

#[derive(Debug, Deserialize)]
pub struct TableCreateRequest {
    pub seats: i32,
}

/// GET /tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = state.seating.list_tables().await?;
    Ok(Json(tables))
}

/// GET /table/{number} - 获取单个桌台
pub async fn get_by_number(
    State(state): State<ServerState>,
    PathParam(number): PathParam<i32>,
) -> AppResult<Json<DiningTable>> {
    let table = state.seating.get_table(number).await?;
    Ok(Json(table))
}

/// POST /table/{number} - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    PathParam(number): PathParam<i32>,
    JsonBody(payload): JsonBody<TableCreateRequest>,
) -> AppResult<Json<DiningTable>> {
    validate_non_negative(payload.seats, "seats")?;
    let table = state.seating.create_table(number, payload.seats).await?;
    Ok(Json(table))
}

/// DELETE /table/{number} - 删除桌台 (无预订时)
pub async fn delete(
    State(state): State<ServerState>,
    PathParam(number): PathParam<i32>,
) -> AppResult<Json<Value>> {
    state.seating.delete_table(number).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
