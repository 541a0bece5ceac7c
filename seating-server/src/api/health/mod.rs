//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 含数据库检查 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    database: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    /// 延迟 (毫秒)
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/detailed
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let start = Instant::now();
    let probe: Result<i64, sqlx::Error> = sqlx::query_scalar("SELECT 1")
        .fetch_one(&state.db().pool)
        .await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let database = match probe {
        Ok(_) => CheckResult {
            status: "ok",
            latency_ms,
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            CheckResult {
                status: "error",
                latency_ms,
                error: Some(e.to_string()),
            }
        }
    };

    Json(DetailedHealthResponse {
        status: database.status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
    })
}
