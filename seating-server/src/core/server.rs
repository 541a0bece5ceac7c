//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };
        self.run_until(shutdown).await
    }

    /// Serve until `shutdown` resolves
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Config(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!("Seating server listening on {}", addr);

        let db = self.state.db().clone();
        let app = routes::build_app(self.state.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        // 关闭前让 SQLite 完成 checkpoint
        db.pool.close().await;
        Ok(())
    }
}
