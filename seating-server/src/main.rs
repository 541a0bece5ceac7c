use anyhow::Context;
use seating_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 与配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 设置环境 (工作目录, 日志)
    setup_environment(&config).context("failed to prepare work directory")?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        work_dir = %config.work_dir,
        "Seating server starting..."
    );

    // 3. 初始化服务器状态 (数据库 + 迁移)
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
