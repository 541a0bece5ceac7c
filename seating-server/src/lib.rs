//! Seating Server - 活动座位与宾客名单服务
//!
//! # 架构概述
//!
//! - **座位引擎** (`seating`): 桌台、预订、到店与空座统计
//! - **数据库** (`db`): SQLite (sqlx) 存储与写作用域
//! - **HTTP API** (`api`): 宾客名单 REST 接口
//!
//! # 模块结构
//!
//! ```text
//! seating-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 连接池、迁移、仓储
//! ├── seating/       # 座位引擎
//! ├── api/           # HTTP 处理器
//! ├── routes/        # 路由与中间件
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::seating::{SeatingError, SeatingErrorKind, SeatingManager, SeatingResult};
pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCode};

// Re-export logger functions
pub use crate::utils::logger::init_logger_with_file;

/// 设置运行环境：加载 .env、创建工作目录、初始化日志
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    config.ensure_work_dir_structure()?;
    let logs_dir = config.logs_dir();
    init_logger_with_file(&config.log_level, Some(&logs_dir));
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}
