//! Server State
//!
//! 组合根：持有配置、数据库和座位引擎，作为 axum State 在处理器间共享。

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::seating::SeatingManager;

/// 服务器状态 (Clone 廉价，内部均为共享句柄)
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub seating: SeatingManager,
}

impl ServerState {
    pub fn new(config: Config, seating: SeatingManager) -> Self {
        Self { config, seating }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (迁移)
    /// 3. 座位引擎
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;
        let seating = SeatingManager::new(db);

        Ok(Self::new(config.clone(), seating))
    }

    pub fn db(&self) -> &DbService {
        self.seating.db()
    }
}
