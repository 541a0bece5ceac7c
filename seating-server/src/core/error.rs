use shared::error::AppError;
use thiserror::Error;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
