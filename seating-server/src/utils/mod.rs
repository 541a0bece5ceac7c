//! 工具模块 - 日志与输入校验

pub mod logger;
pub mod validation;
