//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台管理接口
//! - [`guest_list`] - 预订名单接口
//! - [`guests`] - 到店/离店接口
//! - [`seats`] - 空座统计

pub mod extract;
pub mod guest_list;
pub mod guests;
pub mod health;
pub mod seats;
pub mod tables;

pub use shared::error::AppResult;
