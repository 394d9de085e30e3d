//! # user-store
//!
//! 基于 Axum 的内存用户 CRUD 服务，分层结构：
//! - `app`: 数据模型、业务服务、处理器与路由
//! - `core`: 错误处理与中间件
//! - `infrastructure`: 内存存储与日志
//! - `config`: TOML 配置与环境变量覆盖

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use app::users::{AppState, User, UserService};
pub use config::{Config, ConfigError, LockingMode};
pub use crate::core::error::CoreError;
pub use infrastructure::MemoryStore;

/// 用种子数据和给定配置构建应用状态
pub fn app_state(config: &Config) -> AppState {
    AppState::new(UserService::new(
        MemoryStore::seeded(),
        config.store.locking,
    ))
}
