//! 日志基础设施

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 初始化日志，`RUST_LOG` 优先于配置中的级别
    pub fn init(level: &str) {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));
        if let Err(e) = fmt().with_env_filter(env_filter).try_init() {
            debug!("日志已初始化，沿用现有订阅者: {}", e);
        }
    }
}
