use tokio::net::TcpListener;
use tracing::info;

use user_store::{app_state, build_router, config, infrastructure::Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    Logger::init(&config.logging.level);

    info!("启动用户存储服务...");

    let state = app_state(&config);
    info!(
        "✅ 已初始化 {} 个示例用户，加锁方式: {:?}",
        state.user_service.list_users()?.len(),
        config.store.locking
    );

    let app = build_router(state, &config.http);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /              - Hello World");
    info!("   GET    /users         - 获取所有用户");
    info!("   POST   /users         - 创建新用户");
    info!("   GET    /users/:id     - 获取特定用户");
    info!("   PUT    /users/:id     - 更新用户");
    info!("   DELETE /users/:id     - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已安全关闭");
    Ok(())
}

/// 等待 Ctrl+C
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到停止信号，正在关闭服务器...");
    }
}
