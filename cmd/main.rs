//! ripple-chat 服务入口
//!
//! 进程级初始化：加载配置、构造存储句柄、装配全部处理器，
//! 然后等待停止信号。事件分发（双向通道与 HTTP 路由）由宿主
//! 环境接入 `ApplicationContext` 完成，不在本进程内实现。

use ripple_chat::config::AppConfig;
use ripple_chat::service::ApplicationBootstrap;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env()?;
    let _context = ApplicationBootstrap::create_context(&config).await?;

    info!("✅ ripple-chat 已就绪");
    info!("   连接表: {}", config.table_name);
    if let Some(users_table) = &config.users_table {
        info!("   用户表: {}", users_table);
    }

    tokio::signal::ctrl_c().await?;
    info!("正在停止服务...");
    info!("✅ 服务已停止");

    Ok(())
}
