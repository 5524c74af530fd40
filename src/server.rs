//! HTTP 服务启动与优雅关闭

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::app::{product::handler::AppState, router};
use crate::infrastructure::{config::Config, upstream::HttpProductApi};

pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let api = HttpProductApi::new(&config.upstream)?;
    info!("上游产品 API: {}", api.base_url());

    let state = AppState::from_config(&config, Arc::new(api));
    let app = router(
        state,
        &config.server.static_dir,
        config.server.request_timeout(),
    );

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 代理服务器运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /api/products      - 获取产品列表 (offset, limit, refresh)");
    info!("   POST   /api/products      - 创建产品");
    info!("   PUT    /api/products/:id  - 更新产品");
    info!("   DELETE /api/products/:id  - 删除产品");
    info!("   GET    /health            - 健康检查");
    info!("   静态页面目录: {}", config.server.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已安全关闭");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到停止信号，正在关闭服务器..."),
        Err(e) => warn!("无法监听 Ctrl+C 信号: {}", e),
    }
}
