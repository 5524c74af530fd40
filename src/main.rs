use product_proxy::infrastructure::logger::Logger;
use product_proxy::{load_config, server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化配置系统
    let config = load_config()?;

    // 初始化日志系统
    let _guard = Logger::init(&config.logging)?;

    info!("启动产品代理服务 v{}", env!("CARGO_PKG_VERSION"));

    server::run(config).await
}
