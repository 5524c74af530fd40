//! 日志基础设施

use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// 1. 创建日志目录
    /// 2. 设置按日期分割的文件日志
    /// 3. 按配置决定是否同时输出到控制台
    ///
    /// `RUST_LOG` 存在时优先于配置中的级别。返回的 guard 需要在进程
    /// 生命周期内持有，否则文件日志会在 drop 时停止写入。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
        let (non_blocking, guard) = non_blocking(file_appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level().as_str().to_lowercase()));

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                // 文件中不使用颜色
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_names(true),
            )
            .with(console_layer)
            .try_init()?;

        Ok(guard)
    }
}
