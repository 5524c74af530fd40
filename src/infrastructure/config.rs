//! 配置加载与校验

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "PRODUCT_PROXY_CONFIG";

/// 代理服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 上游产品 API 配置
    pub upstream: UpstreamConfig,
    /// 分页缓存配置
    pub cache: CacheConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 静态页面目录
    pub static_dir: PathBuf,
    /// 单个请求的超时时间（秒）
    pub request_timeout_seconds: u64,
}

/// 上游产品 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// 产品集合的完整 URL
    pub base_url: String,
    /// 上游请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 分页缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 缓存条目存活时间（秒）
    pub ttl_seconds: u64,
    /// 最多缓存的分页数量
    pub max_pages: u64,
    /// 未指定 offset 时的默认值
    pub default_offset: i64,
    /// 未指定 limit 时的默认值
    pub default_limit: i64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.escuelajs.co/api/v1/products".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 5 * 60,
            max_pages: 1000,
            default_offset: 0,
            default_limit: 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_prefix: "product-proxy".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// 解析监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl LoggingConfig {
    /// 解析日志级别，无效值回退到 INFO
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        self.server.socket_addr()?;

        let base_url = &self.upstream.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "上游地址必须是 http(s) URL: {}",
                base_url
            )));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }
        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::Validation("上游超时时间必须大于0".to_string()));
        }
        if self.cache.max_pages == 0 {
            return Err(ConfigError::Validation("缓存分页数量必须大于0".to_string()));
        }
        if self.cache.ttl_seconds == 0 {
            return Err(ConfigError::Validation("缓存 TTL 必须大于0".to_string()));
        }
        if self.cache.default_limit <= 0 {
            return Err(ConfigError::Validation("默认 limit 必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载并校验配置
///
/// 查找顺序：`PRODUCT_PROXY_CONFIG` 指定的文件、`config.toml`、
/// `./config/config.toml`。都不存在时使用默认配置。
pub fn load_config() -> Result<Config, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let config = Config::load_from_file(&path)?;
        config.validate()?;
        return Ok(config);
    }

    let config_paths = ["config.toml", "./config/config.toml"];
    let config = config_paths
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Config::load_from_file)
        .transpose()?
        .unwrap_or_default();

    config.validate()?;
    Ok(config)
}
