//! 基础设施层：配置、日志、上游客户端

pub mod config;
pub mod logger;
pub mod upstream;
