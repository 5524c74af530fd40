//! # 产品代理服务
//!
//! 把浏览器表格界面的产品 CRUD 请求转发到第三方 REST API：
//! - 列表读取带分页 TTL 缓存，键为 `offset:limit`
//! - 任何成功的写操作都会清空缓存
//! - 其余路径提供 `public/` 下的静态页面

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::{product::handler::AppState, router};
pub use infrastructure::config::{load_config, Config, ConfigError};
pub use infrastructure::upstream::{HttpProductApi, ProductApi, UpstreamError};
