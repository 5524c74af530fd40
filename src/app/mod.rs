//! 应用层：路由装配

pub mod product;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::Config;
use crate::infrastructure::upstream::ProductApi;
use product::{
    cache::PageCache,
    handler::{self, AppState},
    service::ProductService,
};

impl AppState {
    /// 根据配置和上游实现构建应用状态
    pub fn from_config(config: &Config, api: Arc<dyn ProductApi>) -> Self {
        let cache = PageCache::new(config.cache.ttl(), config.cache.max_pages);
        Self {
            product_service: ProductService::new(api, cache),
            default_offset: config.cache.default_offset,
            default_limit: config.cache.default_limit,
        }
    }
}

/// 创建完整路由：API、健康检查，其余路径交给静态目录
pub fn router(state: AppState, static_dir: impl AsRef<Path>, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            put(handler::update_product).delete(handler::delete_product),
        )
        .route("/health", get(handler::health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
