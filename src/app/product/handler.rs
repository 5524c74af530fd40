//! 产品接口处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use serde_json::Value;

use super::{model::ListQuery, service::ProductService};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    /// 未指定 offset 时的默认值
    pub default_offset: i64,
    /// 未指定 limit 时的默认值
    pub default_limit: i64,
}

/// 健康检查数据
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub cached_pages: u64,
    pub cache_ttl_seconds: u64,
}

/// `GET /api/products?offset=&limit=&refresh=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, CoreError> {
    let params = query.resolve(state.default_offset, state.default_limit);
    let page = state.product_service.list(params).await?;
    Ok(Json(page))
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), CoreError> {
    let Json(payload) = payload?;
    let product = state.product_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/:id`
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, CoreError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let product = state.product_service.update(id, payload).await?;
    Ok(Json(product))
}

/// `DELETE /api/products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let Path(id) = id?;
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let cache = state.product_service.cache();
    Json(ApiResponse::success(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        cached_pages: cache.entry_count(),
        cache_ttl_seconds: cache.ttl().as_secs(),
    }))
}
