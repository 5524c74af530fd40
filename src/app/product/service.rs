//! 产品业务服务：转发上游并维护分页缓存

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use super::cache::PageCache;
use super::model::{sort_by_id, ListParams};
use crate::core::error::CoreError;
use crate::infrastructure::upstream::{ProductApi, UpstreamError};

#[derive(Clone)]
pub struct ProductService {
    api: Arc<dyn ProductApi>,
    cache: PageCache,
}

impl ProductService {
    pub fn new(api: Arc<dyn ProductApi>, cache: PageCache) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// 读取一页产品
    ///
    /// 未要求刷新时优先返回缓存；否则请求上游，排序后写回缓存。
    pub async fn list(&self, params: ListParams) -> Result<Value, CoreError> {
        if !params.refresh {
            if let Some(page) = self.cache.get(&params.page) {
                return Ok(page);
            }
        }

        let doc = self
            .api
            .list(params.page.offset, params.page.limit)
            .await
            .map_err(|e| upstream_failure("Failed to fetch products", e))?;

        let page = sort_by_id(doc);
        self.cache.insert(params.page, page.clone());
        debug!(page = %params.page, refresh = params.refresh, "分页已从上游加载");
        Ok(page)
    }

    pub async fn create(&self, body: Value) -> Result<Value, CoreError> {
        let created = self
            .api
            .create(body)
            .await
            .map_err(|e| upstream_failure("Failed to create product", e))?;
        self.cache.clear();
        Ok(created)
    }

    pub async fn update(&self, id: u64, body: Value) -> Result<Value, CoreError> {
        let updated = self
            .api
            .update(id, body)
            .await
            .map_err(|e| upstream_failure("Failed to update product", e))?;
        self.cache.clear();
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), CoreError> {
        self.api
            .delete(id)
            .await
            .map_err(|e| upstream_failure("Failed to delete product", e))?;
        self.cache.clear();
        Ok(())
    }
}

/// 上游错误只记录在日志中，客户端只看到固定的提示
fn upstream_failure(message: &str, err: UpstreamError) -> CoreError {
    error!("{}: {}", message, err);
    CoreError::InternalServerError(message.to_string())
}
