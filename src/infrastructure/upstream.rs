//! 上游产品 API 客户端

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::config::UpstreamConfig;

/// 上游调用错误
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("请求上游失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("上游返回错误状态 {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("上游响应解析失败: {0}")]
    Decode(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// 产品集合的 CRUD 接口
///
/// 产品文档不做结构约束，原样透传。
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET {base}?offset=&limit=`
    async fn list(&self, offset: i64, limit: i64) -> UpstreamResult<Value>;

    /// `POST {base}`
    async fn create(&self, body: Value) -> UpstreamResult<Value>;

    /// `PUT {base}/{id}`
    async fn update(&self, id: u64, body: Value) -> UpstreamResult<Value>;

    /// `DELETE {base}/{id}`，响应体被忽略
    async fn delete(&self, id: u64) -> UpstreamResult<()>;
}

/// 基于 reqwest 的上游实现
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// 非 2xx 状态转换为错误，保留响应体便于排查
    async fn check(response: reqwest::Response) -> UpstreamResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(UpstreamError::Status { status, body })
    }

    async fn decode(response: reqwest::Response) -> UpstreamResult<Value> {
        let bytes = Self::check(response).await?.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self, offset: i64, limit: i64) -> UpstreamResult<Value> {
        debug!(offset, limit, "GET {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create(&self, body: Value) -> UpstreamResult<Value> {
        debug!("POST {}", self.base_url);
        let response = self.client.post(&self.base_url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, id: u64, body: Value) -> UpstreamResult<Value> {
        let url = self.item_url(id);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: u64) -> UpstreamResult<()> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
