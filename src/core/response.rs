//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

/// API 响应结构
///
/// 只用于代理自身的端点（如健康检查）；转发的产品数据原样返回。
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
