//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 请求体或路径参数无法解析
    BadRequest(String),
    InternalServerError(String),
}

/// 错误响应结构
///
/// `error` 字段保持为面向用户的消息，浏览器端直接展示它。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::BadRequest(msg) | CoreError::InternalServerError(msg) => msg,
        };

        let error_response = ErrorResponse {
            error: message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_internal_error_body() {
        let response =
            CoreError::InternalServerError("Failed to fetch products".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Failed to fetch products");
        assert_eq!(json["code"], 500);
        assert!(json["timestamp"].is_string());
    }
}
