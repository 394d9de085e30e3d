//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Name and age are required")]
    Validation,
    #[error("User not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
    /// 请求体无法解析，沿用框架的默认响应
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation => StatusCode::BAD_REQUEST,
            CoreError::NotFound => StatusCode::NOT_FOUND,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::Rejected(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::Rejected(rejection) => return rejection.into_response(),
            CoreError::Internal(msg) => {
                error!("内部错误: {}", msg);
                msg
            }
            other => other.to_string(),
        };

        let error_response = ErrorResponse { error: message };

        (status, Json(error_response)).into_response()
    }
}
