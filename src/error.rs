use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 出站账本查询错误
///
/// 只在适配器边界内部流转，核验器会将其统一降级为“不确定”结果
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// 转换 reqwest 错误；去掉 URL，避免查询参数中的 API Key 进入结果
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// 指标标签
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppErrorCode {
    BadRequest,
    ChainNotSupported,
}

/// HTTP 层错误
#[derive(Debug, Clone)]
pub struct AppError {
    pub code: AppErrorCode,
    pub message: String,
    pub status: StatusCode,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code_str = match self.code {
            AppErrorCode::BadRequest => "bad_request",
            AppErrorCode::ChainNotSupported => "chain_not_supported",
        };
        let body = ErrorBody {
            code: code_str,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::BadRequest,
            message: msg.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn chain_not_supported(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::ChainNotSupported,
            message: msg.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_messages() {
        assert_eq!(
            UpstreamError::Timeout(10).to_string(),
            "request timed out after 10s"
        );
        assert_eq!(UpstreamError::Status(503).to_string(), "unexpected HTTP status 503");
        assert_eq!(UpstreamError::Decode("x".into()).kind(), "decode");
    }

    #[test]
    fn test_app_error_status() {
        let resp = AppError::chain_not_supported("Unsupported network identifier: foo")
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::bad_request("At most 50 addresses per request")
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
