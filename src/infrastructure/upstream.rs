//! 上游账本查询客户端
//!
//! 由 `VerifierConfig` 显式构造后注入核验器，不使用全局单例。
//! 每次调用只发一个请求，不重试；超时与其他错误一样交给调用方降级处理。

use std::time::Instant;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    StatusCode,
};

use crate::{config::VerifierConfig, error::UpstreamError};

/// 上游响应（状态码 + 可选JSON体）
#[derive(Debug, Clone)]
pub struct LedgerResponse {
    pub status: StatusCode,
    pub body: Option<serde_json::Value>,
}

impl LedgerResponse {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// 2xx 且有合法JSON体时返回该体，否则视为异常响应
    pub fn json(&self) -> Result<&serde_json::Value, UpstreamError> {
        if !self.status.is_success() {
            return Err(UpstreamError::Status(self.status.as_u16()));
        }
        self.body
            .as_ref()
            .ok_or_else(|| UpstreamError::Decode("response body is not valid JSON".into()))
    }
}

#[derive(Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    timeout_secs: u64,
}

impl LedgerClient {
    pub fn new(config: &VerifierConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| anyhow::anyhow!("Invalid header name {}: {}", name, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| anyhow::anyhow!("Invalid header value for {}: {}", name, e))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            timeout_secs: config.timeout_secs,
        })
    }

    /// 发送单个 GET 请求
    ///
    /// 非2xx状态码不会在这里报错，由适配器决定 404 等状态的语义
    pub async fn get(&self, url: &str) -> Result<LedgerResponse, UpstreamError> {
        let start = Instant::now();
        let result = self.send(url).await;
        crate::metrics::observe_upstream_latency_ms(start.elapsed().as_millis(), result.is_ok());
        result
    }

    async fn send(&self, url: &str) -> Result<LedgerResponse, UpstreamError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout_secs))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout_secs))?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();

        Ok(LedgerResponse { status, body })
    }
}

/// 将模板中的占位符替换为值
pub fn render_endpoint(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}
