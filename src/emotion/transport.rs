//! HTTP 传输层
//!
//! `EmotionClient` 只依赖 `HttpTransport`，测试时可替换为 mock。

use crate::error::EmotionError;
use std::time::Duration;

/// 一次 POST 请求的原始响应
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 发送 POST 请求的传输层 trait，`body` 为已编码的 JSON
pub trait HttpTransport: Send + Sync {
    /// 发送请求，拿到任意 HTTP 状态都返回 Ok；未拿到状态时返回 `EmotionError::Transport`
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, EmotionError>;
}

/// 基于 `reqwest::blocking` 的实现
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// `timeout_ms` 为 0 时不设超时
    pub fn new(timeout_ms: u64) -> Result<Self, EmotionError> {
        let mut builder = reqwest::blocking::Client::builder();
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| EmotionError::Config(format!("Cannot create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, EmotionError> {
        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .map_err(|e| EmotionError::Transport(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| EmotionError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
