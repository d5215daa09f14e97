//! 情绪分析错误类型

use thiserror::Error;

/// 错误信息中保留的响应 body 最大字符数
pub const BODY_PREVIEW_CHARS: usize = 200;

/// 情绪分析操作的错误
#[derive(Error, Debug)]
pub enum EmotionError {
    /// 远程服务返回非 2xx 状态码，`body` 保留完整响应，Display 只显示前缀
    #[error("Remote service error ({status}): {}", body_preview(.body))]
    RemoteService { status: u16, body: String },

    /// 响应 JSON 缺少预期路径或字段
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// 请求未拿到 HTTP 状态（DNS、连接、超时、读取 body 失败）
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmotionError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// 远程服务返回的状态码（仅 RemoteService 有值）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 截断过长的响应 body，按字符边界切分
fn body_preview(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}
