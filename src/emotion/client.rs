//! Watson NLP 情绪分析客户端
//!
//! 把文本发送到远程 EmotionPredict 服务，并将响应整理为五个情绪分数加主导情绪。
//!
//! 配置读取优先级（逐字段）：
//! 1. 环境变量 `EMOTION_DETECTOR_URL` / `EMOTION_DETECTOR_MODEL_ID` / `EMOTION_DETECTOR_TIMEOUT_MS`
//! 2. 配置文件 `~/.config/emotion-detector/config.json`（字段 `url`、`model_id`、`timeout_ms`）
//! 3. 内置默认值

use crate::emotion::transport::{HttpTransport, ReqwestTransport};
use crate::emotion::types::{Emotion, EmotionResult, EmotionScores};
use crate::error::EmotionError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// EmotionPredict 服务地址
pub const EMOTION_API_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// 指定模型的请求头
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// 默认模型
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// 默认超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_URL: &str = "EMOTION_DETECTOR_URL";
pub const ENV_MODEL_ID: &str = "EMOTION_DETECTOR_MODEL_ID";
pub const ENV_TIMEOUT_MS: &str = "EMOTION_DETECTOR_TIMEOUT_MS";

/// 情绪分析客户端配置
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionConfig {
    /// 服务地址
    pub url: String,
    /// `grpc-metadata-mm-model-id` 头的值
    pub model_id: String,
    /// 请求超时（毫秒），0 表示不限
    pub timeout_ms: u64,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            url: EMOTION_API_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    url: Option<String>,
    model_id: Option<String>,
    timeout_ms: Option<u64>,
}

impl EmotionConfig {
    /// 默认配置文件路径 `~/.config/emotion-detector/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config/emotion-detector/config.json"))
    }

    /// 从环境变量和默认配置文件加载，任何来源缺失都回退到默认值
    pub fn auto_load() -> Self {
        Self::load_with(Self::default_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// 从指定配置文件和环境变量查找函数加载
    pub fn load_with<F>(config_path: Option<&Path>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) if path.exists() => match Self::from_file(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded emotion detector config file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = env(ENV_URL) {
            debug!("Using {} from environment", ENV_URL);
            config.url = url;
        }
        if let Some(model_id) = env(ENV_MODEL_ID) {
            debug!("Using {} from environment", ENV_MODEL_ID);
            config.model_id = model_id;
        }
        if let Some(raw) = env(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.timeout_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_MS),
            }
        }

        config
    }

    /// 解析单个配置文件，未出现的字段取默认值
    pub fn from_file(path: &Path) -> Result<Self, EmotionError> {
        let content = fs::read_to_string(path).map_err(|e| {
            EmotionError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let file: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            EmotionError::Config(format!("Cannot parse {}: {}", path.display(), e))
        })?;

        let defaults = Self::default();
        Ok(Self {
            url: file.url.filter(|u| !u.trim().is_empty()).unwrap_or(defaults.url),
            model_id: file
                .model_id
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.model_id),
            timeout_ms: file.timeout_ms.unwrap_or(defaults.timeout_ms),
        })
    }
}

/// 情绪分析客户端
pub struct EmotionClient {
    transport: Box<dyn HttpTransport>,
    pub(crate) config: EmotionConfig,
}

impl EmotionClient {
    /// 使用 reqwest 传输层创建客户端
    pub fn new(config: EmotionConfig) -> Result<Self, EmotionError> {
        let transport = ReqwestTransport::new(config.timeout_ms)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// 从自动加载的配置创建客户端
    pub fn from_config() -> Result<Self, EmotionError> {
        Self::new(EmotionConfig::auto_load())
    }

    /// 使用自定义传输层创建客户端
    pub fn with_transport(config: EmotionConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &EmotionConfig {
        &self.config
    }

    /// 分析文本情绪
    ///
    /// 单次请求，不重试。非 2xx 返回 `RemoteService`，响应结构不符返回 `MalformedResponse`。
    pub fn analyze(&self, text: &str) -> Result<EmotionResult, EmotionError> {
        let body = request_body(text);
        let headers = [
            (MODEL_ID_HEADER, self.config.model_id.as_str()),
            ("content-type", "application/json"),
        ];

        debug!(
            url = %self.config.url,
            model = %self.config.model_id,
            text_len = text.len(),
            "Sending request to emotion service"
        );

        let start = std::time::Instant::now();
        let response = self.transport.post_json(&self.config.url, &headers, &body)?;

        debug!(
            status = response.status,
            elapsed_ms = start.elapsed().as_millis(),
            "Emotion request completed"
        );

        if !response.is_success() {
            warn!(status = response.status, "Emotion service returned error status");
            return Err(EmotionError::RemoteService {
                status: response.status,
                body: response.body,
            });
        }

        parse_response(&response.body).map_err(|e| {
            warn!(error = %e, "Unexpected emotion service response");
            e
        })
    }
}

/// 构造请求体 `{"raw_document":{"text":...}}`
pub(crate) fn request_body(text: &str) -> String {
    json!({ "raw_document": { "text": text } }).to_string()
}

/// 解析 EmotionPredict 响应，取 `emotionPredictions[0].emotion` 下的五个分数
pub fn parse_response(body: &str) -> Result<EmotionResult, EmotionError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| EmotionError::malformed(format!("invalid JSON: {}", e)))?;

    let predictions = value
        .get("emotionPredictions")
        .ok_or_else(|| EmotionError::malformed("missing emotionPredictions"))?
        .as_array()
        .ok_or_else(|| EmotionError::malformed("emotionPredictions is not an array"))?;

    let emotion = predictions
        .first()
        .ok_or_else(|| EmotionError::malformed("emotionPredictions is empty"))?
        .get("emotion")
        .ok_or_else(|| EmotionError::malformed("missing emotionPredictions[0].emotion"))?;

    let score = |e: Emotion| -> Result<f64, EmotionError> {
        emotion
            .get(e.as_str())
            .ok_or_else(|| EmotionError::malformed(format!("missing emotion key '{}'", e)))?
            .as_f64()
            .ok_or_else(|| EmotionError::malformed(format!("emotion key '{}' is not a number", e)))
    };

    let scores = EmotionScores {
        anger: score(Emotion::Anger)?,
        disgust: score(Emotion::Disgust)?,
        fear: score(Emotion::Fear)?,
        joy: score(Emotion::Joy)?,
        sadness: score(Emotion::Sadness)?,
    };

    Ok(EmotionResult::from_scores(scores))
}

/// 使用自动加载的配置分析一段文本
pub fn emotion_detector(text: &str) -> Result<EmotionResult, EmotionError> {
    EmotionClient::from_config()?.analyze(text)
}
