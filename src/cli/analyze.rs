// src/cli/analyze.rs
//! Analyze 命令 - 分析文本情绪
//!
//! 文本来自命令行参数，缺省或为 `-` 时从 stdin 读取。

use crate::cli::output::render_result;
use crate::emotion::{EmotionClient, EmotionConfig};
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use tracing::info;

/// Analyze 命令参数
#[derive(Args)]
pub struct AnalyzeArgs {
    /// 待分析文本（省略或 `-` 时读取 stdin）
    pub text: Option<String>,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// 全局配置覆盖参数
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// 覆盖服务地址
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// 覆盖请求超时（毫秒，0 表示不限）
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,
}

impl ConfigOverrides {
    /// 命令行参数优先于环境变量和配置文件
    pub fn apply(&self, mut config: EmotionConfig) -> EmotionConfig {
        if let Some(url) = self.url.as_ref().filter(|u| !u.is_empty()) {
            config.url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }
}

/// 解析输入文本
pub fn read_input<R: Read>(text: Option<String>, mut stdin: R) -> Result<String> {
    match text {
        Some(t) if t != "-" => Ok(t),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

/// 处理 analyze 命令
pub fn handle_analyze(args: AnalyzeArgs, config: EmotionConfig) -> Result<()> {
    let text = read_input(args.text, std::io::stdin().lock())?;

    let client = EmotionClient::new(config)?;
    let result = client.analyze(&text)?;

    info!(
        dominant = %result.dominant_emotion,
        score = result.dominant_score(),
        "Emotion analysis completed"
    );

    println!("{}", render_result(&result, args.json));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_prefers_argument() {
        let text = read_input(Some("I am happy".to_string()), "ignored".as_bytes()).unwrap();
        assert_eq!(text, "I am happy");
    }

    #[test]
    fn test_read_input_dash_reads_stdin() {
        let text = read_input(Some("-".to_string()), "from stdin\n".as_bytes()).unwrap();
        assert_eq!(text, "from stdin\n");
    }

    #[test]
    fn test_read_input_missing_reads_stdin() {
        let text = read_input(None, "".as_bytes()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ConfigOverrides {
            url: Some("http://127.0.0.1:9/predict".to_string()),
            timeout_ms: Some(0),
        };
        let config = overrides.apply(EmotionConfig::default());
        assert_eq!(config.url, "http://127.0.0.1:9/predict");
        assert_eq!(config.timeout_ms, 0);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let config = ConfigOverrides::default().apply(EmotionConfig::default());
        assert_eq!(config, EmotionConfig::default());
    }
}
