// src/cli/config.rs
//! Config 命令 - 显示生效配置

use crate::cli::output::format_output;
use crate::emotion::client::MODEL_ID_HEADER;
use crate::emotion::EmotionConfig;
use anyhow::Result;
use clap::Args;
use serde::Serialize;

/// Config 命令参数
#[derive(Args)]
pub struct ConfigArgs {
    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// Config 命令输出
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub url: String,
    pub model_header: String,
    pub model_id: String,
    pub timeout_ms: u64,
    pub config_file: Option<String>,
    pub config_file_exists: bool,
}

impl ConfigOutput {
    pub fn new(config: &EmotionConfig) -> Self {
        let path = EmotionConfig::default_path();
        Self {
            url: config.url.clone(),
            model_header: MODEL_ID_HEADER.to_string(),
            model_id: config.model_id.clone(),
            timeout_ms: config.timeout_ms,
            config_file_exists: path.as_ref().map(|p| p.exists()).unwrap_or(false),
            config_file: path.map(|p| p.to_string_lossy().into_owned()),
        }
    }
}

/// 处理 config 命令
pub fn handle_config(args: ConfigArgs, config: &EmotionConfig) -> Result<()> {
    let output = ConfigOutput::new(config);

    if args.json {
        println!("{}", format_output(&output));
    } else {
        println!("url:         {}", output.url);
        println!("header:      {}: {}", output.model_header, output.model_id);
        println!("timeout_ms:  {}", output.timeout_ms);
        match &output.config_file {
            Some(path) if output.config_file_exists => println!("config file: {}", path),
            Some(path) => println!("config file: {} (not found, using defaults)", path),
            None => println!("config file: <no home directory>"),
        }
    }
    Ok(())
}
