//! Emotion Detector CLI
//!
//! 通过 Watson NLP EmotionPredict 服务分析文本情绪

use anyhow::Result;
use clap::{Parser, Subcommand};
use emotion_detector::cli::{
    handle_analyze, handle_config, AnalyzeArgs, ConfigArgs, ConfigOverrides,
};
use emotion_detector::EmotionConfig;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "emo")]
#[command(about = "Emotion Detector - 分析文本的主导情绪")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 分析文本情绪
    Analyze(AnalyzeArgs),
    /// 显示生效配置
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    // 日志输出到 stderr，保证 --json 的 stdout 干净
    // 例如: RUST_LOG=debug emo analyze "I am happy"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("emotion_detector=info,emo=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    let config = cli.overrides.apply(EmotionConfig::auto_load());
    debug!(url = %config.url, timeout_ms = config.timeout_ms, "Resolved configuration");

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, config)?,
        Commands::Config(args) => handle_config(args, &config)?,
    }

    Ok(())
}
