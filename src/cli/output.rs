//! Output formatting for CLI commands

use crate::emotion::EmotionResult;
use serde::Serialize;

/// Format output as pretty JSON
pub fn format_output<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// 以表格形式输出分析结果，主导情绪行以 `*` 标记
pub fn format_result_table(result: &EmotionResult) -> String {
    let mut lines = Vec::with_capacity(7);
    for (emotion, score) in result.scores.iter() {
        let marker = if emotion == result.dominant_emotion { "*" } else { " " };
        lines.push(format!("{} {:<8} {:.4}", marker, emotion.as_str(), score));
    }
    lines.push(String::new());
    lines.push(format!("dominant_emotion: {}", result.dominant_emotion));
    lines.join("\n")
}

/// 按 --json 标志选择输出格式
pub fn render_result(result: &EmotionResult, json: bool) -> String {
    if json {
        format_output(result)
    } else {
        format_result_table(result)
    }
}
