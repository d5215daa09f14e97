//! 情绪类型定义
//!
//! 五种固定情绪、分数记录以及主导情绪的计算。

use serde::{Deserialize, Serialize};

// ============================================================================
// Emotion - 情绪类别
// ============================================================================

/// 远程模型输出的五种情绪，声明顺序即平分时的优先顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// 固定顺序：anger, disgust, fear, joy, sadness
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// 响应 JSON 中使用的字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EmotionScores - 情绪分数
// ============================================================================

/// 五种情绪的分数，原样保留远程服务返回的值（不做截断或归一化）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// 按固定顺序返回 (情绪, 分数)
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// 分数最高的情绪，平分时取固定顺序中靠前的一个
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::Anger;
        let mut best_score = self.anger;
        for (emotion, score) in self.iter().skip(1) {
            // 严格大于，保证先出现者胜出
            if score > best_score {
                best = emotion;
                best_score = score;
            }
        }
        best
    }
}

// ============================================================================
// EmotionResult - 分析结果
// ============================================================================

/// 扁平的分析结果：五个分数加主导情绪
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    #[serde(flatten)]
    pub scores: EmotionScores,
    pub dominant_emotion: Emotion,
}

impl EmotionResult {
    pub fn from_scores(scores: EmotionScores) -> Self {
        Self {
            dominant_emotion: scores.dominant(),
            scores,
        }
    }

    /// 主导情绪的分数
    pub fn dominant_score(&self) -> f64 {
        self.scores.get(self.dominant_emotion)
    }
}

impl From<EmotionScores> for EmotionResult {
    fn from(scores: EmotionScores) -> Self {
        Self::from_scores(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores { anger, disgust, fear, joy, sadness }
    }

    #[test]
    fn test_dominant_picks_maximum() {
        assert_eq!(scores(0.1, 0.05, 0.05, 0.8, 0.0).dominant(), Emotion::Joy);
        assert_eq!(scores(0.1, 0.2, 0.3, 0.1, 0.9).dominant(), Emotion::Sadness);
        assert_eq!(scores(0.7, 0.2, 0.3, 0.1, 0.6).dominant(), Emotion::Anger);
    }

    #[test]
    fn test_dominant_all_equal_is_anger() {
        assert_eq!(scores(0.2, 0.2, 0.2, 0.2, 0.2).dominant(), Emotion::Anger);
    }

    #[test]
    fn test_dominant_tie_prefers_earlier_key() {
        assert_eq!(scores(0.1, 0.4, 0.4, 0.1, 0.0).dominant(), Emotion::Disgust);
        assert_eq!(scores(0.0, 0.0, 0.1, 0.5, 0.5).dominant(), Emotion::Joy);
    }

    #[test]
    fn test_dominant_all_zero() {
        assert_eq!(EmotionScores::default().dominant(), Emotion::Anger);
    }

    #[test]
    fn test_iter_follows_fixed_order() {
        let names: Vec<&str> = scores(0.1, 0.2, 0.3, 0.4, 0.5)
            .iter()
            .map(|(e, _)| e.as_str())
            .collect();
        assert_eq!(names, vec!["anger", "disgust", "fear", "joy", "sadness"]);
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = EmotionResult::from_scores(scores(0.1, 0.05, 0.05, 0.8, 0.0));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "anger": 0.1,
                "disgust": 0.05,
                "fear": 0.05,
                "joy": 0.8,
                "sadness": 0.0,
                "dominant_emotion": "joy"
            })
        );
    }

    #[test]
    fn test_dominant_score() {
        let result = EmotionResult::from(scores(0.1, 0.05, 0.05, 0.8, 0.0));
        assert_eq!(result.dominant_score(), 0.8);
    }
}
