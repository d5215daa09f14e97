//! Emotion Detector - 通过远程情绪预测服务分析文本的主导情绪

pub mod cli;
pub mod emotion;
pub mod error;

pub use emotion::{
    emotion_detector, parse_response, Emotion, EmotionClient, EmotionConfig, EmotionResult,
    EmotionScores, HttpResponse, HttpTransport, ReqwestTransport,
};
pub use error::EmotionError;
