//! 情绪分析 - Watson NLP EmotionPredict 客户端和结果类型

pub mod client;
pub mod transport;
pub mod types;

pub use client::{emotion_detector, parse_response, EmotionClient, EmotionConfig};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Emotion, EmotionResult, EmotionScores};
