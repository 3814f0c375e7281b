// src/api/types.rs
// Request and response bodies for the REST API

use serde::{Deserialize, Serialize};

use crate::chat::{ChatReply, MoodCategory, ResponsePayload};
use crate::history::MoodHistoryEntry;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing or null is treated the same as empty
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Normal,
    Crisis,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub tip: Option<String>,
    pub additional_tips: Vec<String>,
    pub mood: MoodCategory,
    pub sentiment_score: i32,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// Only set for crisis responses
    pub resources: Option<Vec<String>>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        let mood = reply.mood;
        let sentiment_score = reply.score();

        match reply.response {
            ResponsePayload::Crisis { message, resources } => Self {
                success: true,
                response: message,
                tip: None,
                additional_tips: Vec::new(),
                mood,
                sentiment_score,
                kind: ResponseKind::Crisis,
                resources: Some(resources),
            },
            ResponsePayload::Normal {
                message,
                tip,
                additional_tips,
                ..
            } => Self {
                success: true,
                response: message,
                tip: Some(tip),
                additional_tips,
                mood,
                sentiment_score,
                kind: ResponseKind::Normal,
                resources: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveMoodRequest {
    #[serde(default)]
    pub message: String,
    pub mood: MoodCategory,
    pub score: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<MoodHistoryEntry>,
}

impl HistoryResponse {
    pub fn ok(history: Vec<MoodHistoryEntry>) -> Self {
        Self {
            success: true,
            history,
        }
    }
}
