// src/state.rs
// Shared application state handed to every request handler

use std::sync::Arc;

use crate::chat::TipCatalog;
use crate::config::Config;
use crate::history::MoodHistory;
use crate::sentiment::{LexiconScorer, SentimentScorer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Text -> sentiment score
    pub scorer: Arc<dyn SentimentScorer>,

    /// Read-only tip tables
    pub tips: Arc<TipCatalog>,

    /// The only mutable state: bounded mood history
    pub history: Arc<MoodHistory>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn SentimentScorer>, tips: TipCatalog, history: MoodHistory) -> Self {
        Self {
            scorer,
            tips: Arc::new(tips),
            history: Arc::new(history),
        }
    }

    /// State backed by the built-in lexicon scorer
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(LexiconScorer::new()),
            config.tips.clone(),
            MoodHistory::new(config.history_capacity),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
