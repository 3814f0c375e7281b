//! Lexicon-based sentiment scoring
//!
//! Each token found in the AFINN-165 word list contributes its valence to the
//! score. A valence is inverted when the token before it is a negator
//! ("not happy" scores -3). The comparative score normalizes by token count.

pub mod lexicon;

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use lexicon::{AFINN_165, NEGATORS, parse_valences};

/// Scoring breakdown for one piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentResult {
    pub score: i32,
    pub comparative: f64,
    pub tokens: Vec<String>,
    /// Tokens that matched the lexicon, in text order
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Anything that can turn text into a sentiment score
pub trait SentimentScorer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentResult;
}

/// Default scorer backed by the embedded AFINN-165 list
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, i32>,
    negators: HashSet<&'static str>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::with_valences(parse_valences(AFINN_165))
    }

    pub fn with_valences(valences: HashMap<String, i32>) -> Self {
        Self {
            valences,
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    pub fn valence(&self, word: &str) -> Option<i32> {
        self.valences.get(word).copied()
    }

    pub fn lexicon_size(&self) -> usize {
        self.valences.len()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let mut result = SentimentResult::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(token) else {
                continue;
            };
            if i > 0 && self.negators.contains(tokens[i - 1].as_str()) {
                valence = -valence;
            }

            result.score += valence;
            result.words.push(token.clone());
            if valence > 0 {
                result.positive.push(token.clone());
            } else if valence < 0 {
                result.negative.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            result.comparative = f64::from(result.score) / tokens.len() as f64;
        }
        result.tokens = tokens;
        result
    }
}

/// Lowercase, strip punctuation (apostrophes and hyphens survive) and split
/// on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
