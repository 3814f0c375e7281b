//! Mood classification from a sentiment score
//!
//! Maps an integer polarity score onto five fixed bands:
//! - veryNegative: score <= -3
//! - negative: -3 < score < 0
//! - neutral: score == 0
//! - positive: 0 < score < 3
//! - veryPositive: score >= 3

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Discrete mood bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoodCategory {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        Self::VeryNegative,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::VeryPositive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "veryNegative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "veryPositive",
        }
    }

    /// Coarse grouping used to pick the empathetic preamble
    pub fn group(&self) -> MoodGroup {
        match self {
            Self::VeryNegative | Self::Negative => MoodGroup::Low,
            Self::Neutral => MoodGroup::Steady,
            Self::Positive | Self::VeryPositive => MoodGroup::High,
        }
    }
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl std::fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown mood '{}'", self.0)
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for MoodCategory {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Mood groups sharing one preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodGroup {
    Low,
    Steady,
    High,
}

/// Classify a sentiment score into a mood band
pub fn classify(score: i32) -> MoodCategory {
    match score {
        i32::MIN..=-3 => MoodCategory::VeryNegative,
        -2..=-1 => MoodCategory::Negative,
        0 => MoodCategory::Neutral,
        1..=2 => MoodCategory::Positive,
        3.. => MoodCategory::VeryPositive,
    }
}
