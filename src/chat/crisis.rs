//! Crisis detection
//!
//! A message is treated as a crisis when it mentions one of a fixed set of
//! phrases or its sentiment score is at or below [`CRISIS_SCORE_THRESHOLD`].
//! Matching is a plain substring check on the lowercased text, so phrases
//! embedded in longer words still match.

/// Phrases that always route to the crisis response
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "want to die",
];

/// Scores at or below this value are a crisis regardless of wording
pub const CRISIS_SCORE_THRESHOLD: i32 = -5;

pub const CRISIS_MESSAGE: &str = "I'm concerned about what you've shared. Your life has value, and there are people who want to help.";

/// Emergency resources, in display order
pub const CRISIS_RESOURCES: &[&str] = &[
    "National Suicide Prevention Lifeline: 988 (US)",
    "Crisis Text Line: Text HOME to 741741",
    "Your campus counseling center",
    "Emergency services: 911",
];

/// Check a message and its score for crisis signals
pub fn is_crisis(text: &str, score: i32) -> bool {
    score <= CRISIS_SCORE_THRESHOLD || mentions_crisis_phrase(text)
}

pub fn mentions_crisis_phrase(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|p| text_lower.contains(p))
}
