//! Chat pipeline
//!
//! text -> sentiment score -> mood + crisis check -> response payload.
//! Every call is independent; the only randomness is the tip draw.

pub mod crisis;
pub mod mood;
pub mod response;
pub mod tips;

pub use crisis::is_crisis;
pub use mood::{MoodCategory, classify};
pub use response::{ResponsePayload, select_response};
pub use tips::TipCatalog;

use rand::Rng;

use crate::error::{ChatError, ChatResult};
use crate::sentiment::{SentimentResult, SentimentScorer};

/// Everything produced for one user message
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub analysis: SentimentResult,
    pub mood: MoodCategory,
    pub response: ResponsePayload,
}

impl ChatReply {
    pub fn score(&self) -> i32 {
        self.analysis.score
    }
}

/// Score a message and pick the reply for it
pub fn respond<R: Rng>(
    scorer: &dyn SentimentScorer,
    catalog: &TipCatalog,
    message: &str,
    rng: &mut R,
) -> ChatResult<ChatReply> {
    if message.trim().is_empty() {
        return Err(ChatError::EmptyInput);
    }

    let analysis = scorer.analyze(message);
    let mood = classify(analysis.score);
    let crisis = is_crisis(message, analysis.score);
    let response = select_response(catalog, mood, analysis.score, crisis, rng);

    Ok(ChatReply {
        analysis,
        mood,
        response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconScorer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scorer returning a fixed score and counting calls
    struct FixedScorer {
        score: i32,
        calls: AtomicUsize,
    }

    impl FixedScorer {
        fn new(score: i32) -> Self {
            Self {
                score,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SentimentScorer for FixedScorer {
        fn analyze(&self, _text: &str) -> SentimentResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            SentimentResult {
                score: self.score,
                ..Default::default()
            }
        }
    }

    #[test]
    fn test_empty_input_rejected_before_scoring() {
        let scorer = FixedScorer::new(0);
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(0);

        for message in ["", "   ", "\n\t"] {
            let err = respond(&scorer, &catalog, message, &mut rng).unwrap_err();
            assert_eq!(err, ChatError::EmptyInput);
        }
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_want_to_die_is_crisis_for_any_score() {
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(0);

        for score in [-10, -1, 0, 4, 10] {
            let scorer = FixedScorer::new(score);
            let reply = respond(&scorer, &catalog, "I want to die", &mut rng).unwrap();
            assert!(reply.response.is_crisis(), "score {score} should still be crisis");
        }
    }

    #[test]
    fn test_low_score_is_crisis() {
        let scorer = FixedScorer::new(-5);
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(0);

        let reply = respond(&scorer, &catalog, "everything is going badly", &mut rng).unwrap();
        assert!(reply.response.is_crisis());
        assert_eq!(reply.mood, MoodCategory::VeryNegative);
    }

    #[test]
    fn test_zero_score_is_neutral() {
        let scorer = LexiconScorer::new();
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(0);

        let reply = respond(&scorer, &catalog, "I have a lecture at noon", &mut rng).unwrap();
        assert_eq!(reply.score(), 0);
        assert_eq!(reply.mood, MoodCategory::Neutral);
        assert_eq!(reply.response.message(), response::preamble(MoodCategory::Neutral));
    }

    #[test]
    fn test_lexicon_pipeline_end_to_end() {
        let scorer = LexiconScorer::new();
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(11);

        let reply = respond(&scorer, &catalog, "I'm so stressed and anxious", &mut rng).unwrap();
        assert_eq!(reply.score(), -4);
        assert_eq!(reply.mood, MoodCategory::VeryNegative);
        match reply.response {
            ResponsePayload::Normal { tip, mood, score, .. } => {
                assert!(catalog.tips_for(MoodCategory::VeryNegative).contains(&tip));
                assert_eq!(mood, MoodCategory::VeryNegative);
                assert_eq!(score, -4);
            }
            other => panic!("expected normal response, got {other:?}"),
        }
    }
}
