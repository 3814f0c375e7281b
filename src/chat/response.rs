//! Response selection
//!
//! Turns a mood (or a crisis flag) into the payload shown to the user. The
//! random source is passed in so callers can seed it.

use rand::Rng;

use super::crisis::{CRISIS_MESSAGE, CRISIS_RESOURCES};
use super::mood::{MoodCategory, MoodGroup};
use super::tips::TipCatalog;

/// Number of extra tips shown beside the primary one
pub const ADDITIONAL_TIP_COUNT: usize = 2;

const LOW_PREAMBLE: &str = "I understand you're going through a tough time. That's completely valid, and I'm here to help.";
const STEADY_PREAMBLE: &str = "I'm here to support you. Let's work together to maintain your wellbeing.";
const HIGH_PREAMBLE: &str = "It's wonderful to hear you're feeling positive! Let's keep that momentum going.";

/// What the assistant says back
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Crisis {
        message: String,
        resources: Vec<String>,
    },
    Normal {
        message: String,
        tip: String,
        additional_tips: Vec<String>,
        mood: MoodCategory,
        score: i32,
    },
}

impl ResponsePayload {
    pub fn message(&self) -> &str {
        match self {
            Self::Crisis { message, .. } | Self::Normal { message, .. } => message,
        }
    }

    pub fn is_crisis(&self) -> bool {
        matches!(self, Self::Crisis { .. })
    }
}

/// Empathetic opener for a mood group
pub fn preamble(mood: MoodCategory) -> &'static str {
    match mood.group() {
        MoodGroup::Low => LOW_PREAMBLE,
        MoodGroup::Steady => STEADY_PREAMBLE,
        MoodGroup::High => HIGH_PREAMBLE,
    }
}

pub fn crisis_response() -> ResponsePayload {
    ResponsePayload::Crisis {
        message: CRISIS_MESSAGE.to_string(),
        resources: CRISIS_RESOURCES.iter().map(|r| r.to_string()).collect(),
    }
}

/// Pick the response for a classified message.
///
/// The crisis branch short-circuits tip selection. Otherwise one tip is drawn
/// uniformly from the mood's table and up to [`ADDITIONAL_TIP_COUNT`] more are
/// taken in table order, skipping the primary tip.
pub fn select_response<R: Rng>(
    catalog: &TipCatalog,
    mood: MoodCategory,
    score: i32,
    crisis: bool,
    rng: &mut R,
) -> ResponsePayload {
    if crisis {
        return crisis_response();
    }

    let tips = catalog.tips_for(mood);
    let tip = if tips.is_empty() {
        String::new()
    } else {
        tips[rng.random_range(0..tips.len())].clone()
    };

    let additional_tips = tips
        .iter()
        .filter(|t| **t != tip)
        .take(ADDITIONAL_TIP_COUNT)
        .cloned()
        .collect();

    ResponsePayload::Normal {
        message: preamble(mood).to_string(),
        tip,
        additional_tips,
        mood,
        score,
    }
}
