//! Per-mood tip tables
//!
//! Built once at startup and shared read-only. A catalog always holds a
//! non-empty neutral table, which backs any mood without its own.

use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use super::mood::MoodCategory;

const VERY_NEGATIVE_TIPS: &[&str] = &[
    "Take a deep breath. Inhale for 4 counts, hold for 4, exhale for 4. Repeat 3 times.",
    "Remember, it's okay to not be okay. Your feelings are valid.",
    "Try the 5-4-3-2-1 grounding technique: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    "Step away from your study space for 10 minutes. A short walk can reset your mind.",
    "Write down three things you're grateful for today, no matter how small.",
    "Listen to calming music or nature sounds. There are great free playlists online.",
    "Practice progressive muscle relaxation: tense and release each muscle group from toes to head.",
    "Remember: This feeling is temporary. You've gotten through difficult times before.",
];

const NEGATIVE_TIPS: &[&str] = &[
    "Take a 5-minute break. Stretch your body and move around.",
    "Drink a glass of water. Dehydration can affect your mood.",
    "Try the Pomodoro technique: 25 minutes of focused work, then a 5-minute break.",
    "Write down what's bothering you. Sometimes putting it on paper helps.",
    "Connect with a friend or family member, even just a quick text.",
    "Do a quick mindfulness exercise: focus on your breathing for 2 minutes.",
    "Organize your study space. A clean environment can improve your mental state.",
    "Remember your 'why' - why are you studying? What's your goal?",
];

const NEUTRAL_TIPS: &[&str] = &[
    "Maintain your current routine. Consistency is key for mental wellness.",
    "Take regular breaks during study sessions to prevent burnout.",
    "Stay hydrated and eat nutritious meals to keep your energy stable.",
    "Practice good sleep hygiene for better mood regulation.",
    "Set small, achievable goals for today to build momentum.",
    "Practice self-compassion. You're doing your best, and that's enough.",
];

const POSITIVE_TIPS: &[&str] = &[
    "Great to hear you're feeling good! Keep up the positive momentum.",
    "Use this positive energy to tackle a challenging task you've been avoiding.",
    "Share your good mood with others - it can be contagious in the best way!",
    "Document what's working well for you so you can return to these strategies later.",
    "Take advantage of this energy to plan ahead and set yourself up for success.",
    "Remember this feeling when you face challenges - you have the strength to overcome them.",
];

const VERY_POSITIVE_TIPS: &[&str] = &[
    "Wonderful! Your positive energy is inspiring. Keep spreading that light!",
    "Use this momentum to help a friend or classmate who might be struggling.",
    "Celebrate your wins, no matter how small. You deserve to feel good!",
    "Channel this energy into creative activities or hobbies you enjoy.",
    "Remember this feeling - you can return to these positive thoughts when needed.",
    "Consider journaling about what's making you feel great - it's a great reference for later!",
];

fn builtin_tips(mood: MoodCategory) -> Vec<String> {
    let table = match mood {
        MoodCategory::VeryNegative => VERY_NEGATIVE_TIPS,
        MoodCategory::Negative => NEGATIVE_TIPS,
        MoodCategory::Neutral => NEUTRAL_TIPS,
        MoodCategory::Positive => POSITIVE_TIPS,
        MoodCategory::VeryPositive => VERY_POSITIVE_TIPS,
    };
    table.iter().map(|t| t.to_string()).collect()
}

/// Immutable mapping from mood to its ordered tip list
#[derive(Debug, Clone)]
pub struct TipCatalog {
    tables: HashMap<MoodCategory, Vec<String>>,
}

impl TipCatalog {
    /// Build from explicit tables. Empty lists are dropped, and a missing
    /// neutral table is filled from the built-in one.
    pub fn new(tables: HashMap<MoodCategory, Vec<String>>) -> Self {
        let mut tables: HashMap<_, _> = tables
            .into_iter()
            .filter(|(_, tips)| !tips.is_empty())
            .collect();
        tables
            .entry(MoodCategory::Neutral)
            .or_insert_with(|| builtin_tips(MoodCategory::Neutral));
        Self { tables }
    }

    /// Built-in tables with selected moods replaced, keyed by mood name
    /// (`veryNegative`, `neutral`, ...).
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut catalog = Self::default();
        for (key, tips) in overrides {
            let mood = match key.parse::<MoodCategory>() {
                Ok(mood) => mood,
                Err(e) => {
                    warn!("Ignoring tip override: {}", e);
                    continue;
                }
            };
            if tips.is_empty() {
                warn!("Ignoring empty tip override for {}", mood);
                continue;
            }
            catalog.tables.insert(mood, tips.clone());
        }
        catalog
    }

    /// Tips for a mood, falling back to the neutral table
    pub fn tips_for(&self, mood: MoodCategory) -> &[String] {
        self.tables
            .get(&mood)
            .or_else(|| self.tables.get(&MoodCategory::Neutral))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_table(&self, mood: MoodCategory) -> bool {
        self.tables.contains_key(&mood)
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        let tables = MoodCategory::ALL
            .into_iter()
            .map(|mood| (mood, builtin_tips(mood)))
            .collect();
        Self { tables }
    }
}
