//! AFINN-165 word valences, -5 (most negative) to +5 (most positive)

use std::collections::HashMap;

/// Raw AFINN-165 list, one `word<TAB>valence` entry per line
pub const AFINN_165: &str = include_str!("../../data/afinn-165.txt");

/// Tokens that flip the valence of the word right after them
pub const NEGATORS: &[&str] = &[
    "aint",
    "ain't",
    "cannot",
    "cant",
    "can't",
    "didnt",
    "didn't",
    "doesnt",
    "doesn't",
    "dont",
    "don't",
    "hardly",
    "isnt",
    "isn't",
    "never",
    "not",
    "wasnt",
    "wasn't",
    "wont",
    "won't",
    "wouldnt",
    "wouldn't",
];

/// Parse a tab-separated valence list into a lookup table.
///
/// Multi-word phrases are skipped since tokens never contain whitespace, as
/// are blank or malformed lines.
pub fn parse_valences(source: &str) -> HashMap<String, i32> {
    source
        .lines()
        .filter_map(|line| {
            let (word, valence) = line.split_once('\t')?;
            let word = word.trim();
            if word.is_empty() || word.contains(char::is_whitespace) {
                return None;
            }
            let valence = valence.trim().parse::<i32>().ok()?;
            Some((word.to_lowercase(), valence))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_phrases_and_junk() {
        let table = parse_valences("good\t3\ncool stuff\t3\n\nbroken line\nBad\t-3\nodd\tx\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table["good"], 3);
        assert_eq!(table["bad"], -3);
    }

    #[test]
    fn test_builtin_list_is_well_formed() {
        let table = parse_valences(AFINN_165);
        assert!(table.len() > 3000);
        assert!(table.values().all(|v| (-5..=5).contains(v)));

        let lines = AFINN_165.lines().filter(|l| !l.trim().is_empty()).count();
        let phrases = AFINN_165
            .lines()
            .filter(|l| l.split('\t').next().is_some_and(|w| w.contains(' ')))
            .count();
        // no word appears twice
        assert_eq!(table.len(), lines - phrases);
    }

    #[test]
    fn test_everyday_wellbeing_words_are_covered() {
        let table = parse_valences(AFINN_165);
        for (word, valence) in [
            ("confused", -2),
            ("tense", -2),
            ("loss", -3),
            ("cried", -2),
            ("laugh", 1),
            ("interesting", 2),
        ] {
            assert_eq!(table.get(word), Some(&valence), "{word}");
        }
    }

    #[test]
    fn test_negators_are_not_scored_words() {
        let table = parse_valences(AFINN_165);
        for negator in NEGATORS {
            assert!(!table.contains_key(*negator), "{negator}");
        }
    }
}
