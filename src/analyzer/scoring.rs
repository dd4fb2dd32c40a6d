//! Plausibility scoring for candidate plaintexts

use super::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Short words frequent enough in English that a hit is strong evidence
pub const COMMON_WORDS: [&str; 20] = [
    "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I", "IT", "FOR", "NOT", "ON",
    "WITH", "HE", "AS", "YOU", "DO", "AT",
];

/// English letters from most to least frequent
pub const ENGLISH_FREQUENCY: &str = "ETAOINSHRDLUCMFWYPVBGKJQXZ";

/// Common English bigrams rewarded by the extended profile
const COMMON_BIGRAMS: [&str; 6] = ["TH", "HE", "IN", "ER", "AN", "RE"];

const WORD_HIT: f64 = 1.0;
const SPACE_BONUS: f64 = 2.0;
const SPACE_RATIO_MIN: f64 = 0.10;
const SPACE_RATIO_MAX: f64 = 0.25;

const LETTER_RANK_BONUS: f64 = 0.5;
const LETTER_RANK_MIN_LEN: usize = 5;
const LETTER_RANK_TOP_CIPHER: usize = 5;
const LETTER_RANK_TOP_ENGLISH: usize = 6;
const BIGRAM_BONUS: f64 = 0.2;

/// Which terms contribute to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Common-word hits plus the space-density bonus
    #[default]
    Standard,
    /// Standard terms plus letter-rank and bigram bonuses
    Extended,
}

/// Scores how plausibly a text is English. Higher is better.
#[derive(Debug, Clone)]
pub struct PlausibilityScorer {
    words: HashSet<String>,
    profile: ScoringProfile,
}

impl PlausibilityScorer {
    /// Scorer with the fixed common-word list and the standard profile
    pub fn new() -> Self {
        Self {
            words: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
            profile: ScoringProfile::Standard,
        }
    }

    /// Switch scoring profile
    pub fn with_profile(mut self, profile: ScoringProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Add words to the common-word set (case-insensitive)
    pub fn with_extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_ascii_uppercase()));
        self
    }

    pub fn profile(&self) -> ScoringProfile {
        self.profile
    }

    /// Whether `word` is in the common-word set, ignoring case
    pub fn is_common_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    /// Score a candidate plaintext
    pub fn score(&self, text: &str) -> f64 {
        let upper = text.to_ascii_uppercase();
        let mut score = self.word_score(&upper) + space_bonus(text);

        if self.profile == ScoringProfile::Extended {
            score += letter_rank_bonus(text) + bigram_bonus(&upper);
        }

        score
    }

    fn word_score(&self, upper: &str) -> f64 {
        upper
            .split_whitespace()
            .map(|token| {
                token
                    .chars()
                    .filter(char::is_ascii_alphabetic)
                    .collect::<String>()
            })
            .filter(|word| self.words.contains(word))
            .count() as f64
            * WORD_HIT
    }
}

impl Default for PlausibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat bonus when literal spaces make up a typical share of the text
fn space_bonus(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let spaces = text.chars().filter(|&c| c == ' ').count();
    let ratio = spaces as f64 / total as f64;
    if ratio > SPACE_RATIO_MIN && ratio < SPACE_RATIO_MAX {
        SPACE_BONUS
    } else {
        0.0
    }
}

/// Reward texts whose most frequent letters are also frequent in English
fn letter_rank_bonus(text: &str) -> f64 {
    if text.chars().count() < LETTER_RANK_MIN_LEN {
        return 0.0;
    }
    let english_top = &ENGLISH_FREQUENCY[..LETTER_RANK_TOP_ENGLISH];
    FrequencyTable::from_text(text)
        .order()
        .into_iter()
        .take(LETTER_RANK_TOP_CIPHER)
        .filter(|&letter| english_top.contains(letter))
        .count() as f64
        * LETTER_RANK_BONUS
}

fn bigram_bonus(upper: &str) -> f64 {
    COMMON_BIGRAMS
        .iter()
        .map(|bigram| upper.matches(bigram).count())
        .sum::<usize>() as f64
        * BIGRAM_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_common_words_outscore_gibberish() {
        let scorer = PlausibilityScorer::new();
        let english = scorer.score("THE AND OF");
        let gibberish = scorer.score("ZQX VWK PLM");
        assert!(approx_eq(english, 5.0));
        assert!(approx_eq(gibberish, 2.0));
        assert!(english > gibberish);
    }

    #[test]
    fn test_word_match_is_case_insensitive_and_strips_punctuation() {
        let scorer = PlausibilityScorer::new();
        // One token, "THEAND" after stripping
        assert!(approx_eq(scorer.score("the,and!"), 0.0));
        // 1 space in 12 chars earns no space bonus
        assert!(approx_eq(scorer.score("(The) 'and'."), 2.0));
    }

    #[test]
    fn test_space_ratio_bounds_are_exclusive() {
        let scorer = PlausibilityScorer::new();
        // 1 space in 10 chars: ratio exactly 0.10
        assert!(approx_eq(scorer.score("zzzz zzzzz"), 0.0));
        // 1 space in 4 chars: ratio exactly 0.25
        assert!(approx_eq(scorer.score("zz z"), 0.0));
        // 1 space in 6 chars
        assert!(approx_eq(scorer.score("zzz zz"), SPACE_BONUS));
    }

    #[test]
    fn test_only_literal_spaces_count_for_ratio() {
        let scorer = PlausibilityScorer::new();
        assert!(approx_eq(scorer.score("zzz\tzz"), 0.0));
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = PlausibilityScorer::new();
        assert!(approx_eq(scorer.score(""), 0.0));
        assert!(approx_eq(scorer.score("   "), 0.0));
    }

    #[test]
    fn test_extra_words() {
        let scorer = PlausibilityScorer::new().with_extra_words(["cipher"]);
        assert!(scorer.is_common_word("Cipher"));
        assert!(scorer.is_common_word("the"));
        assert!(!scorer.is_common_word("zebra"));
    }

    #[test]
    fn test_extended_profile_adds_bonuses() {
        let standard = PlausibilityScorer::new();
        let extended = PlausibilityScorer::new().with_profile(ScoringProfile::Extended);
        let text = "there is the answer";
        assert!(extended.score(text) > standard.score(text));
    }

    #[test]
    fn test_extended_bigram_count() {
        let extended = PlausibilityScorer::new().with_profile(ScoringProfile::Extended);
        // Too short for the letter-rank term
        assert!(approx_eq(extended.score("thth"), 2.0 * BIGRAM_BONUS));
    }

    #[test]
    fn test_extended_letter_rank_values() {
        let extended = PlausibilityScorer::new().with_profile(ScoringProfile::Extended);
        // Only E among the top letters
        assert!(approx_eq(extended.score("eeeee"), LETTER_RANK_BONUS));
        // A, E, O, T are in ETAOIN; Z is not
        assert!(approx_eq(extended.score("etaoz"), 4.0 * LETTER_RANK_BONUS));
        assert!(approx_eq(extended.score("zzzzz"), 0.0));
        // Below the length floor
        assert!(approx_eq(extended.score("eeee"), 0.0));
    }
}
