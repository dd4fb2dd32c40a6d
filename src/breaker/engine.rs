//! Breaker engine - recovers the shift of unknown ciphertext

use crate::analyzer::{FrequencyTable, PlausibilityScorer};
use crate::cipher::{decipher, letters_only};
use crate::config::Config;
use crate::{BreakResult, DecodeReport, Shift, ShiftCandidate, Strategy, ALPHABET_LEN};
use tracing::{debug, trace};

/// Below this many letters, frequency statistics are not trusted
pub const DEFAULT_MIN_FREQUENCY_LETTERS: usize = 5;

/// Plaintext letter assumed to be the most frequent
pub const DEFAULT_ANCHOR: char = 'E';

/// Starting best score; every real score is above it
const NO_SCORE: f64 = -1.0;

/// Orchestrates the two shift-recovery strategies
#[derive(Debug, Clone)]
pub struct CipherBreaker {
    scorer: PlausibilityScorer,
    min_frequency_letters: usize,
    anchor: char,
}

impl CipherBreaker {
    /// Breaker with the standard scorer and default thresholds
    pub fn new() -> Self {
        Self {
            scorer: PlausibilityScorer::new(),
            min_frequency_letters: DEFAULT_MIN_FREQUENCY_LETTERS,
            anchor: DEFAULT_ANCHOR,
        }
    }

    /// Breaker configured from a loaded config file
    pub fn from_config(config: &Config) -> Self {
        let scorer = PlausibilityScorer::new()
            .with_profile(config.scoring())
            .with_extra_words(&config.extra_words);
        Self::new()
            .with_scorer(scorer)
            .with_min_frequency_letters(config.min_frequency_letters())
            .with_anchor(config.anchor())
    }

    /// Use a custom scorer
    pub fn with_scorer(mut self, scorer: PlausibilityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Change the letter count below which frequency analysis falls back
    pub fn with_min_frequency_letters(mut self, min: usize) -> Self {
        self.min_frequency_letters = min;
        self
    }

    /// Change the letter assumed most frequent in plaintext; a non-ASCII-letter `anchor` is a no-op
    pub fn with_anchor(mut self, anchor: char) -> Self {
        if anchor.is_ascii_alphabetic() {
            self.anchor = anchor.to_ascii_uppercase();
        }
        self
    }

    pub fn scorer(&self) -> &PlausibilityScorer {
        &self.scorer
    }

    /// Decode with one shift and score the result
    pub fn candidate(&self, ciphertext: &str, shift: Shift) -> ShiftCandidate {
        let plaintext = decipher(ciphertext, shift);
        let score = self.scorer.score(&plaintext);
        ShiftCandidate {
            shift,
            plaintext,
            score,
        }
    }

    /// Every candidate, in ascending shift order
    pub fn candidates(&self, ciphertext: &str) -> Vec<ShiftCandidate> {
        Shift::all()
            .map(|shift| self.candidate(ciphertext, shift))
            .collect()
    }

    /// Every candidate, best first. Equal scores keep ascending shift order.
    pub fn rank(&self, ciphertext: &str) -> Vec<ShiftCandidate> {
        let mut ranked = self.candidates(ciphertext);
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Try all 26 shifts; the first strictly best score wins
    pub fn break_brute_force(&self, ciphertext: &str) -> BreakResult {
        let best = self.search(ciphertext, Shift::all());
        to_result(best, Strategy::BruteForce)
    }

    /// Try the shift implied by the most frequent letter first, then the rest.
    /// Short inputs are handed to brute force.
    pub fn break_frequency_analysis(&self, ciphertext: &str) -> BreakResult {
        let letters = letters_only(ciphertext);
        if letters.len() < self.min_frequency_letters {
            debug!(
                letters = letters.len(),
                min = self.min_frequency_letters,
                "too few letters for frequency analysis, using brute force"
            );
            let mut result = self.break_brute_force(ciphertext);
            result.strategy = Strategy::Frequency;
            result.fell_back = true;
            return result;
        }

        let order = self.priority_order(&FrequencyTable::from_text(&letters));
        trace!(?order, "frequency priority order");
        let best = self.search(ciphertext, order);
        to_result(best, Strategy::Frequency)
    }

    /// Run one strategy
    pub fn break_with(&self, ciphertext: &str, strategy: Strategy) -> BreakResult {
        match strategy {
            Strategy::BruteForce => self.break_brute_force(ciphertext),
            Strategy::Frequency => self.break_frequency_analysis(ciphertext),
        }
    }

    /// Run both strategies
    pub fn decode_both(&self, ciphertext: &str) -> DecodeReport {
        DecodeReport {
            ciphertext: ciphertext.to_string(),
            brute_force: self.break_brute_force(ciphertext),
            frequency: self.break_frequency_analysis(ciphertext),
        }
    }

    /// Shift mapping `letter` onto the anchor letter
    pub fn preferred_shift(&self, letter: char) -> Shift {
        let letter = letter.to_ascii_uppercase() as i64;
        Shift::new(letter - self.anchor as i64)
    }

    /// All 26 shifts, the frequency-preferred one first and the rest ascending
    pub fn priority_order(&self, table: &FrequencyTable) -> Vec<Shift> {
        let mut order = Vec::with_capacity(ALPHABET_LEN as usize);
        let mut placed = [false; ALPHABET_LEN as usize];

        if let Some(letter) = table.most_frequent() {
            let preferred = self.preferred_shift(letter);
            placed[preferred.value() as usize] = true;
            order.push(preferred);
        }
        for shift in Shift::all() {
            if !placed[shift.value() as usize] {
                placed[shift.value() as usize] = true;
                order.push(shift);
            }
        }
        order
    }

    fn search<I>(&self, ciphertext: &str, order: I) -> ShiftCandidate
    where
        I: IntoIterator<Item = Shift>,
    {
        let mut best = ShiftCandidate {
            shift: Shift::new(0),
            plaintext: String::new(),
            score: NO_SCORE,
        };
        for shift in order {
            let candidate = self.candidate(ciphertext, shift);
            debug!(shift = %shift, score = candidate.score, "scored candidate");
            if candidate.score > best.score {
                best = candidate;
            }
        }
        best
    }
}

impl Default for CipherBreaker {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(best: ShiftCandidate, strategy: Strategy) -> BreakResult {
    BreakResult {
        strategy,
        plaintext: best.plaintext,
        shift: best.shift,
        score: best.score,
        fell_back: false,
    }
}
