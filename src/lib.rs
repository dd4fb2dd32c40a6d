//! Caesar: shift cipher encoder and breaker
//!
//! This library encodes text with a fixed alphabetic shift and recovers the
//! shift of unknown ciphertext, either by trying every shift or by letting
//! letter frequencies decide which shift to try first.

pub mod analyzer;
pub mod breaker;
pub mod cipher;
pub mod config;
pub mod error;
pub mod reporter;

use serde::{Deserialize, Serialize};

pub use analyzer::{FrequencyTable, PlausibilityScorer, ScoringProfile};
pub use breaker::CipherBreaker;
pub use error::ConfigError;

/// Number of letters in the alphabet the cipher rotates through
pub const ALPHABET_LEN: u8 = 26;

/// A shift in the canonical range 0..=25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Shift(u8);

impl Shift {
    /// Normalize any integer into 0..=25
    pub fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one
    pub fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }

    /// Every shift in ascending order
    pub fn all() -> impl Iterator<Item = Shift> {
        (0..ALPHABET_LEN).map(Shift)
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> u8 {
        shift.0
    }
}

impl TryFrom<u8> for Shift {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < ALPHABET_LEN {
            Ok(Shift(value))
        } else {
            Err(format!("shift {} is outside 0..=25", value))
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// One trial decoding produced while searching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCandidate {
    pub shift: Shift,
    pub plaintext: String,
    pub score: f64,
}

/// Search strategy used to recover a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Try all 26 shifts in ascending order
    BruteForce,
    /// Try the shift implied by the most frequent letter first
    Frequency,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::BruteForce => write!(f, "brute force"),
            Strategy::Frequency => write!(f, "frequency analysis"),
        }
    }
}

/// Best decoding found by one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakResult {
    pub strategy: Strategy,
    pub plaintext: String,
    pub shift: Shift,
    pub score: f64,
    /// True when frequency analysis fell back to brute force
    #[serde(default)]
    pub fell_back: bool,
}

impl BreakResult {
    /// The `(plaintext, shift)` pair callers usually want
    pub fn into_pair(self) -> (String, Shift) {
        (self.plaintext, self.shift)
    }
}

/// Results of both strategies on the same ciphertext
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeReport {
    pub ciphertext: String,
    pub brute_force: BreakResult,
    pub frequency: BreakResult,
}

impl DecodeReport {
    /// Whether both strategies recovered the same shift
    pub fn agree(&self) -> bool {
        self.brute_force.shift == self.frequency.shift
    }
}

/// Encode `plaintext` by advancing every letter `shift` positions
pub fn encode(plaintext: &str, shift: i64) -> String {
    cipher::shift_text(plaintext, Shift::new(shift))
}

/// Decode `ciphertext` that was encoded with a known `shift`
pub fn decode_with_shift(ciphertext: &str, shift: i64) -> String {
    cipher::decipher(ciphertext, Shift::new(shift))
}

/// Recover the shift by scoring all 26 candidates
pub fn decode_brute_force(ciphertext: &str) -> (String, Shift) {
    CipherBreaker::new().break_brute_force(ciphertext).into_pair()
}

/// Recover the shift, trying the frequency-implied shift first
pub fn decode_frequency_guided(ciphertext: &str) -> (String, Shift) {
    CipherBreaker::new()
        .break_frequency_analysis(ciphertext)
        .into_pair()
}

/// Run both strategies with default settings
pub fn decode_both(ciphertext: &str) -> DecodeReport {
    CipherBreaker::new().decode_both(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_normalizes_negative_and_large() {
        assert_eq!(Shift::new(-1).value(), 25);
        assert_eq!(Shift::new(27).value(), 1);
        assert_eq!(Shift::new(-26).value(), 0);
        assert_eq!(Shift::new(i64::MIN).value(), Shift::new(i64::MIN % 26).value());
    }

    #[test]
    fn test_shift_inverse() {
        assert_eq!(Shift::new(0).inverse(), Shift::new(0));
        assert_eq!(Shift::new(3).inverse(), Shift::new(23));
        assert_eq!(Shift::new(13).inverse(), Shift::new(13));
    }

    #[test]
    fn test_shift_serde_rejects_out_of_range() {
        let ok: Shift = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Shift>("26").is_err());
        assert_eq!(serde_json::to_string(&Shift::new(30)).unwrap(), "4");
    }

    #[test]
    fn test_encode_then_decode_with_known_shift() {
        let ciphertext = encode("Attack at dawn!", 5);
        assert_eq!(ciphertext, "Fyyfhp fy ifbs!");
        assert_eq!(decode_with_shift(&ciphertext, 5), "Attack at dawn!");
    }

    #[test]
    fn test_decode_entry_points() {
        let ciphertext = encode("THE QUICK BROWN FOX", 7);
        let (plain, shift) = decode_brute_force(&ciphertext);
        assert_eq!(shift.value(), 7);
        assert_eq!(plain, "THE QUICK BROWN FOX");

        let (plain, shift) = decode_frequency_guided(&ciphertext);
        assert_eq!(shift.value(), 7);
        assert_eq!(plain, "THE QUICK BROWN FOX");
    }

    #[test]
    fn test_decode_report_agreement() {
        let report = decode_both(&encode("it is not the end of the world", 11));
        assert!(report.agree());
        assert_eq!(report.brute_force.shift.value(), 11);
    }
}
