//! Config schema and deserialization

use crate::analyzer::ScoringProfile;
use crate::breaker::{DEFAULT_ANCHOR, DEFAULT_MIN_FREQUENCY_LETTERS};
use crate::error::ConfigError;
use crate::Strategy;
use serde::Deserialize;

/// Which strategies `decode` runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeStrategy {
    /// Run both and report whether they agree
    #[default]
    Both,
    /// Exhaustive search only
    BruteForce,
    /// Frequency-guided search only
    Frequency,
}

impl DecodeStrategy {
    /// The single strategy to run, or None for both
    pub fn single(self) -> Option<Strategy> {
        match self {
            DecodeStrategy::Both => None,
            DecodeStrategy::BruteForce => Some(Strategy::BruteForce),
            DecodeStrategy::Frequency => Some(Strategy::Frequency),
        }
    }
}

/// Root config structure for .caesarrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Scoring profile (default: standard)
    #[serde(default)]
    pub scoring: Option<ScoringProfile>,

    /// Letters needed before frequency analysis is trusted (default: 5)
    #[serde(default)]
    pub min_frequency_letters: Option<usize>,

    /// Plaintext letter assumed most frequent (default: "E")
    #[serde(default)]
    pub anchor_letter: Option<String>,

    /// Words added to the common-word list
    #[serde(default)]
    pub extra_words: Vec<String>,

    /// Default strategy for decode (default: both)
    #[serde(default)]
    pub strategy: Option<DecodeStrategy>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_strategy: Option<DecodeStrategy>,
        cli_scoring: Option<ScoringProfile>,
    ) -> Self {
        if cli_strategy.is_some() {
            self.strategy = cli_strategy;
        }
        if cli_scoring.is_some() {
            self.scoring = cli_scoring;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.scoring.is_none() {
            self.scoring = base.scoring;
        }
        if self.min_frequency_letters.is_none() {
            self.min_frequency_letters = base.min_frequency_letters;
        }
        if self.anchor_letter.is_none() {
            self.anchor_letter = base.anchor_letter;
        }
        if self.strategy.is_none() {
            self.strategy = base.strategy;
        }

        let mut all_words = base.extra_words;
        all_words.append(&mut self.extra_words);
        self.extra_words = all_words;
    }

    /// Reject values the breaker cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref anchor) = self.anchor_letter {
            parse_anchor(anchor)?;
        }
        for word in &self.extra_words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidWord(word.clone()));
            }
        }
        Ok(())
    }

    pub fn scoring(&self) -> ScoringProfile {
        self.scoring.unwrap_or_default()
    }

    pub fn min_frequency_letters(&self) -> usize {
        self.min_frequency_letters
            .unwrap_or(DEFAULT_MIN_FREQUENCY_LETTERS)
    }

    /// Anchor letter, uppercased. Falls back to 'E' if unset or invalid.
    pub fn anchor(&self) -> char {
        self.anchor_letter
            .as_deref()
            .and_then(|a| parse_anchor(a).ok())
            .unwrap_or(DEFAULT_ANCHOR)
    }

    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy.unwrap_or_default()
    }
}

fn parse_anchor(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(ConfigError::InvalidAnchor(raw.to_string())),
    }
}
