//! Analyzer module - letter statistics and plausibility scoring

pub mod frequency;
pub mod scoring;

pub use frequency::{frequency_order, letter_frequencies, FrequencyTable};
pub use scoring::{PlausibilityScorer, ScoringProfile, COMMON_WORDS, ENGLISH_FREQUENCY};
