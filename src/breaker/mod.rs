//! Breaker module - shift recovery strategies

pub mod engine;

pub use engine::{CipherBreaker, DEFAULT_ANCHOR, DEFAULT_MIN_FREQUENCY_LETTERS};
