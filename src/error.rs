//! Typed errors for configuration problems

use std::path::PathBuf;
use thiserror::Error;

/// A config file that parsed as JSON but holds unusable values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `anchorLetter` must be exactly one ASCII letter
    #[error("Invalid anchorLetter {0:?}: expected a single letter A-Z")]
    InvalidAnchor(String),

    /// Entries of `extraWords` must be non-empty and made of ASCII letters
    #[error("Invalid entry in extraWords {0:?}: words may only contain letters A-Z")]
    InvalidWord(String),

    /// A config file extends itself, directly or through other files
    #[error("Circular extends detected in config: {}", .0.display())]
    CircularExtends(PathBuf),

    /// A config file named on the command line or in `extends` is missing
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}
