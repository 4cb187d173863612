//! Error types for the reminder board
//!
//! Board operations themselves are total. The only fallible surface is turning
//! user-supplied names from the command line into closed enum values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Name does not match any category
    #[error("unknown category '{name}' (expected school, work, home or misc)")]
    UnknownCategory { name: String },

    /// Name does not match any background colour option
    #[error("unknown background colour '{name}'")]
    UnknownColor { name: String },

    /// Command-line reminder without a `CATEGORY:` prefix
    #[error("expected CATEGORY:TITLE, got '{input}'")]
    InvalidSeed { input: String },
}
