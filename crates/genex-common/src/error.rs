//! Error types for GENEX

use thiserror::Error;

/// Result type alias for GENEX operations
pub type Result<T> = std::result::Result<T, GenexError>;

/// Main error type for GENEX
#[derive(Error, Debug)]
pub enum GenexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
