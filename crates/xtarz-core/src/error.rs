//! Centralized error types for the analyzer.

use thiserror::Error;

/// Main error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("{0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
