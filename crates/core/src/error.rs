//! Error types for the help-desk answering workspace.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, search backend, inference services,
//! timeouts, response rendering and serialization.

use thiserror::Error;

/// Unified error type for the help-desk workspace.
///
/// All fallible functions return `Result<T, AppError>`.
/// We never panic: errors must be represented and propagated, or degraded
/// explicitly by the answer cascade.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search backend errors (transport, status, payload)
    #[error("Search error: {0}")]
    Search(String),

    /// Inference service errors (question answering, summarization, paraphrase)
    #[error("Inference error: {0}")]
    Inference(String),

    /// An external call exceeded its deadline
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Response template errors
    #[error("Template error: {0}")]
    Template(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Whether this error stems from missing or invalid configuration
    /// rather than from a failing collaborator.
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
