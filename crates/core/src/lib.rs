//! Help-desk Core Library
//!
//! This crate provides the foundational utilities for the help-desk workspace:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management
//! - Text helpers shared by the offline providers

pub mod config;
pub mod error;
pub mod logging;
pub mod text;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
