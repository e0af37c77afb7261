//! Search backend integration for the help-desk workspace.
//!
//! Provides the ranked, typed result model and the backends the answer
//! cascade queries:
//! - **http**: a search gateway speaking the Kendra-style query format
//! - **local**: keyword search over an entries file, for offline use

pub mod backend;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export commonly used types
pub use backend::SearchBackend;
pub use factory::create_backend;
pub use providers::{HttpSearchBackend, LocalEntry, LocalSearchBackend};
pub use types::{ResultItem, ResultType, ScoreAttributes, SearchResult, TextField};
