//! Command handlers for the help-desk CLI.

pub mod ask;
pub mod search;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use search::SearchCommand;
