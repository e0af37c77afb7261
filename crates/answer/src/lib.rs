//! Help-desk answer resolution.
//!
//! Turns a free-text question into answer text by querying the search
//! backend and walking a fixed cascade:
//! - FAQ entries are returned verbatim
//! - document passages are returned with a link to their source
//! - whole documents go through extractive answering, a confidence-gated
//!   summary and a list of reference links
//! - anything else is paraphrased and searched once more
//!
//! # Example
//! ```no_run
//! use helpdesk_answer::Engine;
//! use helpdesk_core::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let engine = Engine::from_config(&config)?;
//! let resolution = engine.answer("How do I reset my password?").await;
//! println!("{:?}", resolution.answer.text());
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod engine;
pub mod excerpt;
pub mod inference;
pub mod links;
pub mod render;
pub mod retry;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use engine::Engine;
pub use inference::Inference;
pub use links::{DocumentLink, MAX_LINKS};
pub use render::ResponseRenderer;
pub use retry::{AttemptState, RecursionController, MAX_DEPTH};
pub use search::SearchClient;
pub use types::{
    AnswerCandidate, FinalAnswer, Resolution, Strategy, CONFIDENCE_THRESHOLD,
    CONFIGURATION_ERROR_MESSAGE,
};
