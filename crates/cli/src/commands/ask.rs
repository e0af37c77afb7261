//! Ask command handler.
//!
//! Runs the answer cascade for one question and prints the outcome.

use clap::Args;
use helpdesk_answer::{Engine, Resolution};
use helpdesk_core::{config::AppConfig, AppError, AppResult};

/// Printed when the cascade finds nothing usable.
pub const APOLOGY: &str = "Sorry, I couldn't find an answer to that question.";

/// Answer a question from the search index
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Output the full resolution as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let question = self.question.trim();
        if question.is_empty() {
            return Err(AppError::Config("No question provided".to_string()));
        }

        let engine = Engine::from_config(config)?;
        let resolution = engine.answer(question).await;

        tracing::info!(
            "Resolved at depth {} via {:?}",
            resolution.depth,
            resolution.strategy
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        } else {
            println!("{}", display_text(&resolution));
        }

        Ok(())
    }
}

/// Text shown to the user, with the apology standing in for no answer.
fn display_text(resolution: &Resolution) -> &str {
    resolution.answer.text().unwrap_or(APOLOGY)
}
