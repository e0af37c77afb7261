//! Search command handler.
//!
//! Runs a single search and lists the ranked items, for checking what the
//! answer cascade will see.

use clap::Args;
use helpdesk_answer::{SearchClient, CONFIGURATION_ERROR_MESSAGE};
use helpdesk_core::{config::AppConfig, AppResult};
use helpdesk_search::ResultItem;

/// Maximum excerpt characters shown per item.
const MAX_EXCERPT_CHARS: usize = 160;

/// List raw search results for a question
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// The question to search for
    pub question: String,

    /// Maximum number of items to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Output items as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    /// Execute the search command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");
        tracing::debug!("Search command options: {:?}", self);

        let client = SearchClient::from_config(config)?;

        let result = match client.query(&self.question).await {
            Ok(result) => result,
            Err(e) if e.is_config() => {
                println!("{}", CONFIGURATION_ERROR_MESSAGE);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let items: Vec<&ResultItem> = result.items.iter().take(self.limit).collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        if items.is_empty() {
            println!("No results.");
            return Ok(());
        }

        for (rank, item) in items.iter().enumerate() {
            println!("{}", format_item(rank + 1, item));
        }

        Ok(())
    }
}

/// Format one ranked item as a short multi-line entry.
fn format_item(rank: usize, item: &ResultItem) -> String {
    let kind = item
        .result_type
        .map(|t| t.as_str())
        .unwrap_or("UNTYPED");

    let mut line = format!("{}. [{}]", rank, kind);
    if let Some(title) = item.title() {
        line.push_str(&format!(" {}", title));
    }
    if let Some(uri) = item.uri() {
        line.push_str(&format!(" <{}>", uri));
    }
    if let Some(confidence) = &item.score_attributes {
        line.push_str(&format!(" ({})", confidence.score_confidence));
    }

    if let Some(excerpt) = item.excerpt() {
        let mut shown: String = excerpt.chars().take(MAX_EXCERPT_CHARS).collect();
        if excerpt.chars().count() > MAX_EXCERPT_CHARS {
            shown.push_str("...");
        }
        line.push_str(&format!("\n   {}", shown.replace('\n', " ")));
    }

    line
}
