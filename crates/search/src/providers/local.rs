//! Offline search backend over a YAML or JSON entries file.
//!
//! Entries are ranked by how many query keywords they share with the
//! entry's question, title and text. Useful for demos and for exercising
//! the answer cascade without a search service.
//!
//! ```yaml
//! entries:
//!   - index: it-help
//!     type: QUESTION_ANSWER
//!     question: How do I reset my password?
//!     text: Go to settings > reset.
//!   - index: it-help
//!     type: DOCUMENT
//!     id: vpn-guide
//!     title: VPN guide
//!     uri: https://docs.example.com/vpn
//!     text: The VPN client ships with every laptop...
//! ```

use crate::backend::SearchBackend;
use crate::types::{ResultItem, ResultType, ScoreAttributes, SearchResult, TextField};
use helpdesk_core::text::keywords;
use helpdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum number of items returned per query.
const MAX_RESULTS: usize = 10;

/// One searchable entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalEntry {
    /// Index the entry belongs to; `None` puts it in every index
    #[serde(default)]
    pub index: Option<String>,

    #[serde(rename = "type")]
    pub result_type: ResultType,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,

    pub text: String,
}

#[derive(Debug, Deserialize)]
struct EntriesFile {
    entries: Vec<LocalEntry>,
}

/// In-memory keyword search over [`LocalEntry`] values.
#[derive(Debug)]
pub struct LocalSearchBackend {
    entries: Vec<LocalEntry>,
}

impl LocalSearchBackend {
    pub fn new(entries: Vec<LocalEntry>) -> Self {
        Self { entries }
    }

    /// Load entries from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read search entries {:?}: {}", path, e))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: EntriesFile = if is_json {
            serde_json::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse search entries {:?}: {}", path, e))
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse search entries {:?}: {}", path, e))
            })?
        };

        tracing::debug!("Loaded {} search entries from {:?}", file.entries.len(), path);
        Ok(Self::new(file.entries))
    }

    /// Rank entries of `index_id` against the query keywords.
    fn rank(&self, index_id: &str, query_text: &str) -> Vec<ResultItem> {
        let wanted: HashSet<String> = keywords(query_text).into_iter().collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &LocalEntry)> = self
            .entries
            .iter()
            .filter(|entry| entry.index.as_deref().map_or(true, |idx| idx == index_id))
            .filter_map(|entry| {
                let haystack = [
                    entry.question.as_deref(),
                    entry.title.as_deref(),
                    Some(entry.text.as_str()),
                ]
                .into_iter()
                .flatten()
                .flat_map(keywords)
                .collect::<HashSet<String>>();

                let overlap = wanted.intersection(&haystack).count();
                (overlap > 0).then_some((overlap, entry))
            })
            .collect();

        // Stable sort keeps file order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(MAX_RESULTS)
            .enumerate()
            .map(|(rank, (overlap, entry))| {
                to_result_item(rank, entry, overlap as f32 / wanted.len() as f32)
            })
            .collect()
    }
}

/// Map an entry to a wire-shaped result item.
fn to_result_item(rank: usize, entry: &LocalEntry, ratio: f32) -> ResultItem {
    let confidence = match ratio {
        r if r >= 0.75 => "HIGH",
        r if r >= 0.5 => "MEDIUM",
        _ => "LOW",
    };

    ResultItem {
        id: Some(format!("local-{}", rank + 1)),
        result_type: Some(entry.result_type),
        document_id: entry.id.clone(),
        document_title: entry.title.clone().map(TextField::new),
        document_excerpt: Some(TextField::new(entry.text.clone())),
        document_uri: entry.uri.clone(),
        score_attributes: Some(ScoreAttributes {
            score_confidence: confidence.to_string(),
        }),
    }
}

#[async_trait::async_trait]
impl SearchBackend for LocalSearchBackend {
    fn backend_name(&self) -> &str {
        "local"
    }

    async fn query(&self, index_id: &str, query_text: &str) -> AppResult<SearchResult> {
        let items = self.rank(index_id, query_text);
        tracing::debug!(
            "Local search in '{}' matched {} entries for: {}",
            index_id,
            items.len(),
            query_text
        );
        Ok(SearchResult::new(items))
    }
}
