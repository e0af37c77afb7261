//! Search backend abstraction.

use crate::types::SearchResult;
use helpdesk_core::AppResult;

/// Trait for search backends.
///
/// A backend performs exactly one query per call and never retries.
/// Index validation and deadlines are the caller's concern.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the backend name (e.g., "http", "local").
    fn backend_name(&self) -> &str;

    /// Query `index_id` with free text.
    ///
    /// # Errors
    /// Transport failures, non-success statuses and unparseable payloads
    /// are reported as `AppError::Search`.
    async fn query(&self, index_id: &str, query_text: &str) -> AppResult<SearchResult>;
}
