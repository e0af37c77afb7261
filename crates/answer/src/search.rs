//! Search adapter used by the cascade.
//!
//! Wraps a [`SearchBackend`] with the configured index id and a deadline.
//! A missing index id is reported before any backend call, and without one
//! no backend is built at all.

use helpdesk_core::{AppConfig, AppError, AppResult};
use helpdesk_search::{SearchBackend, SearchResult};
use std::sync::Arc;
use std::time::Duration;

/// Search client bound to one index.
#[derive(Clone)]
pub struct SearchClient {
    backend: Option<Arc<dyn SearchBackend>>,
    index_id: Option<String>,
    timeout: Duration,
}

impl SearchClient {
    /// Create a client. A blank `index_id` counts as unset.
    pub fn new(backend: Arc<dyn SearchBackend>, index_id: Option<String>, timeout: Duration) -> Self {
        let index_id = index_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Self {
            backend: Some(backend),
            index_id,
            timeout,
        }
    }

    /// Build the configured backend and bind it to the configured index.
    /// Without an index id the client is left unconfigured and every query
    /// fails with `AppError::Config`.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be created.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.search.timeout_secs);

        let Some(index_id) = config.index_id() else {
            tracing::debug!("No search index configured, skipping backend setup");
            return Ok(Self {
                backend: None,
                index_id: None,
                timeout,
            });
        };

        let api_key = config.resolve_search_key();
        let backend =
            helpdesk_search::create_backend(&config.search, &config.workspace, api_key.as_deref())?;

        Ok(Self::new(backend, Some(index_id.to_string()), timeout))
    }

    pub fn index_id(&self) -> Option<&str> {
        self.index_id.as_deref()
    }

    pub fn backend_name(&self) -> &str {
        self.backend
            .as_ref()
            .map_or("unconfigured", |backend| backend.backend_name())
    }

    /// Run one query against the configured index.
    ///
    /// # Errors
    /// - `AppError::Config` when no index id is configured
    /// - `AppError::Timeout` when the backend misses the deadline
    /// - `AppError::Search` for any backend failure
    pub async fn query(&self, question: &str) -> AppResult<SearchResult> {
        let (Some(index_id), Some(backend)) = (self.index_id.as_deref(), self.backend.as_ref()) else {
            return Err(AppError::Config(
                "search index id is not configured".to_string(),
            ));
        };

        tracing::debug!(
            "Querying index '{}' via {} backend: {}",
            index_id,
            backend.backend_name(),
            question
        );

        let result = tokio::time::timeout(self.timeout, backend.query(index_id, question))
            .await
            .map_err(|_| {
                AppError::Timeout(format!("search after {}s", self.timeout.as_secs_f32()))
            })?
            .map_err(|e| match e {
                AppError::Search(_) | AppError::Timeout(_) => e,
                other => AppError::Search(other.to_string()),
            })?;

        tracing::debug!("Search returned {} items", result.len());
        Ok(result)
    }
}
