//! HTTP search gateway backend.
//!
//! Sends `{"IndexId": ..., "QueryText": ...}` to the configured endpoint and
//! expects a Kendra-style query response body.

use crate::backend::SearchBackend;
use crate::types::SearchResult;
use helpdesk_core::{AppError, AppResult};
use serde::Serialize;
use std::time::Duration;

/// Gateway request format.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(rename = "IndexId")]
    index_id: &'a str,
    #[serde(rename = "QueryText")]
    query_text: &'a str,
}

/// Search backend talking to an HTTP gateway.
pub struct HttpSearchBackend {
    /// Query endpoint URL
    endpoint: String,

    /// Bearer token, if any
    api_key: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpSearchBackend {
    /// Create a backend for `endpoint` with a request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Search(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    /// Parse a gateway response body.
    fn parse_response(body: &str) -> AppResult<SearchResult> {
        serde_json::from_str(body)
            .map_err(|e| AppError::Search(format!("Failed to parse search response: {}", e)))
    }
}

#[async_trait::async_trait]
impl SearchBackend for HttpSearchBackend {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn query(&self, index_id: &str, query_text: &str) -> AppResult<SearchResult> {
        let request = QueryRequest {
            index_id,
            query_text,
        };

        tracing::debug!("Sending search request to {}: {:?}", self.endpoint, request);

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Failed to send search request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Search(format!("Failed to read search response: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::Search(format!(
                "Search gateway error ({}): {}",
                status, body
            )));
        }

        let result = Self::parse_response(&body)?;
        tracing::debug!("Search returned {} items", result.len());

        Ok(result)
    }
}
