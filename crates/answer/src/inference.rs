//! Inference adapters used by the cascade.
//!
//! Each call is bounded by a deadline. Failures, timeouts and empty payloads
//! all collapse to `None` so the cascade can fall back instead of aborting.

use helpdesk_inference::{ExtractedAnswer, InferenceClient, InferenceRequest, InferenceResponse};
use helpdesk_core::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;

/// Extractive answering, summarization and paraphrase over one client.
#[derive(Clone)]
pub struct Inference {
    client: Arc<dyn InferenceClient>,
    timeout: Duration,
}

impl Inference {
    pub fn new(client: Arc<dyn InferenceClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Locate an answer span for `question` in `context`.
    pub async fn extract_answer(&self, question: &str, context: &str) -> Option<ExtractedAnswer> {
        self.call(InferenceRequest::answer(question, context))
            .await
            .and_then(InferenceResponse::into_answer)
    }

    /// Summarize `text`.
    pub async fn summarize(&self, text: &str) -> Option<String> {
        self.call(InferenceRequest::summarize(text))
            .await
            .and_then(InferenceResponse::into_summary)
    }

    /// Reformulate `question`.
    pub async fn paraphrase(&self, question: &str) -> Option<String> {
        self.call(InferenceRequest::paraphrase(question))
            .await
            .and_then(InferenceResponse::into_paraphrase)
    }

    async fn call(&self, request: InferenceRequest) -> Option<InferenceResponse> {
        let task = request.task();
        match self.infer_with_deadline(&request).await {
            Ok(response) => {
                tracing::debug!("{} inference returned: {:?}", task, response);
                Some(response)
            }
            Err(e) => {
                tracing::warn!("{} inference failed, continuing without it: {}", task, e);
                None
            }
        }
    }

    async fn infer_with_deadline(&self, request: &InferenceRequest) -> AppResult<InferenceResponse> {
        tokio::time::timeout(self.timeout, self.client.infer(request))
            .await
            .map_err(|_| {
                AppError::Timeout(format!(
                    "{} inference after {}s",
                    request.task(),
                    self.timeout.as_secs_f32()
                ))
            })?
    }
}
