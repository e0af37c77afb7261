//! Hugging Face Inference API provider.
//!
//! Each task is served by its own hosted model:
//! `POST {base_url}/models/{model}` with a `{"inputs": ...}` body.
//! API reference: https://huggingface.co/docs/api-inference

use crate::client::{ExtractedAnswer, InferenceClient, InferenceRequest, InferenceResponse};
use crate::types::InferenceTask;
use helpdesk_core::config::InferenceModels;
use helpdesk_core::{AppError, AppResult};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Question-answering output, `{}` when no span was found.
#[derive(Debug, Default, Deserialize)]
struct QaOutput {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    score: Option<f32>,
}

/// Some deployments wrap question-answering output in a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QaPayload {
    Many(Vec<QaOutput>),
    One(QaOutput),
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedOutput {
    generated_text: String,
}

/// Error body returned by the Inference API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Hugging Face inference client.
pub struct HuggingFaceClient {
    /// Base URL for the Inference API
    base_url: String,

    /// Bearer token, if any
    api_key: Option<String>,

    /// Model per task
    models: InferenceModels,

    /// HTTP client
    client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Create a client against `base_url` with a request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        models: InferenceModels,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Inference(format!("Failed to create HTTP client for inference: {}", e))
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            models,
            client,
        })
    }

    /// URL of the model serving `task`.
    fn model_url(&self, task: InferenceTask) -> String {
        format!("{}/models/{}", self.base_url, task.model(&self.models))
    }

    /// Convert an InferenceRequest to the Inference API payload.
    fn to_payload(request: &InferenceRequest) -> serde_json::Value {
        match request {
            InferenceRequest::Answer { question, context } => json!({
                "inputs": { "question": question, "context": context }
            }),
            InferenceRequest::Summarize { text } | InferenceRequest::Paraphrase { text } => {
                json!({ "inputs": text })
            }
        }
    }

    /// Parse a successful response body for `task`.
    fn parse_response(task: InferenceTask, body: &str) -> AppResult<InferenceResponse> {
        if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
            return Err(AppError::Inference(format!(
                "{} model returned an error: {}",
                task, error.error
            )));
        }

        let parse_err =
            |e: serde_json::Error| AppError::Inference(format!("Failed to parse {} response: {}", task, e));

        match task {
            InferenceTask::Answer => {
                let output = match serde_json::from_str::<QaPayload>(body).map_err(parse_err)? {
                    QaPayload::One(output) => output,
                    QaPayload::Many(outputs) => outputs.into_iter().next().unwrap_or_default(),
                };

                Ok(InferenceResponse::Answer(output.answer.map(|answer| {
                    ExtractedAnswer {
                        answer,
                        score: output.score,
                    }
                })))
            }
            InferenceTask::Summarize => {
                let outputs: Vec<SummaryOutput> = serde_json::from_str(body).map_err(parse_err)?;
                Ok(InferenceResponse::Summary(
                    outputs.into_iter().next().map(|o| o.summary_text),
                ))
            }
            InferenceTask::Paraphrase => {
                let outputs: Vec<GeneratedOutput> =
                    serde_json::from_str(body).map_err(parse_err)?;
                Ok(InferenceResponse::Paraphrase(
                    outputs.into_iter().next().map(|o| o.generated_text),
                ))
            }
        }
    }
}

#[async_trait::async_trait]
impl InferenceClient for HuggingFaceClient {
    fn provider_name(&self) -> &str {
        "huggingface"
    }

    async fn infer(&self, request: &InferenceRequest) -> AppResult<InferenceResponse> {
        let task = request.task();
        let url = self.model_url(task);

        tracing::debug!(task = %task, url = %url, "Sending inference request");

        let mut builder = self.client.post(&url).json(&Self::to_payload(request));
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::Inference(format!("Failed to send {} request: {}", task, e))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Inference(format!("Failed to read {} response: {}", task, e)))?;

        if !status.is_success() {
            return Err(AppError::Inference(format!(
                "Inference API error for {} ({}): {}",
                task, status, body
            )));
        }

        tracing::debug!(task = %task, "Received inference response: {}", body);

        Self::parse_response(task, &body)
    }
}
