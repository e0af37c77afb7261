//! Text-inference client abstraction and request/response types.
//!
//! Extractive question answering, summarization and paraphrase generation
//! are three variants of one capability: a provider receives an
//! [`InferenceRequest`] and answers with the matching [`InferenceResponse`].

use crate::types::InferenceTask;
use helpdesk_core::AppResult;
use serde::{Deserialize, Serialize};

/// A single text-inference request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum InferenceRequest {
    /// Locate an answer span for `question` inside `context`
    Answer { question: String, context: String },

    /// Condense `text` into a short abstract
    Summarize { text: String },

    /// Reformulate the question in `text`
    Paraphrase { text: String },
}

impl InferenceRequest {
    /// Create an extractive question-answering request.
    pub fn answer(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Answer {
            question: question.into(),
            context: context.into(),
        }
    }

    /// Create a summarization request.
    pub fn summarize(text: impl Into<String>) -> Self {
        Self::Summarize { text: text.into() }
    }

    /// Create a paraphrase request.
    pub fn paraphrase(text: impl Into<String>) -> Self {
        Self::Paraphrase { text: text.into() }
    }

    /// The task this request asks for.
    pub fn task(&self) -> InferenceTask {
        match self {
            Self::Answer { .. } => InferenceTask::Answer,
            Self::Summarize { .. } => InferenceTask::Summarize,
            Self::Paraphrase { .. } => InferenceTask::Paraphrase,
        }
    }
}

/// An answer span located by extractive question answering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAnswer {
    /// The literal span
    pub answer: String,

    /// Model confidence in `[0, 1]`, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Response to an [`InferenceRequest`].
///
/// `None` payloads mean the service answered but produced nothing usable
/// (for example `{}` from a question-answering model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", content = "output", rename_all = "snake_case")]
pub enum InferenceResponse {
    Answer(Option<ExtractedAnswer>),
    Summary(Option<String>),
    Paraphrase(Option<String>),
}

impl InferenceResponse {
    /// The task this response belongs to.
    pub fn task(&self) -> InferenceTask {
        match self {
            Self::Answer(_) => InferenceTask::Answer,
            Self::Summary(_) => InferenceTask::Summarize,
            Self::Paraphrase(_) => InferenceTask::Paraphrase,
        }
    }

    /// Extract the answer span, if this is a non-empty answer response.
    pub fn into_answer(self) -> Option<ExtractedAnswer> {
        match self {
            Self::Answer(answer) => answer.filter(|a| !a.answer.trim().is_empty()),
            _ => None,
        }
    }

    /// Extract the summary text, if this is a non-empty summary response.
    pub fn into_summary(self) -> Option<String> {
        match self {
            Self::Summary(text) => non_blank(text),
            _ => None,
        }
    }

    /// Extract the reformulated question, if this is a non-empty paraphrase response.
    pub fn into_paraphrase(self) -> Option<String> {
        match self {
            Self::Paraphrase(text) => non_blank(text),
            _ => None,
        }
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Trait for text-inference providers.
///
/// This trait abstracts the underlying inference service (Hugging Face
/// Inference API, the offline mock, ...) so the answer cascade never
/// depends on a concrete provider.
#[async_trait::async_trait]
pub trait InferenceClient: Send + Sync {
    /// Get the provider name (e.g., "huggingface", "mock").
    fn provider_name(&self) -> &str;

    /// Run one inference request.
    ///
    /// # Errors
    /// Transport failures, non-success statuses and unparseable payloads
    /// are reported as `AppError::Inference`.
    async fn infer(&self, request: &InferenceRequest) -> AppResult<InferenceResponse>;
}
