//! Mock inference provider using term overlap over sentences.

use crate::client::{ExtractedAnswer, InferenceClient, InferenceRequest, InferenceResponse};
use helpdesk_core::text::keywords;
use helpdesk_core::AppResult;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Number of leading sentences kept as a summary.
const SUMMARY_SENTENCES: usize = 2;

/// Mock provider for offline use and testing.
///
/// Deterministic and content-aware, but not a language model:
/// - answers with the passage sentence sharing the most keywords with the
///   question, scored by the fraction of question keywords it contains
/// - summarizes with the leading sentences of the passage
/// - paraphrases a question into its keywords
#[derive(Debug, Default)]
pub struct MockInferenceClient;

impl MockInferenceClient {
    pub fn new() -> Self {
        Self
    }

    fn extract(question: &str, context: &str) -> Option<ExtractedAnswer> {
        let wanted: HashSet<String> = keywords(question).into_iter().collect();
        if wanted.is_empty() {
            return None;
        }

        let (best, overlap) = context
            .unicode_sentences()
            .map(|sentence| {
                let found: HashSet<String> = keywords(sentence).into_iter().collect();
                (sentence, wanted.intersection(&found).count())
            })
            // Earliest sentence wins ties
            .fold(None, |best: Option<(&str, usize)>, (sentence, overlap)| match best {
                Some((_, top)) if top >= overlap => best,
                _ => Some((sentence, overlap)),
            })?;

        if overlap == 0 {
            return None;
        }

        Some(ExtractedAnswer {
            answer: best.trim().to_string(),
            score: Some(overlap as f32 / wanted.len() as f32),
        })
    }

    fn summarize(text: &str) -> Option<String> {
        let summary = text
            .unicode_sentences()
            .take(SUMMARY_SENTENCES)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");

        (!summary.is_empty()).then_some(summary)
    }

    fn paraphrase(text: &str) -> Option<String> {
        let words = keywords(text);
        (!words.is_empty()).then(|| words.join(" "))
    }
}

#[async_trait::async_trait]
impl InferenceClient for MockInferenceClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn infer(&self, request: &InferenceRequest) -> AppResult<InferenceResponse> {
        let response = match request {
            InferenceRequest::Answer { question, context } => {
                InferenceResponse::Answer(Self::extract(question, context))
            }
            InferenceRequest::Summarize { text } => InferenceResponse::Summary(Self::summarize(text)),
            InferenceRequest::Paraphrase { text } => {
                InferenceResponse::Paraphrase(Self::paraphrase(text))
            }
        };

        tracing::debug!(task = %request.task(), "Mock inference produced {:?}", response);
        Ok(response)
    }
}
