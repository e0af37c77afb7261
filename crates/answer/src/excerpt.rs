//! Document-excerpt resolution.
//!
//! Turns a DOCUMENT passage into candidate answer text:
//! 1. extract an answer span for the question
//! 2. below [`CONFIDENCE_THRESHOLD`](crate::types::CONFIDENCE_THRESHOLD),
//!    replace the span with a summary of the passage
//! 3. with no span at all, or no summary, use the passage itself

use crate::inference::Inference;
use crate::types::{AnswerCandidate, Strategy};

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the answer candidate for `question` over `context`.
pub async fn resolve_candidate(
    inference: &Inference,
    question: &str,
    context: &str,
) -> AnswerCandidate {
    let Some(extracted) = inference.extract_answer(question, context).await else {
        tracing::debug!("No answer span found, using the excerpt");
        return AnswerCandidate::new(context, None, Strategy::DocumentExcerpt);
    };

    let candidate = AnswerCandidate::new(
        capitalize(&extracted.answer),
        extracted.score,
        Strategy::ExtractedSpan,
    );

    if candidate.is_confident() {
        tracing::debug!("Answer span accepted with score {:?}", candidate.confidence_score);
        return candidate;
    }

    tracing::debug!(
        "Answer span score {:?} below threshold, summarizing the excerpt",
        candidate.confidence_score
    );

    match inference.summarize(context).await {
        Some(summary) => AnswerCandidate::new(summary, candidate.confidence_score, Strategy::Summary),
        None => AnswerCandidate::new(context, candidate.confidence_score, Strategy::DocumentExcerpt),
    }
}
