//! Answer cascade types.

use serde::{Deserialize, Serialize};

/// Minimum extractive-QA score for surfacing the extracted span.
/// Lower-scored spans are replaced by a summary of the passage.
pub const CONFIDENCE_THRESHOLD: f32 = 0.45;

/// Message returned verbatim when no search index is configured.
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Configuration error - please set the search index ID in the environment variable HELPDESK_SEARCH_INDEX.";

/// How the final answer text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// FAQ excerpt returned verbatim
    FaqShortcut,

    /// Document passage plus a link to its source
    ExcerptWithLink,

    /// Confident extractive-QA span
    ExtractedSpan,

    /// Abstractive summary of the passage
    Summary,

    /// The passage itself
    DocumentExcerpt,
}

/// Candidate answer text built while resolving a document excerpt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerCandidate {
    pub text: String,

    /// Extractive-QA score behind this candidate, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f32>,

    pub strategy: Strategy,
}

impl AnswerCandidate {
    pub fn new(text: impl Into<String>, confidence_score: Option<f32>, strategy: Strategy) -> Self {
        Self {
            text: text.into(),
            confidence_score,
            strategy,
        }
    }

    /// Whether the candidate's score clears [`CONFIDENCE_THRESHOLD`].
    /// A missing score never does.
    pub fn is_confident(&self) -> bool {
        self.confidence_score
            .is_some_and(|score| score >= CONFIDENCE_THRESHOLD)
    }
}

/// Outcome of the cascade as seen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FinalAnswer {
    /// Answer text to show the user
    Answer(String),

    /// Nothing usable was found; the caller substitutes an apology
    NoAnswer,

    /// No search index is configured
    ConfigurationError,
}

impl FinalAnswer {
    /// Text to surface, `None` for the no-answer sentinel.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Answer(text) => Some(text),
            Self::NoAnswer => None,
            Self::ConfigurationError => Some(CONFIGURATION_ERROR_MESSAGE),
        }
    }

    pub fn is_no_answer(&self) -> bool {
        matches!(self, Self::NoAnswer)
    }
}

/// The engine's report for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub answer: FinalAnswer,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    /// Extractive-QA score behind the answer, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f32>,

    /// Depth the outcome was reached at
    pub depth: u32,

    /// Question that produced the outcome (paraphrased after a retry)
    pub question: String,
}

impl Resolution {
    pub fn answered(text: String, strategy: Strategy, depth: u32, question: &str) -> Self {
        Self {
            answer: FinalAnswer::Answer(text),
            strategy: Some(strategy),
            confidence_score: None,
            depth,
            question: question.to_string(),
        }
    }

    pub fn no_answer(depth: u32, question: &str) -> Self {
        Self {
            answer: FinalAnswer::NoAnswer,
            strategy: None,
            confidence_score: None,
            depth,
            question: question.to_string(),
        }
    }

    pub fn configuration_error(depth: u32, question: &str) -> Self {
        Self {
            answer: FinalAnswer::ConfigurationError,
            ..Self::no_answer(depth, question)
        }
    }
}
