//! Inference task and provider identifiers.

use helpdesk_core::config::InferenceModels;

/// The three text-inference tasks used by the answer cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InferenceTask {
    Answer,
    Summarize,
    Paraphrase,
}

impl InferenceTask {
    /// Get the canonical task name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Summarize => "summarize",
            Self::Paraphrase => "paraphrase",
        }
    }

    /// The configured model for this task.
    pub fn model<'a>(&self, models: &'a InferenceModels) -> &'a str {
        match self {
            Self::Answer => &models.answer,
            Self::Summarize => &models.summarize,
            Self::Paraphrase => &models.paraphrase,
        }
    }
}

impl std::fmt::Display for InferenceTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider type enum for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    HuggingFace,
    Mock,
}

impl ProviderType {
    /// Parse provider type from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Some(Self::HuggingFace),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(
            ProviderType::parse("huggingface"),
            Some(ProviderType::HuggingFace)
        );
        assert_eq!(ProviderType::parse("HF"), Some(ProviderType::HuggingFace));
        assert_eq!(ProviderType::parse("mock"), Some(ProviderType::Mock));
        assert_eq!(ProviderType::parse("openai"), None);
    }

    #[test]
    fn test_task_model_lookup() {
        let models = InferenceModels::default();
        assert_eq!(
            InferenceTask::Answer.model(&models),
            "distilbert-base-uncased-distilled-squad"
        );
        assert_eq!(
            InferenceTask::Paraphrase.model(&models),
            "tuner007/pegasus_paraphrase"
        );
    }
}
