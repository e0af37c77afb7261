//! Inference provider factory.
//!
//! Creates the configured [`InferenceClient`] once at startup; the answer
//! cascade receives it as an explicit dependency.

use crate::client::InferenceClient;
use crate::providers::{HuggingFaceClient, MockInferenceClient};
use crate::types::ProviderType;
use helpdesk_core::config::InferenceSettings;
use helpdesk_core::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;

/// Create an inference client from settings.
///
/// # Arguments
/// * `settings` - Provider, endpoint, models and timeout
/// * `api_key` - Token for providers that accept one
///
/// # Errors
/// Returns `AppError::Config` if the provider is unknown, or
/// `AppError::Inference` if the HTTP client cannot be built.
pub fn create_client(
    settings: &InferenceSettings,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn InferenceClient>> {
    let provider = ProviderType::parse(&settings.provider).ok_or_else(|| {
        AppError::Config(format!("Unknown inference provider: {}", settings.provider))
    })?;

    match provider {
        ProviderType::HuggingFace => {
            if api_key.is_none() {
                tracing::warn!(
                    "No inference API token found in {}; sending unauthenticated requests",
                    settings.api_key_env
                );
            }

            let client = HuggingFaceClient::new(
                settings.endpoint.clone(),
                api_key.map(str::to_string),
                settings.models.clone(),
                Duration::from_secs(settings.timeout_secs),
            )?;
            Ok(Arc::new(client))
        }
        ProviderType::Mock => Ok(Arc::new(MockInferenceClient::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_huggingface_client() {
        let settings = InferenceSettings::default();
        let client = create_client(&settings, Some("hf_test")).unwrap();
        assert_eq!(client.provider_name(), "huggingface");
    }

    #[test]
    fn test_create_huggingface_without_key() {
        let settings = InferenceSettings::default();
        assert!(create_client(&settings, None).is_ok());
    }

    #[test]
    fn test_create_mock_client() {
        let settings = InferenceSettings {
            provider: "mock".to_string(),
            ..Default::default()
        };
        let client = create_client(&settings, None).unwrap();
        assert_eq!(client.provider_name(), "mock");
    }

    #[test]
    fn test_unknown_provider() {
        let settings = InferenceSettings {
            provider: "unknown".to_string(),
            ..Default::default()
        };
        match create_client(&settings, None) {
            Err(err) => assert!(err.to_string().contains("Unknown inference provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
