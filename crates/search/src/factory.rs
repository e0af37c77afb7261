//! Search backend factory.

use crate::backend::SearchBackend;
use crate::providers::{HttpSearchBackend, LocalSearchBackend};
use helpdesk_core::config::SearchSettings;
use helpdesk_core::{AppError, AppResult};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Create a search backend from settings.
///
/// Relative `local` entry paths resolve against `workspace`.
///
/// # Errors
/// Returns `AppError::Config` for unknown providers or missing
/// provider-specific settings.
pub fn create_backend(
    settings: &SearchSettings,
    workspace: &Path,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn SearchBackend>> {
    match settings.provider.to_lowercase().as_str() {
        "http" => {
            let endpoint = settings.endpoint.as_deref().ok_or_else(|| {
                AppError::Config("Search provider 'http' requires an endpoint".to_string())
            })?;
            let backend = HttpSearchBackend::new(
                endpoint,
                api_key.map(str::to_string),
                Duration::from_secs(settings.timeout_secs),
            )?;
            Ok(Arc::new(backend))
        }
        "local" => {
            let path = settings.path.as_ref().ok_or_else(|| {
                AppError::Config("Search provider 'local' requires a path".to_string())
            })?;
            let backend = LocalSearchBackend::from_path(&workspace.join(path))?;
            Ok(Arc::new(backend))
        }
        other => Err(AppError::Config(format!(
            "Unknown search provider: '{}'. Supported providers: http, local",
            other
        ))),
    }
}
