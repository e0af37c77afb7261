//! Configuration management for the help-desk CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Config files (.helpdesk/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources win. The search index id is deliberately optional: an unset
//! index is reported by the answer cascade itself, not at load time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Search providers understood by the search factory.
pub const SEARCH_PROVIDERS: [&str; 2] = ["http", "local"];

/// Inference providers understood by the inference factory.
pub const INFERENCE_PROVIDERS: [&str; 2] = ["huggingface", "mock"];

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .helpdesk/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Search backend settings
    pub search: SearchSettings,

    /// Inference service settings
    pub inference: InferenceSettings,

    /// Response template overrides
    pub responses: ResponseSettings,
}

/// Search backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchSettings {
    /// Backend kind ("http" or "local")
    pub provider: String,

    /// Search gateway URL (http provider)
    pub endpoint: Option<String>,

    /// Index to query; required at query time
    pub index_id: Option<String>,

    /// Environment variable holding a bearer token for the gateway
    pub api_key_env: Option<String>,

    /// Entries file (local provider)
    pub path: Option<PathBuf>,

    /// Per-query deadline in seconds
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            provider: "http".to_string(),
            endpoint: None,
            index_id: None,
            api_key_env: None,
            path: None,
            timeout_secs: 10,
        }
    }
}

/// Inference service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InferenceSettings {
    /// Provider kind ("huggingface" or "mock")
    pub provider: String,

    /// Inference API base URL
    pub endpoint: String,

    /// Environment variable holding the API token
    pub api_key_env: String,

    /// Model used for each inference task
    pub models: InferenceModels,

    /// Per-call deadline in seconds
    pub timeout_secs: u64,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            provider: "huggingface".to_string(),
            endpoint: "https://api-inference.huggingface.co".to_string(),
            api_key_env: "HF_API_TOKEN".to_string(),
            models: InferenceModels::default(),
            timeout_secs: 30,
        }
    }
}

/// Model identifiers per inference task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceModels {
    pub answer: String,
    pub summarize: String,
    pub paraphrase: String,
}

impl Default for InferenceModels {
    fn default() -> Self {
        Self {
            answer: "distilbert-base-uncased-distilled-squad".to_string(),
            summarize: "facebook/bart-large-cnn".to_string(),
            paraphrase: "tuner007/pegasus_paraphrase".to_string(),
        }
    }
}

/// Handlebars overrides for the rendered answer texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseSettings {
    /// Template for an ANSWER excerpt with its source link
    pub excerpt_template: Option<String>,

    /// Template for a resolved DOCUMENT answer with reference links
    pub document_template: Option<String>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    search: Option<SearchSettings>,
    inference: Option<InferenceSettings>,
    responses: Option<ResponseSettings>,
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
            search: SearchSettings::default(),
            inference: InferenceSettings::default(),
            responses: ResponseSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the YAML config file and the environment.
    ///
    /// Environment variables:
    /// - `HELPDESK_WORKSPACE`: Override workspace path
    /// - `HELPDESK_CONFIG`: Path to config file
    /// - `HELPDESK_SEARCH_INDEX`: Search index id
    /// - `HELPDESK_SEARCH_PROVIDER` / `HELPDESK_SEARCH_ENDPOINT`
    /// - `HELPDESK_INFERENCE_PROVIDER` / `HELPDESK_INFERENCE_ENDPOINT`
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use helpdesk_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Search provider: {}", config.search.provider);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_from(None, None)
    }

    /// Load configuration with an explicit workspace and config file.
    ///
    /// `None` falls back to `HELPDESK_WORKSPACE` / `HELPDESK_CONFIG`, then to
    /// the current directory and `<workspace>/.helpdesk/config.yaml`.
    pub fn load_from(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) =
            workspace.or_else(|| std::env::var("HELPDESK_WORKSPACE").ok().map(PathBuf::from))
        {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var("HELPDESK_CONFIG").ok().map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| config.helpdesk_dir().join("config.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        config.apply_env(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(search) = config_file.search {
            result.search = search;
        }

        if let Some(inference) = config_file.inference {
            result.inference = inference;
        }

        if let Some(responses) = config_file.responses {
            result.responses = responses;
        }

        tracing::debug!("Merged configuration from {:?}", path);
        Ok(result)
    }

    /// Apply environment overrides through `lookup`.
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(index_id) = lookup("HELPDESK_SEARCH_INDEX") {
            self.search.index_id = Some(index_id);
        }

        if let Some(provider) = lookup("HELPDESK_SEARCH_PROVIDER") {
            self.search.provider = provider;
        }

        if let Some(endpoint) = lookup("HELPDESK_SEARCH_ENDPOINT") {
            self.search.endpoint = Some(endpoint);
        }

        if let Some(provider) = lookup("HELPDESK_INFERENCE_PROVIDER") {
            self.inference.provider = provider;
        }

        if let Some(endpoint) = lookup("HELPDESK_INFERENCE_ENDPOINT") {
            self.inference.endpoint = endpoint;
        }

        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = Some(level);
        }

        if lookup("NO_COLOR").is_some() {
            self.no_color = true;
        }
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables
    /// and the config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
        index_id: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(index_id) = index_id {
            self.search.index_id = Some(index_id);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .helpdesk directory.
    pub fn helpdesk_dir(&self) -> PathBuf {
        self.workspace.join(".helpdesk")
    }

    /// Resolve the configured search index id, ignoring blank values.
    pub fn index_id(&self) -> Option<&str> {
        self.search
            .index_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Resolve the inference API token from its environment variable.
    pub fn resolve_inference_key(&self) -> Option<String> {
        std::env::var(&self.inference.api_key_env).ok()
    }

    /// Resolve the search gateway token, if one is configured.
    pub fn resolve_search_key(&self) -> Option<String> {
        self.search
            .api_key_env
            .as_ref()
            .and_then(|env_var| std::env::var(env_var).ok())
    }

    /// Validate provider selection and provider-specific requirements.
    pub fn validate(&self) -> AppResult<()> {
        let search_provider = self.search.provider.as_str();
        if !SEARCH_PROVIDERS.contains(&search_provider) {
            return Err(AppError::Config(format!(
                "Unknown search provider: {}. Supported: {}",
                search_provider,
                SEARCH_PROVIDERS.join(", ")
            )));
        }

        let inference_provider = self.inference.provider.as_str();
        if !INFERENCE_PROVIDERS.contains(&inference_provider) {
            return Err(AppError::Config(format!(
                "Unknown inference provider: {}. Supported: {}",
                inference_provider,
                INFERENCE_PROVIDERS.join(", ")
            )));
        }

        // Without an index no backend is built, so its settings are not needed.
        let needs_backend = self.index_id().is_some();
        match search_provider {
            _ if !needs_backend => {}
            "http" if self.search.endpoint.is_none() => {
                return Err(AppError::Config(
                    "Search provider 'http' requires search.endpoint (or HELPDESK_SEARCH_ENDPOINT)"
                        .to_string(),
                ));
            }
            "local" if self.search.path.is_none() => {
                return Err(AppError::Config(
                    "Search provider 'local' requires search.path".to_string(),
                ));
            }
            _ => {}
        }

        if self.search.timeout_secs == 0 || self.inference.timeout_secs == 0 {
            return Err(AppError::Config(
                "Timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
