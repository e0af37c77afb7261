//! Text-inference integration crate for the help-desk workspace.
//!
//! This crate provides a provider-agnostic abstraction over the three
//! inference tasks the answer cascade relies on: extractive question
//! answering, summarization and paraphrase generation.
//!
//! # Providers
//! - **huggingface**: Hugging Face Inference API (default)
//! - **mock**: deterministic offline provider
//!
//! # Example
//! ```no_run
//! use helpdesk_inference::{InferenceClient, InferenceRequest, providers::MockInferenceClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MockInferenceClient::new();
//! let request = InferenceRequest::summarize("Open settings. Press reset.");
//! let summary = client.infer(&request).await?.into_summary();
//! println!("{:?}", summary);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{ExtractedAnswer, InferenceClient, InferenceRequest, InferenceResponse};
pub use factory::create_client;
pub use providers::{HuggingFaceClient, MockInferenceClient};
pub use types::{InferenceTask, ProviderType};
