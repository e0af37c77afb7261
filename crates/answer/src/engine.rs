//! Answer resolution engine.
//!
//! Runs the cascade for one question: search, route on the top result,
//! then either answer directly, resolve a document passage, or paraphrase
//! the question and search again within the depth bound.

use crate::dispatch::{classify, Route};
use crate::excerpt::resolve_candidate;
use crate::inference::Inference;
use crate::links;
use crate::render::ResponseRenderer;
use crate::retry::RecursionController;
use crate::search::SearchClient;
use crate::types::{Resolution, Strategy};
use helpdesk_core::{AppConfig, AppResult};
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

/// Outcome of one search-and-route step.
enum Step {
    Done(Resolution),
    Retry,
}

/// Answer engine. Holds only immutable, shared collaborators, so one
/// engine can serve concurrent questions.
pub struct Engine {
    search: SearchClient,
    inference: Inference,
    renderer: ResponseRenderer,
}

impl Engine {
    pub fn new(search: SearchClient, inference: Inference, renderer: ResponseRenderer) -> Self {
        Self {
            search,
            inference,
            renderer,
        }
    }

    /// Build an engine from configuration.
    ///
    /// A missing index id is not an error here; questions then resolve to
    /// the configuration-error outcome.
    ///
    /// # Errors
    /// Returns an error for unknown providers, a missing local index file,
    /// an unbuildable HTTP client or a broken response template.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let search = SearchClient::from_config(config)?;

        let inference_key = config.resolve_inference_key();
        let client = helpdesk_inference::create_client(&config.inference, inference_key.as_deref())?;

        tracing::debug!(
            "Engine using {} search and {} inference",
            search.backend_name(),
            client.provider_name()
        );

        Ok(Self::new(
            search,
            Inference::new(client, Duration::from_secs(config.inference.timeout_secs)),
            ResponseRenderer::new(&config.responses)?,
        ))
    }

    /// Answer a fresh question.
    pub async fn answer(&self, question: &str) -> Resolution {
        self.answer_at_depth(question, 0).await
    }

    /// Answer `question` with `depth` searches already spent on it.
    /// Depths past [`MAX_DEPTH`](crate::retry::MAX_DEPTH) count as `MAX_DEPTH`.
    pub async fn answer_at_depth(&self, question: &str, depth: u32) -> Resolution {
        let request_id = Uuid::new_v4();
        let mut controller = RecursionController::starting_at(depth);
        let mut question = question.to_string();

        loop {
            let span = tracing::info_span!(
                "resolve",
                request_id = %request_id,
                depth = controller.depth()
            );

            let step = self.step(&question, &controller).instrument(span.clone()).await;

            let resolution = match step {
                Step::Done(resolution) => resolution,
                Step::Retry => {
                    let paraphrased = self
                        .paraphrase(&question, &mut controller)
                        .instrument(span)
                        .await;

                    match paraphrased {
                        Some(paraphrased) => {
                            question = paraphrased;
                            continue;
                        }
                        None => Resolution::no_answer(controller.depth(), &question),
                    }
                }
            };

            controller.finish();
            return resolution;
        }
    }

    /// Paraphrase `question` and spend one retry on it.
    async fn paraphrase(&self, question: &str, controller: &mut RecursionController) -> Option<String> {
        if !controller.can_retry() {
            tracing::info!("Retry bound reached, giving up");
            return None;
        }

        let Some(paraphrased) = self.inference.paraphrase(question).await else {
            tracing::info!("Paraphrase produced nothing, giving up");
            return None;
        };

        if !controller.retry() {
            return None;
        }

        tracing::info!("Retrying with paraphrased question: {}", paraphrased);
        Some(paraphrased)
    }

    /// Search once and act on the top result.
    async fn step(&self, question: &str, controller: &RecursionController) -> Step {
        let depth = controller.depth();
        tracing::info!("Resolving question: {}", question);

        let result = match self.search.query(question).await {
            Ok(result) => result,
            Err(e) if e.is_config() => {
                tracing::warn!("Search is not configured: {}", e);
                return Step::Done(Resolution::configuration_error(depth, question));
            }
            Err(e) => {
                tracing::warn!("Search failed, no answer: {}", e);
                return Step::Done(Resolution::no_answer(depth, question));
            }
        };

        match classify(&result, controller) {
            Route::NoAnswer(reason) => {
                tracing::info!("No answer: {}", reason);
                Step::Done(Resolution::no_answer(depth, question))
            }
            Route::Faq { excerpt } => {
                tracing::info!("Answering from FAQ entry");
                Step::Done(Resolution::answered(
                    excerpt.to_string(),
                    Strategy::FaqShortcut,
                    depth,
                    question,
                ))
            }
            Route::ExcerptWithLink { excerpt, link } => {
                tracing::info!("Answering with passage from {}", link.uri);
                let resolution = match self.renderer.excerpt_with_link(excerpt, &link) {
                    Ok(text) => Resolution::answered(text, Strategy::ExcerptWithLink, depth, question),
                    Err(e) => {
                        tracing::warn!("{}", e);
                        Resolution::no_answer(depth, question)
                    }
                };
                Step::Done(resolution)
            }
            Route::ResolveDocument { context } => {
                let candidate = resolve_candidate(&self.inference, question, context).await;
                let links = links::assemble(&result.items);

                tracing::info!(
                    "Answering from document via {:?} with {} reference links",
                    candidate.strategy,
                    links.len()
                );

                let resolution = match self.renderer.document_answer(&candidate.text, &links) {
                    Ok(text) => Resolution {
                        confidence_score: candidate.confidence_score,
                        ..Resolution::answered(text, candidate.strategy, depth, question)
                    },
                    Err(e) => {
                        tracing::warn!("{}", e);
                        Resolution::no_answer(depth, question)
                    }
                };
                Step::Done(resolution)
            }
            Route::Paraphrase => Step::Retry,
        }
    }
}
