//! End-to-end cascade behavior.

use super::fakes::{engine, ScriptedInference, ScriptedSearch};
use crate::{Engine, FinalAnswer, Strategy, CONFIGURATION_ERROR_MESSAGE, MAX_DEPTH};
use helpdesk_core::{AppConfig, AppError};
use helpdesk_search::{ResultItem, ResultType, SearchResult};
use std::sync::Arc;

const INDEX: Option<&str> = Some("it-help");

const VPN_EXCERPT: &str = "The VPN client ships with every laptop. Restart it when it hangs.";

fn faq(excerpt: &str) -> SearchResult {
    SearchResult::new(vec![
        ResultItem::new(ResultType::QuestionAnswer).with_excerpt(excerpt)
    ])
}

fn document(n: usize) -> ResultItem {
    ResultItem::new(ResultType::Document)
        .with_excerpt(VPN_EXCERPT)
        .with_title(format!("Guide {}", n))
        .with_document_id(format!("doc-{}", n))
        .with_uri(format!("https://docs.example.com/{}", n))
}

fn unmatched() -> SearchResult {
    SearchResult::new(vec![ResultItem::new(ResultType::Other).with_excerpt("?")])
}

fn text(answer: &FinalAnswer) -> &str {
    answer.text().expect("expected answer text")
}

#[tokio::test]
async fn test_faq_excerpt_is_returned_verbatim() {
    let search = ScriptedSearch::new(vec![faq("Go to settings > reset.")]);
    let inference = Arc::new(ScriptedInference::new());
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("How do I reset my password?").await;

    assert_eq!(
        resolution.answer,
        FinalAnswer::Answer("Go to settings > reset.".to_string())
    );
    assert_eq!(resolution.strategy, Some(Strategy::FaqShortcut));
    assert_eq!(search.calls(), 1);
    assert_eq!(inference.total_calls(), 0);
}

#[tokio::test]
async fn test_answer_excerpt_carries_source_link() {
    let result = SearchResult::new(vec![ResultItem::new(ResultType::Answer)
        .with_excerpt("Use the self-service portal")
        .with_title("Portal guide")
        .with_uri("https://docs.example.com/portal")]);
    let search = ScriptedSearch::new(vec![result]);
    let engine = engine(search, Arc::new(ScriptedInference::new()), INDEX);

    let resolution = engine.answer("How do I reset my password?").await;
    let answer = text(&resolution.answer);

    assert!(answer.contains("Use the self-service portal"));
    assert!(answer.contains("<https://docs.example.com/portal|Portal guide>"));
    assert_eq!(resolution.strategy, Some(Strategy::ExcerptWithLink));
}

#[tokio::test]
async fn test_confident_span_is_used_over_summary() {
    let search = ScriptedSearch::new(vec![SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(
        ScriptedInference::new()
            .with_answer("restart THE client", Some(0.8))
            .with_summary("SUMMARY TEXT"),
    );
    let engine = engine(search, inference.clone(), INDEX);

    let resolution = engine.answer("The VPN hangs, what now?").await;
    let answer = text(&resolution.answer);

    assert!(answer.contains("\nRestart the client \n"));
    assert!(!answer.contains("SUMMARY TEXT"));
    assert_eq!(resolution.strategy, Some(Strategy::ExtractedSpan));
    assert_eq!(resolution.confidence_score, Some(0.8));
    assert_eq!(inference.summarize_calls(), 0);
}

#[tokio::test]
async fn test_low_confidence_span_is_replaced_by_summary() {
    let search = ScriptedSearch::new(vec![SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(
        ScriptedInference::new()
            .with_answer("RAW SPAN", Some(0.3))
            .with_summary("Restart the VPN client when it hangs."),
    );
    let engine = engine(search, inference.clone(), INDEX);

    let resolution = engine.answer("The VPN hangs, what now?").await;
    let answer = text(&resolution.answer);

    assert!(answer.contains("Restart the VPN client when it hangs."));
    assert!(!answer.to_lowercase().contains("raw span"));
    assert_eq!(resolution.strategy, Some(Strategy::Summary));
    assert_eq!(inference.summarize_calls(), 1);
}

#[tokio::test]
async fn test_document_answer_format_and_links() {
    let items = vec![
        document(1),
        ResultItem::new(ResultType::Answer)
            .with_excerpt("passage")
            .with_title("Not a document")
            .with_uri("https://docs.example.com/answer"),
        document(3).with_title(""),
        document(4),
        document(5),
    ];
    let search = ScriptedSearch::new(vec![SearchResult::new(items)]);
    let inference = Arc::new(ScriptedInference::new().with_answer("restart it", Some(0.9)));
    let engine = engine(search, inference, INDEX);

    let resolution = engine.answer("The VPN hangs, what now?").await;

    assert_eq!(
        text(&resolution.answer),
        "I couldn't find a specific answer, but here's an excerpt from a document: \n\
         Restart it \n\
         Also here are some documents that could be helpful:\n\
         -  <https://docs.example.com/1|Guide 1>\n"
    );
}

#[tokio::test]
async fn test_no_span_falls_back_to_excerpt() {
    let search = ScriptedSearch::new(vec![SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(ScriptedInference::new().with_summary("never used"));
    let engine = engine(search, inference.clone(), INDEX);

    let resolution = engine.answer("The VPN hangs, what now?").await;

    assert!(text(&resolution.answer).contains(VPN_EXCERPT));
    assert_eq!(resolution.strategy, Some(Strategy::DocumentExcerpt));
    assert_eq!(inference.summarize_calls(), 0);
}

#[tokio::test]
async fn test_empty_result_is_no_answer() {
    let search = ScriptedSearch::new(vec![SearchResult::default()]);
    let inference = Arc::new(ScriptedInference::new().with_paraphrase("reset password"));
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("How do I reset my password?").await;

    assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
    assert_eq!(search.calls(), 1);
    assert_eq!(inference.total_calls(), 0);
}

#[tokio::test]
async fn test_missing_index_is_configuration_error_without_calls() {
    for index_id in [None, Some(""), Some("  ")] {
        let search = ScriptedSearch::new(vec![faq("never returned")]);
        let inference = Arc::new(ScriptedInference::new());
        let engine = engine(search.clone(), inference.clone(), index_id);

        let resolution = engine.answer("How do I reset my password?").await;

        assert_eq!(resolution.answer, FinalAnswer::ConfigurationError);
        assert_eq!(resolution.answer.text(), Some(CONFIGURATION_ERROR_MESSAGE));
        assert_eq!(search.calls(), 0);
        assert_eq!(inference.total_calls(), 0);
    }
}

#[tokio::test]
async fn test_default_config_answers_with_configuration_error() {
    let mut config = AppConfig::default();
    config.inference.provider = "mock".to_string();
    config.validate().unwrap();

    let engine = Engine::from_config(&config).unwrap();
    let resolution = engine.answer("How do I reset my password?").await;

    assert_eq!(resolution.answer, FinalAnswer::ConfigurationError);
    assert_eq!(resolution.answer.text(), Some(CONFIGURATION_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_search_failure_is_no_answer() {
    let search = ScriptedSearch::failing(AppError::Search("503".to_string()));
    let inference = Arc::new(ScriptedInference::new().with_paraphrase("reset password"));
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("How do I reset my password?").await;

    assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
    assert_eq!(search.calls(), 1);
    assert_eq!(inference.total_calls(), 0);
}

#[tokio::test]
async fn test_unmatched_type_paraphrases_and_retries_once() {
    let search = ScriptedSearch::new(vec![unmatched(), faq("Go to settings > reset.")]);
    let inference = Arc::new(ScriptedInference::new().with_paraphrase("reset password steps"));
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("pw broken??").await;

    assert_eq!(
        resolution.answer,
        FinalAnswer::Answer("Go to settings > reset.".to_string())
    );
    assert_eq!(resolution.depth, 1);
    assert_eq!(resolution.question, "reset password steps");
    assert_eq!(search.queries(), vec!["pw broken??", "reset password steps"]);
    assert_eq!(inference.paraphrase_calls(), 1);
}

#[tokio::test]
async fn test_second_unmatched_type_is_no_answer() {
    let search = ScriptedSearch::new(vec![unmatched(), unmatched(), faq("unreachable")]);
    let inference = Arc::new(ScriptedInference::new().with_paraphrase("reset password steps"));
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("pw broken??").await;

    assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
    assert_eq!(resolution.depth, 1);
    assert_eq!(search.calls(), 2);
    assert_eq!(inference.paraphrase_calls(), 1);
}

#[tokio::test]
async fn test_failed_paraphrase_is_no_answer() {
    let search = ScriptedSearch::new(vec![unmatched(), faq("unreachable")]);
    let inference = Arc::new(ScriptedInference::new());
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("pw broken??").await;

    assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
    assert_eq!(search.calls(), 1);
    assert_eq!(inference.paraphrase_calls(), 1);
}

#[tokio::test]
async fn test_no_reentry_at_or_beyond_bound() {
    for depth in MAX_DEPTH..MAX_DEPTH + 3 {
        let search = ScriptedSearch::new(vec![unmatched(), unmatched()]);
        let inference = Arc::new(ScriptedInference::new().with_paraphrase("again"));
        let engine = engine(search.clone(), inference.clone(), INDEX);

        let resolution = engine.answer_at_depth("pw broken??", depth).await;

        assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
        assert_eq!(search.calls(), 1);
        assert_eq!(inference.paraphrase_calls(), 0);
    }
}

#[tokio::test]
async fn test_faq_past_bound_is_no_answer() {
    let search = ScriptedSearch::new(vec![faq("Go to settings > reset.")]);
    let engine = engine(search, Arc::new(ScriptedInference::new()), INDEX);

    let resolution = engine.answer_at_depth("reset?", MAX_DEPTH).await;
    assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
}

#[tokio::test]
async fn test_document_is_resolved_past_bound() {
    let search = ScriptedSearch::new(vec![SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(ScriptedInference::new().with_answer("restart it", Some(0.9)));
    let engine = engine(search, inference, INDEX);

    let resolution = engine.answer_at_depth("vpn?", MAX_DEPTH).await;

    assert_eq!(resolution.strategy, Some(Strategy::ExtractedSpan));
    assert_eq!(resolution.depth, MAX_DEPTH);
}

#[tokio::test]
async fn test_reported_depth_never_exceeds_bound() {
    let search = ScriptedSearch::new(vec![SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(ScriptedInference::new().with_answer("restart it", Some(0.9)));
    let engine = engine(search, inference, INDEX);

    let resolution = engine.answer_at_depth("vpn?", MAX_DEPTH + 5).await;

    assert_eq!(resolution.strategy, Some(Strategy::ExtractedSpan));
    assert_eq!(resolution.depth, MAX_DEPTH);
}

#[tokio::test]
async fn test_worst_case_call_budget() {
    let search = ScriptedSearch::new(vec![unmatched(), SearchResult::new(vec![document(1)])]);
    let inference = Arc::new(
        ScriptedInference::new()
            .with_paraphrase("vpn restart")
            .with_answer("restart", Some(0.1))
            .with_summary("Restart the client."),
    );
    let engine = engine(search.clone(), inference.clone(), INDEX);

    let resolution = engine.answer("vpn?").await;

    assert_eq!(resolution.strategy, Some(Strategy::Summary));
    assert!(search.calls() <= 2);
    assert!(inference.total_calls() <= 4);
}

#[tokio::test]
async fn test_malformed_top_items_are_no_answer() {
    let untyped = ResultItem {
        result_type: None,
        ..ResultItem::new(ResultType::QuestionAnswer).with_excerpt("text")
    };
    let cases = vec![
        SearchResult::new(vec![untyped]),
        SearchResult::new(vec![ResultItem::new(ResultType::QuestionAnswer)]),
        SearchResult::new(vec![ResultItem::new(ResultType::Answer).with_excerpt("no link")]),
        SearchResult::new(vec![ResultItem::new(ResultType::Document).with_title("empty")]),
    ];

    for result in cases {
        let search = ScriptedSearch::new(vec![result]);
        let inference = Arc::new(ScriptedInference::new().with_paraphrase("again"));
        let engine = engine(search.clone(), inference.clone(), INDEX);

        let resolution = engine.answer("anything").await;

        assert_eq!(resolution.answer, FinalAnswer::NoAnswer);
        assert_eq!(search.calls(), 1);
        assert_eq!(inference.total_calls(), 0);
    }
}
