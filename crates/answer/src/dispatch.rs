//! Routing on the top search result.
//!
//! | top item        | condition            | route             |
//! |-----------------|----------------------|-------------------|
//! | none / untyped  | any                  | no answer         |
//! | QUESTION_ANSWER | depth < MAX_DEPTH    | FAQ shortcut      |
//! | ANSWER          | depth < MAX_DEPTH    | excerpt with link |
//! | DOCUMENT        | any depth            | resolve document  |
//! | anything else   | depth + 1 < MAX_DEPTH | paraphrase retry |
//! | anything else   | otherwise            | no answer         |
//!
//! A handled type missing the fields its route needs is a no-answer.

use crate::links::DocumentLink;
use crate::retry::RecursionController;
use helpdesk_search::{ResultType, SearchResult};

/// What the engine should do with a search result.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'a> {
    /// Stop without an answer, with a reason for the logs
    NoAnswer(&'static str),

    /// Return the FAQ excerpt verbatim
    Faq { excerpt: &'a str },

    /// Return the passage with a link to its document
    ExcerptWithLink { excerpt: &'a str, link: DocumentLink },

    /// Run document-excerpt resolution over `context`
    ResolveDocument { context: &'a str },

    /// Paraphrase the question and search again
    Paraphrase,
}

/// Pick the route for `result` at the controller's depth.
pub fn classify<'a>(result: &'a SearchResult, controller: &RecursionController) -> Route<'a> {
    let Some(top) = result.top() else {
        return Route::NoAnswer("search returned no results");
    };

    let Some(result_type) = top.result_type else {
        return Route::NoAnswer("top result has no type");
    };

    match result_type {
        ResultType::QuestionAnswer if controller.within_bound() => match top.excerpt() {
            Some(excerpt) => Route::Faq { excerpt },
            None => Route::NoAnswer("FAQ result has no excerpt"),
        },
        ResultType::Answer if controller.within_bound() => {
            match (top.excerpt(), DocumentLink::from_item(top)) {
                (Some(excerpt), Some(link)) => Route::ExcerptWithLink { excerpt, link },
                _ => Route::NoAnswer("answer result lacks excerpt, title or URI"),
            }
        }
        ResultType::Document => match top.excerpt() {
            Some(context) => Route::ResolveDocument { context },
            None => Route::NoAnswer("document result has no excerpt"),
        },
        _ if controller.can_retry() => Route::Paraphrase,
        _ => Route::NoAnswer("no handled result type and retries exhausted"),
    }
}
