//! Reference links to source documents.

use helpdesk_search::{ResultItem, ResultType};
use serde::Serialize;

/// Maximum number of result items scanned for reference links.
pub const MAX_LINKS: usize = 3;

/// A link to a source document, rendered as `<uri|title>` chat markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub title: String,
    pub uri: String,
}

impl DocumentLink {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }

    /// Link to the source of any item carrying both a title and a URI.
    pub fn from_item(item: &ResultItem) -> Option<Self> {
        Some(Self::new(item.title()?, item.uri()?))
    }

    pub fn markup(&self) -> String {
        format!("<{}|{}>", self.uri, self.title)
    }
}

/// Collect reference links from the first [`MAX_LINKS`] items.
///
/// Only DOCUMENT items with a title, a document id and a URI qualify.
pub fn assemble(items: &[ResultItem]) -> Vec<DocumentLink> {
    items
        .iter()
        .take(MAX_LINKS)
        .filter(|item| item.is(ResultType::Document) && item.document_id().is_some())
        .filter_map(DocumentLink::from_item)
        .collect()
}

/// Render links as a bullet list, one `-  <uri|title>` line each.
pub fn render_bullets(links: &[DocumentLink]) -> String {
    links
        .iter()
        .map(|link| format!("-  {}\n", link.markup()))
        .collect()
}
