//! Answer text rendering with Handlebars.
//!
//! Two templates exist:
//! - `excerpt`: an ANSWER passage with its source link. Variables:
//!   `excerpt`, `link` (markup), `title`, `uri`.
//! - `document`: a resolved DOCUMENT answer. Variables: `answer`, `links`
//!   (pre-rendered bullet list), `documents` (array of `{title, uri}`).
//!
//! Both can be overridden from the `responses` config section. Overrides are
//! checked with sample data when the renderer is built, so strict-mode
//! mistakes surface at startup rather than mid-conversation.

use crate::links::{render_bullets, DocumentLink};
use handlebars::Handlebars;
use helpdesk_core::config::ResponseSettings;
use helpdesk_core::{AppError, AppResult};
use serde_json::json;

const EXCERPT_TEMPLATE: &str = "I couldn't find a specific answer, but here's an excerpt from a document ({{link}}) that might help:\n\n{{excerpt}}...\n";

const DOCUMENT_TEMPLATE: &str = "I couldn't find a specific answer, but here's an excerpt from a document: \n{{answer}} \nAlso here are some documents that could be helpful:\n{{links}}";

/// Renders final answer texts.
pub struct ResponseRenderer {
    handlebars: Handlebars<'static>,
}

impl ResponseRenderer {
    /// Build a renderer from the built-in templates and any overrides.
    ///
    /// # Errors
    /// Returns `AppError::Template` if an override does not parse or does
    /// not render against the documented variables.
    pub fn new(settings: &ResponseSettings) -> AppResult<Self> {
        let mut handlebars = Handlebars::new();

        // Plain chat text, and `<uri|title>` markup must survive as-is
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        let excerpt = settings.excerpt_template.as_deref().unwrap_or(EXCERPT_TEMPLATE);
        let document = settings.document_template.as_deref().unwrap_or(DOCUMENT_TEMPLATE);

        for (name, template) in [("excerpt", excerpt), ("document", document)] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| AppError::Template(format!("Failed to register {} template: {}", name, e)))?;
        }

        let renderer = Self { handlebars };

        let sample = DocumentLink::new("Sample", "https://example.com");
        renderer.excerpt_with_link("sample", &sample)?;
        renderer.document_answer("sample", std::slice::from_ref(&sample))?;

        Ok(renderer)
    }

    /// Render an ANSWER passage with its source link.
    pub fn excerpt_with_link(&self, excerpt: &str, link: &DocumentLink) -> AppResult<String> {
        let data = json!({
            "excerpt": excerpt,
            "link": link.markup(),
            "title": link.title,
            "uri": link.uri,
        });
        self.render("excerpt", &data)
    }

    /// Render a resolved DOCUMENT answer followed by reference links.
    /// The reference header is kept even when `links` is empty.
    pub fn document_answer(&self, answer: &str, links: &[DocumentLink]) -> AppResult<String> {
        let data = json!({
            "answer": answer,
            "links": render_bullets(links),
            "documents": links,
        });
        self.render("document", &data)
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> AppResult<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| AppError::Template(format!("Failed to render {} template: {}", name, e)))
    }
}
