//! Search result types.
//!
//! The wire shape follows the Kendra-style query response used by the
//! help-desk search gateway (`ResultItems[].Type`, `DocumentExcerpt.Text`, ...).
//! Every field is optional on the wire; accessors treat blank values as absent.

use serde::{Deserialize, Serialize};

/// Kind of a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    /// A curated FAQ entry
    QuestionAnswer,

    /// A passage found inside a document
    Answer,

    /// A whole document
    Document,

    /// Any type this client does not handle
    #[serde(other)]
    Other,
}

impl ResultType {
    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuestionAnswer => "QUESTION_ANSWER",
            Self::Answer => "ANSWER",
            Self::Document => "DOCUMENT",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text field as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Backend confidence bucket for a hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAttributes {
    #[serde(rename = "ScoreConfidence")]
    pub score_confidence: String,
}

/// One ranked search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<TextField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_excerpt: Option<TextField>,

    #[serde(rename = "DocumentURI", default, skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_attributes: Option<ScoreAttributes>,
}

impl ResultItem {
    /// Create an item of the given type with no other fields set.
    pub fn new(result_type: ResultType) -> Self {
        Self {
            result_type: Some(result_type),
            ..Default::default()
        }
    }

    pub fn with_excerpt(mut self, text: impl Into<String>) -> Self {
        self.document_excerpt = Some(TextField::new(text));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(TextField::new(title));
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.document_uri = Some(uri.into());
        self
    }

    pub fn with_document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    pub fn with_confidence(mut self, confidence: impl Into<String>) -> Self {
        self.score_attributes = Some(ScoreAttributes {
            score_confidence: confidence.into(),
        });
        self
    }

    /// Excerpt text, if present and not blank.
    pub fn excerpt(&self) -> Option<&str> {
        non_blank(self.document_excerpt.as_ref().and_then(|t| t.text.as_deref()))
    }

    /// Document title, if present and not blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.document_title.as_ref().and_then(|t| t.text.as_deref()))
    }

    /// Document URI, if present and not blank.
    pub fn uri(&self) -> Option<&str> {
        non_blank(self.document_uri.as_deref())
    }

    /// Document identifier, if present and not blank.
    pub fn document_id(&self) -> Option<&str> {
        non_blank(self.document_id.as_deref())
    }

    /// Whether this item is of the given type.
    pub fn is(&self, result_type: ResultType) -> bool {
        self.result_type == Some(result_type)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Relevance-ranked response to one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "QueryId", default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    #[serde(rename = "ResultItems", default)]
    pub items: Vec<ResultItem>,
}

impl SearchResult {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self {
            query_id: None,
            items,
        }
    }

    /// The most relevant item.
    pub fn top(&self) -> Option<&ResultItem> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gateway_response() {
        let body = r#"{
            "QueryId": "q-1",
            "ResultItems": [
                {
                    "Id": "r-1",
                    "Type": "QUESTION_ANSWER",
                    "DocumentExcerpt": {"Text": "Go to settings > reset.", "Highlights": []},
                    "ScoreAttributes": {"ScoreConfidence": "HIGH"}
                },
                {
                    "Type": "DOCUMENT",
                    "DocumentId": "s3://docs/vpn.pdf",
                    "DocumentTitle": {"Text": "VPN guide"},
                    "DocumentURI": "https://docs.example.com/vpn.pdf"
                }
            ]
        }"#;

        let result: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.query_id.as_deref(), Some("q-1"));

        let top = result.top().unwrap();
        assert!(top.is(ResultType::QuestionAnswer));
        assert_eq!(top.excerpt(), Some("Go to settings > reset."));
        assert_eq!(
            top.score_attributes.as_ref().unwrap().score_confidence,
            "HIGH"
        );

        let doc = &result.items[1];
        assert!(doc.is(ResultType::Document));
        assert_eq!(doc.title(), Some("VPN guide"));
        assert_eq!(doc.document_id(), Some("s3://docs/vpn.pdf"));
        assert_eq!(doc.uri(), Some("https://docs.example.com/vpn.pdf"));
    }

    #[test]
    fn test_unknown_and_missing_types() {
        let body = r#"{"ResultItems": [{"Type": "SUGGESTION"}, {"DocumentId": "x"}]}"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.items[0].result_type, Some(ResultType::Other));
        assert_eq!(result.items[1].result_type, None);
    }

    #[test]
    fn test_missing_result_items() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.is_empty());
        assert!(result.top().is_none());
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let item = ResultItem::new(ResultType::Document)
            .with_title("   ")
            .with_document_id("")
            .with_excerpt("text");

        assert!(item.title().is_none());
        assert!(item.document_id().is_none());
        assert!(item.uri().is_none());
        assert_eq!(item.excerpt(), Some("text"));
    }

    #[test]
    fn test_result_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ResultType::QuestionAnswer).unwrap(),
            "\"QUESTION_ANSWER\""
        );
        assert_eq!(ResultType::Document.to_string(), "DOCUMENT");
    }
}
