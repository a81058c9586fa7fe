//! Preview projections for list and reference displays.
//!
//! A preview maps a raw document snapshot to a short title/subtitle pair.
//! The simple projection reads both values verbatim from named fields; the
//! rich-text projection derives the subtitle from a formatted-text value by
//! flattening its blocks to plain text.

use serde::{Deserialize, Serialize};

use crate::portable_text::{BlockContent, SpanChild};

/// Maximum excerpt length before the ellipsis suffix.
pub const EXCERPT_MAX_CHARS: usize = 50;

/// Title/subtitle pair shown in list and reference UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub title: String,
    pub subtitle: String,
}

/// How the subtitle is derived from the selected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Projection {
    /// Subtitle is the selected field's string value.
    #[default]
    Fields,
    /// Subtitle is a plain-text excerpt of the selected rich-text field.
    RichTextExcerpt,
}

/// Preview projection declared on a document type.
///
/// `title` and `subtitle` name the fields to select from the document
/// snapshot; `projection` says how the subtitle value is derived.
///
/// # Examples
///
/// ```
/// use content_schema_core::PreviewSpec;
///
/// let spec = PreviewSpec::fields("title", Some("postSummary"));
/// let doc = serde_json::json!({"title": "Launch", "postSummary": "We shipped."});
/// let preview = spec.prepare(&doc);
/// assert_eq!(preview.title, "Launch");
/// assert_eq!(preview.subtitle, "We shipped.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSpec {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub projection: Projection,
}

impl PreviewSpec {
    /// Creates a simple projection reading both values verbatim.
    pub fn fields(title: &str, subtitle: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.map(String::from),
            projection: Projection::Fields,
        }
    }

    /// Creates a projection deriving the subtitle from a rich-text field.
    pub fn rich_text_excerpt(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            projection: Projection::RichTextExcerpt,
        }
    }

    /// Projects a raw document snapshot to a [`Preview`].
    ///
    /// Missing or non-string selections resolve to empty strings; a missing
    /// or empty rich-text value yields an empty subtitle.
    pub fn prepare(&self, doc: &serde_json::Value) -> Preview {
        let title = doc
            .get(&self.title)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        let subtitle = match &self.subtitle {
            None => String::new(),
            Some(field) => match self.projection {
                Projection::Fields => doc
                    .get(field)
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                Projection::RichTextExcerpt => {
                    let blocks: Vec<BlockContent> = doc
                        .get(field)
                        .cloned()
                        .and_then(|value| serde_json::from_value(value).ok())
                        .unwrap_or_default();
                    plain_text_excerpt(&blocks)
                }
            },
        };

        Preview { title, subtitle }
    }
}

/// Derives a plain-text excerpt from a rich-text value.
///
/// Text blocks are flattened to their span text, blocks are joined with a
/// single space, the result is cut at [`EXCERPT_MAX_CHARS`] characters, and
/// an ellipsis is appended unconditionally — even when the text is already
/// shorter than the cutoff. An empty block sequence yields an empty string.
///
/// # Examples
///
/// ```
/// use content_schema_core::{plain_text_excerpt, TextBlock, BlockContent};
///
/// let blocks = vec![BlockContent::Block(TextBlock::from_text("Hello world"))];
/// assert_eq!(plain_text_excerpt(&blocks), "Hello world...");
/// assert_eq!(plain_text_excerpt(&[]), "");
/// ```
pub fn plain_text_excerpt(blocks: &[BlockContent]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let text = blocks
        .iter()
        .filter_map(|content| match content {
            BlockContent::Block(block) => Some(block),
            _ => None,
        })
        .map(|block| {
            block
                .children
                .iter()
                .filter_map(|child| match child {
                    SpanChild::Span(span) => Some(span.text.as_str()),
                    _ => None,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut excerpt: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
