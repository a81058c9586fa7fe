//! Rich-text document model and per-field block vocabulary.
//!
//! Formatted text is a sequence of typed blocks tagged on `_type`: paragraph
//! blocks composed of inline spans, plus embedded objects (images, video
//! references, banners, code, tables). [`RichTextSpec`] is the declaration
//! side: it states which styles, lists, decorators, annotations, and embeds a
//! rich-text field admits. [`BlockContent`] is the instance side: the shape
//! of the values the host hands back for preview projection.

use serde::{Deserialize, Serialize};

use crate::types::FieldSchema;

/// Paragraph style of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
}

/// List rendering of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// Inline decorator applied to spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decorator {
    Strong,
    Em,
    Code,
}

/// Inline annotation declared on a rich-text field (e.g. a link with an
/// href and target). The `fields` carry their own validation rules, which
/// the host evaluates when the annotation is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

/// Embedded object kind admitted inside a rich-text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EmbedKind {
    /// Inline image with hotspot cropping and nested metadata fields.
    Image {
        hotspot: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<FieldSchema>,
    },
    /// Embedded YouTube video reference.
    YouTube,
    /// Embedded banner reference.
    Banner,
    /// Embedded code block.
    CodeEmbed,
    /// Embedded table.
    Table,
}

/// Block vocabulary declared for one rich-text field.
///
/// # Examples
///
/// ```
/// use content_schema_core::{BlockStyle, Decorator, ListKind, RichTextSpec};
///
/// let spec = RichTextSpec::new(&[BlockStyle::Normal])
///     .with_lists(&[ListKind::Bullet, ListKind::Number])
///     .with_decorators(&[Decorator::Strong, Decorator::Em]);
/// assert_eq!(spec.styles, vec![BlockStyle::Normal]);
/// assert_eq!(spec.lists.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextSpec {
    pub styles: Vec<BlockStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<ListKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<EmbedKind>,
}

impl RichTextSpec {
    /// Creates a spec admitting the given paragraph styles.
    pub fn new(styles: &[BlockStyle]) -> Self {
        Self {
            styles: styles.to_vec(),
            lists: Vec::new(),
            decorators: Vec::new(),
            annotations: Vec::new(),
            embeds: Vec::new(),
        }
    }

    /// Admits the given list kinds.
    pub fn with_lists(mut self, lists: &[ListKind]) -> Self {
        self.lists.extend_from_slice(lists);
        self
    }

    /// Admits the given inline decorators.
    pub fn with_decorators(mut self, decorators: &[Decorator]) -> Self {
        self.decorators.extend_from_slice(decorators);
        self
    }

    /// Declares an inline annotation.
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Admits an embedded object kind.
    pub fn with_embed(mut self, embed: EmbedKind) -> Self {
        self.embeds.push(embed);
        self
    }
}

/// One entry of a rich-text value, tagged on `_type`.
///
/// Unrecognized block types deserialize as [`BlockContent::Unknown`] so
/// host-side extensions do not break preview projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum BlockContent {
    Block(TextBlock),
    Image(ImageBlock),
    #[serde(rename = "youTube")]
    YouTube(YouTubeEmbed),
    Banner(BannerEmbed),
    CodeEmbed(CodeEmbed),
    Table(TableBlock),
    #[serde(other)]
    Unknown,
}

/// Paragraph-level block of inline children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<ListKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default)]
    pub children: Vec<SpanChild>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// Creates a normal-style block from plain text, split into one span.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_schema_core::TextBlock;
    ///
    /// let block = TextBlock::from_text("Hello world");
    /// assert_eq!(block.children.len(), 1);
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self {
            children: vec![SpanChild::Span(Span {
                text: text.to_string(),
                marks: Vec::new(),
            })],
            ..Default::default()
        }
    }
}

/// Inline child of a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum SpanChild {
    Span(Span),
    #[serde(other)]
    Unknown,
}

/// Inline text run with decorator and annotation marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    /// Decorator names or mark-definition keys applied to this run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<String>,
}

/// Annotation instance referenced from span marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank: Option<bool>,
}

/// Inline image instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ImageLink>,
}

/// Click-through link attached to an inline image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Embedded YouTube video instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YouTubeEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embedded banner reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BannerEmbed {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Embedded code block instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodeEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Embedded table instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableBlock {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<TableRow>,
}

/// One row of an embedded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<String>,
}
