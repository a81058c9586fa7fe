//! Core descriptor types and validation primitives for CMS content schemas.
//!
//! This crate defines the foundational types for modeling document types
//! consumed by a headless CMS host:
//!
//! - [`DocumentType`] — top-level descriptor for a content shape (fields,
//!   groups, preview projection, orderings).
//! - [`FieldSchema`] / [`FieldType`] — one attribute of a document type,
//!   drawn from a fixed type vocabulary.
//! - [`RichTextSpec`] / [`BlockContent`] — the embedded formatted-text model
//!   (blocks, spans, inline objects) declared per rich-text field.
//! - [`TypeRegistry`] — the ordered type collection handed to the host for
//!   registration.
//!
//! Validation is two-layered: pure field validators ([`validate_link`],
//! [`validate_meta_description`], [`validate_required`]) evaluated per value
//! with [`Validity`] outcomes, and structural checks ([`validate_registry`],
//! [`validate_document_type`]) that catch definition-time errors such as
//! duplicate names. Preview projection ([`PreviewSpec::prepare`],
//! [`plain_text_excerpt`]) maps raw document snapshots to title/subtitle
//! pairs for list displays.
//!
//! # Example
//!
//! ```
//! use content_schema_core::*;
//!
//! let faq = DocumentType::new("faq", "FAQ")
//!     .with_field(
//!         FieldSchema::string("question")
//!             .with_title("Question")
//!             .with_validation(ValidationRule::required("Question is required")),
//!     )
//!     .with_field(FieldSchema::new(
//!         "answer",
//!         FieldType::RichText(RichTextSpec::new(&[BlockStyle::Normal])),
//!     ))
//!     .with_preview(PreviewSpec::rich_text_excerpt("question", "answer"));
//!
//! let registry = TypeRegistry::new().with_type(faq);
//! assert!(validate_registry(&registry).is_empty());
//!
//! let issues = validate_document(
//!     registry.get("faq").unwrap(),
//!     &serde_json::json!({"question": ""}),
//! );
//! assert_eq!(issues[0].message, "Question is required");
//! ```

mod portable_text;
mod preview;
mod registry;
mod types;
mod validate;

pub use portable_text::{
    AnnotationSpec, BannerEmbed, BlockContent, BlockStyle, CodeEmbed, Decorator, EmbedKind,
    ImageBlock, ImageLink, ListKind, MarkDef, RichTextSpec, Span, SpanChild, TableBlock,
    TableRow, TextBlock, YouTubeEmbed,
};
pub use preview::{EXCERPT_MAX_CHARS, Preview, PreviewSpec, Projection, plain_text_excerpt};
pub use registry::TypeRegistry;
pub use types::{
    DocumentType, FieldGroup, FieldSchema, FieldType, InitialValue, Ordering,
    SCHEMA_CONTRACT_VERSION, SortDirection, SortSpec,
};
pub use validate::{
    BODY_LINK_MESSAGE, FieldIssue, IMAGE_LINK_MESSAGE, LinkPolicy, META_DESCRIPTION_TOO_LONG,
    META_DESCRIPTION_TOO_SHORT, META_TITLE_TOO_LONG, SchemaError, Severity, ValidationRule,
    Validity, validate_document, validate_document_type, validate_length_range, validate_link,
    validate_max_length, validate_meta_description, validate_meta_title, validate_registry,
    validate_required,
};
