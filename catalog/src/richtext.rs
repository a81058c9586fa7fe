//! Shared rich-text vocabularies and annotation builders.

use content_schema_core::{
    AnnotationSpec, BlockStyle, Decorator, EmbedKind, FieldSchema, FieldType, InitialValue,
    LinkPolicy, RichTextSpec, ValidationRule,
};

/// Link annotation with a validated href and a target select.
///
/// Body text and image links carry different matching policies; see
/// [`LinkPolicy`] for the distinction.
pub(crate) fn link_annotation(policy: LinkPolicy) -> AnnotationSpec {
    AnnotationSpec {
        name: "link".to_string(),
        title: "Link".to_string(),
        fields: vec![
            FieldSchema::string("href")
                .with_title("URL")
                .with_validation(ValidationRule::link(policy)),
            FieldSchema::string("target")
                .with_title("Target")
                .with_initial(InitialValue::String("_self".to_string())),
        ],
    }
}

/// Metadata fields for inline images: caption, alt text, and a validated
/// click-through link.
pub(crate) fn image_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("caption").with_title("Caption"),
        FieldSchema::string("alt").with_title("Alt text"),
        FieldSchema::new(
            "link",
            FieldType::Object {
                fields: vec![
                    FieldSchema::string("href")
                        .with_title("URL")
                        .with_validation(ValidationRule::link(LinkPolicy::ImageLink)),
                    FieldSchema::string("target")
                        .with_title("Target")
                        .with_initial(InitialValue::String("_self".to_string())),
                ],
            },
        )
        .with_title("Image Link"),
    ]
}

/// Full post-body vocabulary: all heading levels, quotes, code, images with
/// metadata, and the embedded object kinds the host renders natively.
pub(crate) fn post_body_spec() -> RichTextSpec {
    RichTextSpec::new(&[
        BlockStyle::Normal,
        BlockStyle::H2,
        BlockStyle::H3,
        BlockStyle::H4,
        BlockStyle::H5,
        BlockStyle::H6,
        BlockStyle::Blockquote,
    ])
    .with_decorators(&[Decorator::Strong, Decorator::Em, Decorator::Code])
    .with_annotation(link_annotation(LinkPolicy::BodyText))
    .with_embed(EmbedKind::Image {
        hotspot: true,
        fields: image_fields(),
    })
    .with_embed(EmbedKind::YouTube)
    .with_embed(EmbedKind::Banner)
    .with_embed(EmbedKind::CodeEmbed)
    .with_embed(EmbedKind::Table)
}
