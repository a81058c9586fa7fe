//! Frequently-asked-question document type.

use content_schema_core::{
    AnnotationSpec, BlockStyle, Decorator, DocumentType, FieldSchema, FieldType, InitialValue,
    ListKind, PreviewSpec, RichTextSpec, ValidationRule,
};

/// FAQ entries: a required question and a required rich-text answer.
///
/// The list preview shows the question verbatim and derives the subtitle
/// from the answer's plain text.
pub fn faq() -> DocumentType {
    DocumentType::new("faq", "FAQ")
        .with_field(
            FieldSchema::string("question")
                .with_title("Question")
                .with_description("The frequently asked question")
                .with_validation(ValidationRule::required("Question is required")),
        )
        .with_field(
            FieldSchema::new("answer", FieldType::RichText(answer_spec()))
                .with_title("Answer")
                .with_description("The answer to the question")
                .with_validation(ValidationRule::required("Answer is required")),
        )
        .with_preview(PreviewSpec::rich_text_excerpt("question", "answer"))
}

/// Answers are deliberately plain: normal paragraphs, simple lists, strong
/// and emphasis marks, and links that open in a new tab by default.
fn answer_spec() -> RichTextSpec {
    RichTextSpec::new(&[BlockStyle::Normal])
        .with_lists(&[ListKind::Bullet, ListKind::Number])
        .with_decorators(&[Decorator::Strong, Decorator::Em])
        .with_annotation(AnnotationSpec {
            name: "link".to_string(),
            title: "Link".to_string(),
            fields: vec![
                FieldSchema::new("href", FieldType::Url).with_title("URL"),
                FieldSchema::new("blank", FieldType::Boolean)
                    .with_title("Open in new tab")
                    .with_initial(InitialValue::Boolean(true)),
            ],
        })
}
