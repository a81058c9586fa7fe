//! Embeddable object types: YouTube videos and banners.
//!
//! Both are registered as their own types so rich-text bodies can reference
//! them by name.

use content_schema_core::{
    DocumentType, FieldSchema, FieldType, LinkPolicy, PreviewSpec, ValidationRule,
};

/// YouTube video embed: a required video URL and an optional caption.
pub fn you_tube() -> DocumentType {
    DocumentType::new("youTube", "YouTube Embed")
        .with_field(
            FieldSchema::new("url", FieldType::Url)
                .with_title("YouTube video URL")
                .with_validation(ValidationRule::required("A YouTube URL is required")),
        )
        .with_field(FieldSchema::string("caption").with_title("Caption"))
        .with_preview(PreviewSpec::fields("url", Some("caption")))
}

/// Promotional banner: heading, supporting text, image, and a call to
/// action with a validated link.
pub fn banner() -> DocumentType {
    DocumentType::new("banner", "Banner")
        .with_field(
            FieldSchema::string("heading")
                .with_title("Heading")
                .with_validation(ValidationRule::required("Heading is required")),
        )
        .with_field(
            FieldSchema::text("text", Some(3))
                .with_title("Text")
                .with_description("Supporting copy shown under the heading"),
        )
        .with_field(
            FieldSchema::new(
                "image",
                FieldType::Image {
                    hotspot: true,
                    fields: vec![FieldSchema::string("alt").with_title("Alt text")],
                },
            )
            .with_title("Image"),
        )
        .with_field(
            FieldSchema::string("link")
                .with_title("Link")
                .with_validation(ValidationRule::link(LinkPolicy::BodyText)),
        )
        .with_field(FieldSchema::string("ctaLabel").with_title("CTA Label"))
        .with_preview(PreviewSpec::fields("heading", Some("text")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_schema_core::{Severity, validate_document, validate_document_type};

    #[test]
    fn test_embed_types_are_structurally_valid() {
        assert!(validate_document_type(&you_tube()).is_empty());
        assert!(validate_document_type(&banner()).is_empty());
    }

    #[test]
    fn test_banner_link_uses_body_text_policy() {
        let doc = serde_json::json!({"heading": "Sale", "link": "/pricing"});
        assert!(validate_document(&banner(), &doc).is_empty());

        let doc = serde_json::json!({"heading": "Sale", "link": "not a url"});
        let issues = validate_document(&banner(), &doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }
}
