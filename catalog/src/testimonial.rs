//! Testimonial document type.

use content_schema_core::{
    DocumentType, FieldSchema, FieldType, InitialValue, PreviewSpec, ValidationRule,
};

/// Customer quotes for landing pages.
pub fn testimonial() -> DocumentType {
    DocumentType::new("testimonial", "Testimonial")
        .with_field(
            FieldSchema::text("quote", Some(4))
                .with_title("Quote")
                .with_validation(ValidationRule::required("Quote is required")),
        )
        .with_field(
            FieldSchema::string("authorName")
                .with_title("Author Name")
                .with_validation(ValidationRule::required("Author name is required")),
        )
        .with_field(FieldSchema::string("authorTitle").with_title("Author Title"))
        .with_field(FieldSchema::string("company").with_title("Company"))
        .with_field(
            FieldSchema::new(
                "photo",
                FieldType::Image {
                    hotspot: true,
                    fields: vec![FieldSchema::string("alt").with_title("Alt text")],
                },
            )
            .with_title("Photo"),
        )
        .with_field(
            FieldSchema::new("featured", FieldType::Boolean)
                .with_title("Featured")
                .with_description("Featured testimonials appear on the home page")
                .with_initial(InitialValue::Boolean(false)),
        )
        .with_preview(PreviewSpec::fields("authorName", Some("company")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_schema_core::{Severity, validate_document, validate_document_type};

    #[test]
    fn test_testimonial_is_structurally_valid() {
        assert!(validate_document_type(&testimonial()).is_empty());
    }

    #[test]
    fn test_testimonial_requires_quote_and_author() {
        let issues = validate_document(&testimonial(), &serde_json::json!({}));
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.field.as_str())
            .collect();
        assert_eq!(errors, vec!["quote", "authorName"]);
    }
}
