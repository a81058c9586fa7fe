//! Blog-category document type.

use content_schema_core::{
    DocumentType, FieldSchema, FieldType, PreviewSpec, ValidationRule,
};

/// Categories for grouping blog posts.
pub fn blog_category() -> DocumentType {
    DocumentType::new("blogCategory", "Blog Category")
        .with_field(
            FieldSchema::string("title")
                .with_title("Title")
                .with_validation(ValidationRule::required("Title is required")),
        )
        .with_field(
            FieldSchema::new(
                "slug",
                FieldType::Slug {
                    source: "title".to_string(),
                    max_length: 96,
                },
            )
            .with_title("Slug")
            .with_validation(ValidationRule::required("Slug is required")),
        )
        .with_field(
            FieldSchema::text("description", Some(3))
                .with_title("Description")
                .with_description("Shown on the category landing page"),
        )
        .with_preview(PreviewSpec::fields("title", Some("description")))
}
