//! Blog-post document type.

use content_schema_core::{
    DocumentType, FieldSchema, FieldType, InitialValue, META_DESCRIPTION_TOO_LONG,
    META_DESCRIPTION_TOO_SHORT, META_TITLE_TOO_LONG, Ordering, PreviewSpec, SortDirection,
    ValidationRule,
};

use crate::richtext::post_body_spec;

/// Blog posts share the press-release body vocabulary and SEO rules, plus an
/// author, category, and hero image.
pub fn blog_post() -> DocumentType {
    DocumentType::new("blogPost", "Blog Post")
        .with_group("content", "Content")
        .with_group("meta", "Meta")
        .with_group("seo", "SEO")
        .with_field(
            FieldSchema::string("title")
                .with_title("Title")
                .with_validation(ValidationRule::required("Title is required"))
                .with_group("content"),
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
            .with_description(
                "The URL-friendly version of the title. This will be used in the post URL.",
            )
            .with_validation(ValidationRule::required("Slug is required"))
            .with_group("content"),
        )
        .with_field(
            FieldSchema::string("author")
                .with_title("Author")
                .with_group("content"),
        )
        .with_field(
            FieldSchema::string("category")
                .with_title("Category")
                .with_description("Name of the blog category this post belongs to")
                .with_group("content"),
        )
        .with_field(
            FieldSchema::text("excerpt", Some(3))
                .with_title("Excerpt")
                .with_description("A short teaser shown in post listings")
                .with_group("content"),
        )
        .with_field(
            FieldSchema::new(
                "mainImage",
                FieldType::Image {
                    hotspot: true,
                    fields: vec![FieldSchema::string("alt").with_title("Alt text")],
                },
            )
            .with_title("Main Image")
            .with_group("content"),
        )
        .with_field(
            FieldSchema::new("body", FieldType::RichText(post_body_spec()))
                .with_title("Body")
                .with_group("content"),
        )
        .with_field(
            FieldSchema::new("createdOn", FieldType::Datetime)
                .with_title("Created On")
                .with_initial(InitialValue::Now)
                .read_only()
                .with_group("meta"),
        )
        .with_field(
            FieldSchema::new("publishedOn", FieldType::Datetime)
                .with_title("Published On")
                .with_group("meta"),
        )
        .with_field(
            FieldSchema::string("metaTitle")
                .with_title("Meta Title")
                .with_description("Recommended length: 60 characters or less")
                .with_validation(ValidationRule::max_length(60, META_TITLE_TOO_LONG))
                .with_group("seo"),
        )
        .with_field(
            FieldSchema::text("metaDescription", None)
                .with_title("Meta Description")
                .with_description("Recommended length: between 120 and 160 characters")
                .with_validation(ValidationRule::length_range(
                    120,
                    160,
                    META_DESCRIPTION_TOO_SHORT,
                    META_DESCRIPTION_TOO_LONG,
                ))
                .with_group("seo"),
        )
        .with_preview(PreviewSpec::fields("title", Some("excerpt")))
        .with_ordering(
            Ordering::new("postDateDesc", "Post Date, New")
                .with_sort("publishedOn", SortDirection::Desc),
        )
        .with_ordering(
            Ordering::new("postDateAsc", "Post Date, Old")
                .with_sort("publishedOn", SortDirection::Asc),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_schema_core::validate_document_type;

    #[test]
    fn test_blog_post_is_structurally_valid() {
        assert!(validate_document_type(&blog_post()).is_empty());
    }

    #[test]
    fn test_blog_post_body_admits_embeds() {
        let doc_type = blog_post();
        let Some(FieldSchema {
            field_type: FieldType::RichText(spec),
            ..
        }) = doc_type.field("body")
        else {
            panic!("body should be a rich-text field");
        };
        assert_eq!(spec.embeds.len(), 5);
    }
}
