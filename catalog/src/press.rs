//! Press-release document type.

use content_schema_core::{
    DocumentType, FieldSchema, FieldType, InitialValue, META_DESCRIPTION_TOO_LONG,
    META_DESCRIPTION_TOO_SHORT, META_TITLE_TOO_LONG, Ordering, PreviewSpec, SortDirection,
    ValidationRule,
};

use crate::richtext::post_body_spec;

/// Press releases: full rich-text body, creation/publication timestamps, and
/// SEO metadata with soft length warnings.
pub fn press() -> DocumentType {
    DocumentType::new("press", "Press")
        .with_group("content", "Content")
        .with_group("meta", "Meta")
        .with_group("seo", "SEO")
        .with_field(FieldSchema::string("language").read_only().hidden())
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
            FieldSchema::text("postSummary", Some(4))
                .with_title("Post Summary")
                .with_description(
                    "A brief summary of the press release. This will be used as the preview text.",
                )
                .with_group("content"),
        )
        .with_field(
            FieldSchema::string("externalLink")
                .with_title("External Story Link")
                .with_group("content"),
        )
        .with_field(
            FieldSchema::new("postBody", FieldType::RichText(post_body_spec()))
                .with_title("Post Body")
                .with_description(
                    "The main content of the press release. You can add text, images, videos, \
                     and custom components.",
                )
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
        .with_preview(PreviewSpec::fields("title", Some("postSummary")))
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
    use content_schema_core::{Severity, validate_document, validate_document_type};

    #[test]
    fn test_press_is_structurally_valid() {
        assert!(validate_document_type(&press()).is_empty());
    }

    #[test]
    fn test_press_seo_warnings_do_not_block_save() {
        let doc = serde_json::json!({
            "title": "Launch",
            "slug": "launch",
            "metaTitle": "x".repeat(80),
            "metaDescription": "short",
        });

        let issues = validate_document(&press(), &doc);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_press_requires_title_and_slug() {
        let issues = validate_document(&press(), &serde_json::json!({}));
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.field.as_str())
            .collect();
        assert_eq!(errors, vec!["title", "slug"]);
    }

    #[test]
    fn test_press_orderings_cover_publication_date() {
        let doc_type = press();
        let names: Vec<_> = doc_type.orderings.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["postDateDesc", "postDateAsc"]);
        assert!(
            doc_type
                .orderings
                .iter()
                .all(|o| o.by[0].field == "publishedOn")
        );
    }
}
