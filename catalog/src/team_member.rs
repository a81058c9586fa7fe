//! Team-member document type.

use content_schema_core::{
    BlockStyle, Decorator, DocumentType, FieldSchema, FieldType, Ordering, PreviewSpec,
    RichTextSpec, SortDirection, ValidationRule,
};

/// People on the team page: name, role, headshot, and a short bio.
pub fn team_member() -> DocumentType {
    DocumentType::new("teamMember", "Team Member")
        .with_field(
            FieldSchema::string("name")
                .with_title("Name")
                .with_validation(ValidationRule::required("Name is required")),
        )
        .with_field(
            FieldSchema::string("role")
                .with_title("Role")
                .with_description("Job title shown under the name"),
        )
        .with_field(
            FieldSchema::new(
                "headshot",
                FieldType::Image {
                    hotspot: true,
                    fields: vec![FieldSchema::string("alt").with_title("Alt text")],
                },
            )
            .with_title("Headshot"),
        )
        .with_field(
            FieldSchema::new("bio", FieldType::RichText(bio_spec())).with_title("Bio"),
        )
        .with_field(
            FieldSchema::new("linkedIn", FieldType::Url).with_title("LinkedIn Profile"),
        )
        .with_preview(PreviewSpec::fields("name", Some("role")))
        .with_ordering(Ordering::new("nameAsc", "Name, A-Z").with_sort("name", SortDirection::Asc))
}

/// Bios stay simple: paragraphs with strong and emphasis marks only.
fn bio_spec() -> RichTextSpec {
    RichTextSpec::new(&[BlockStyle::Normal]).with_decorators(&[Decorator::Strong, Decorator::Em])
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_schema_core::validate_document_type;

    #[test]
    fn test_team_member_is_structurally_valid() {
        assert!(validate_document_type(&team_member()).is_empty());
    }

    #[test]
    fn test_team_member_preview_selects_name_and_role() {
        let preview = team_member().preview;
        assert_eq!(preview.title, "name");
        assert_eq!(preview.subtitle.as_deref(), Some("role"));
    }
}
