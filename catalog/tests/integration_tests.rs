use content_schema_catalog::{faq, press, schema_types};
use content_schema_core::{
    BODY_LINK_MESSAGE, IMAGE_LINK_MESSAGE, LinkPolicy, Severity, Validity, validate_document,
    validate_link, validate_registry,
};

#[test]
fn registry_contains_all_types_in_registration_order() {
    let registry = schema_types();
    assert_eq!(
        registry.names(),
        vec![
            "blogPost",
            "blogCategory",
            "teamMember",
            "testimonial",
            "faq",
            "youTube",
            "banner",
            "press",
        ]
    );
}

#[test]
fn registry_passes_structural_validation() {
    let errors = validate_registry(&schema_types());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn faq_preview_derives_subtitle_from_answer() {
    let doc = serde_json::json!({
        "question": "What is the refund policy?",
        "answer": [
            {"_type": "block", "children": [
                {"_type": "span", "text": "Hello "},
                {"_type": "span", "text": "world"},
            ]},
        ],
    });

    let preview = faq().preview.prepare(&doc);
    assert_eq!(preview.title, "What is the refund policy?");
    assert_eq!(preview.subtitle, "Hello world...");
}

#[test]
fn faq_preview_handles_missing_answer() {
    let doc = serde_json::json!({"question": "Q"});
    let preview = faq().preview.prepare(&doc);
    assert_eq!(preview.subtitle, "");
}

#[test]
fn faq_save_is_blocked_without_question_or_answer() {
    let issues = validate_document(&faq(), &serde_json::json!({"answer": []}));
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.severity == Severity::Error));
    assert_eq!(issues[0].message, "Question is required");
    assert_eq!(issues[1].message, "Answer is required");
}

#[test]
fn body_and_image_link_policies_diverge_on_relative_paths() {
    // The body policy allows root-relative paths; the image policy does not.
    assert_eq!(validate_link(Some("/team"), LinkPolicy::BodyText), Validity::Valid);
    assert_eq!(
        validate_link(Some("/team"), LinkPolicy::ImageLink),
        Validity::Invalid(IMAGE_LINK_MESSAGE.to_string())
    );
    assert_eq!(
        validate_link(Some("not a url"), LinkPolicy::BodyText),
        Validity::Invalid(BODY_LINK_MESSAGE.to_string())
    );
}

#[test]
fn press_descriptor_serializes_to_host_format() {
    let json = serde_json::to_value(press()).unwrap();

    assert_eq!(json["name"], "press");
    assert_eq!(json["preview"]["title"], "title");
    assert_eq!(json["preview"]["subtitle"], "postSummary");

    let fields = json["fields"].as_array().unwrap();
    let slug = fields.iter().find(|f| f["name"] == "slug").unwrap();
    assert_eq!(slug["type"], "slug");
    assert_eq!(slug["maxLength"], 96);
    assert_eq!(slug["validation"]["rule"], "required");

    let language = fields.iter().find(|f| f["name"] == "language").unwrap();
    assert_eq!(language["readOnly"], true);
    assert_eq!(language["hidden"], true);

    let created = fields.iter().find(|f| f["name"] == "createdOn").unwrap();
    assert_eq!(created["initialValue"]["kind"], "now");
}

#[test]
fn registry_roundtrips_through_json() {
    let registry = schema_types();
    let json = serde_json::to_string(&registry).unwrap();
    let back: content_schema_core::TypeRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, registry);
}
