//! Descriptor type definitions for content-schema modeling.
//!
//! This module defines the data model used to describe document types for a
//! headless CMS host: field descriptors with a fixed type vocabulary,
//! grouping metadata, initial values, and named sort orderings. The types are
//! designed for serialization with [`serde`] and produce the camelCase
//! descriptor format the host consumes.

use serde::{Deserialize, Serialize};

use crate::portable_text::RichTextSpec;
use crate::preview::PreviewSpec;
use crate::validate::ValidationRule;

/// Version of the schema contract (semver).
///
/// Embedded in every [`TypeRegistry`](crate::TypeRegistry) so the host can
/// track compatibility across descriptor versions.
pub const SCHEMA_CONTRACT_VERSION: &str = "1.0.0";

fn is_false(value: &bool) -> bool {
    !*value
}

/// Semantic type of a field, drawn from a fixed vocabulary.
///
/// Serialized with a flattened `type` tag, so a string field renders as
/// `{"name": "title", "type": "string"}` on the wire.
///
/// # Examples
///
/// ```
/// use content_schema_core::FieldType;
///
/// let slug = FieldType::Slug { source: "title".into(), max_length: 96 };
/// assert!(matches!(slug, FieldType::Slug { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldType {
    /// Short single-line text.
    String,
    /// Multi-line text with an optional editor row hint.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rows: Option<u32>,
    },
    /// URL-friendly identifier derived from another field.
    #[serde(rename_all = "camelCase")]
    Slug { source: String, max_length: u32 },
    /// Absolute URL.
    Url,
    /// ISO-8601 date-time.
    Datetime,
    /// Boolean toggle.
    Boolean,
    /// Image with optional hotspot cropping and nested metadata fields.
    Image {
        #[serde(default, skip_serializing_if = "is_false")]
        hotspot: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<FieldSchema>,
    },
    /// Nested object composed of further fields.
    Object { fields: Vec<FieldSchema> },
    /// Formatted text composed of typed blocks and inline objects.
    RichText(RichTextSpec),
}

/// Initial value assigned when the host creates a new document.
///
/// [`InitialValue::Now`] is resolved to an RFC 3339 UTC timestamp at
/// document-creation time; the host is responsible for invoking
/// [`resolve`](InitialValue::resolve) at that moment rather than at schema
/// registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum InitialValue {
    Boolean(bool),
    String(String),
    /// Wall-clock time at document creation.
    Now,
}

impl InitialValue {
    /// Resolves the initial value to a concrete JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_schema_core::InitialValue;
    ///
    /// assert_eq!(InitialValue::Boolean(true).resolve(), serde_json::json!(true));
    /// assert!(InitialValue::Now.resolve().is_string());
    /// ```
    pub fn resolve(&self) -> serde_json::Value {
        match self {
            InitialValue::Boolean(value) => serde_json::Value::Bool(*value),
            InitialValue::String(value) => serde_json::Value::String(value.clone()),
            InitialValue::Now => serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// Descriptor for one attribute of a document type.
///
/// Use the constructor methods [`string`](FieldSchema::string),
/// [`text`](FieldSchema::text), and [`new`](FieldSchema::new), then chain
/// builder methods like [`with_title`](FieldSchema::with_title) and
/// [`with_validation`](FieldSchema::with_validation).
///
/// # Examples
///
/// ```
/// use content_schema_core::{FieldSchema, ValidationRule};
///
/// let title = FieldSchema::string("title")
///     .with_title("Title")
///     .with_validation(ValidationRule::required("Title is required"))
///     .with_group("content");
/// assert_eq!(title.name, "title");
/// assert!(title.validation.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Field name, unique within its document type.
    pub name: String,
    /// Display title shown in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Help text shown below the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Semantic type of the field.
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Group tab this field appears under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Field cannot be edited by hand.
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,
    /// Field is not shown in the editor.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Value assigned at document creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<InitialValue>,
    /// Validation rule evaluated by the host on change and save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl FieldSchema {
    /// Creates a field with the given name and type.
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            description: None,
            field_type,
            group: None,
            read_only: false,
            hidden: false,
            initial_value: None,
            validation: None,
        }
    }

    /// Creates a short-text field.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_schema_core::{FieldSchema, FieldType};
    ///
    /// let field = FieldSchema::string("externalLink");
    /// assert_eq!(field.field_type, FieldType::String);
    /// ```
    pub fn string(name: &str) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Creates a multi-line text field with an optional row hint.
    pub fn text(name: &str, rows: Option<u32>) -> Self {
        Self::new(name, FieldType::Text { rows })
    }

    /// Adds a display title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Assigns the field to a group tab.
    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    /// Marks the field as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Hides the field from the editor.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the initial value.
    pub fn with_initial(mut self, initial: InitialValue) -> Self {
        self.initial_value = Some(initial);
        self
    }

    /// Attaches a validation rule.
    pub fn with_validation(mut self, rule: ValidationRule) -> Self {
        self.validation = Some(rule);
        self
    }
}

/// Named group tab for organizing fields in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub name: String,
    pub title: String,
}

/// Sort direction for an ordering field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One field of a named sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Named sort specification over one or more fields.
///
/// # Examples
///
/// ```
/// use content_schema_core::{Ordering, SortDirection};
///
/// let ordering = Ordering::new("postDateDesc", "Post Date, New")
///     .with_sort("publishedOn", SortDirection::Desc);
/// assert_eq!(ordering.by.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    pub name: String,
    pub title: String,
    pub by: Vec<SortSpec>,
}

impl Ordering {
    /// Creates an ordering with no sort fields yet.
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            by: Vec::new(),
        }
    }

    /// Appends a sort field.
    pub fn with_sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.by.push(SortSpec {
            field: field.to_string(),
            direction,
        });
        self
    }
}

/// Complete descriptor for one document type.
///
/// This is the primary type in the crate. It describes a named content shape
/// managed by the external CMS host: ordered fields, group tabs, a preview
/// projection for list UIs, and named orderings.
///
/// # Examples
///
/// ```
/// use content_schema_core::*;
///
/// let doc_type = DocumentType::new("faq", "FAQ")
///     .with_field(
///         FieldSchema::string("question")
///             .with_validation(ValidationRule::required("Question is required")),
///     )
///     .with_preview(PreviewSpec::fields("question", None));
///
/// assert_eq!(doc_type.name, "faq");
/// assert!(doc_type.field("question").is_some());
/// assert!(doc_type.field("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    /// Unique type name (string key used by the host).
    pub name: String,
    /// Display title.
    pub title: String,
    /// Group tabs declared for this type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,
    /// Ordered field descriptors.
    pub fields: Vec<FieldSchema>,
    /// Projection used for list and reference displays.
    pub preview: PreviewSpec,
    /// Named sort specifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orderings: Vec<Ordering>,
}

impl DocumentType {
    /// Creates a document type with the given name and title.
    ///
    /// The preview defaults to projecting a `title` field; override it with
    /// [`with_preview`](DocumentType::with_preview).
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            groups: Vec::new(),
            fields: Vec::new(),
            preview: PreviewSpec::fields("title", None),
            orderings: Vec::new(),
        }
    }

    /// Declares a group tab.
    pub fn with_group(mut self, name: &str, title: &str) -> Self {
        self.groups.push(FieldGroup {
            name: name.to_string(),
            title: title.to_string(),
        });
        self
    }

    /// Appends a field descriptor.
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the preview projection.
    pub fn with_preview(mut self, preview: PreviewSpec) -> Self {
        self.preview = preview;
        self
    }

    /// Appends a named ordering.
    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.orderings.push(ordering);
        self
    }

    /// Finds a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Gets all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Checks whether a group name is declared on this type.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_schema_builder() {
        let field = FieldSchema::string("metaTitle")
            .with_title("Meta Title")
            .with_description("Recommended length: 60 characters or less")
            .with_group("seo");

        assert_eq!(field.name, "metaTitle");
        assert_eq!(field.title.as_deref(), Some("Meta Title"));
        assert_eq!(field.group.as_deref(), Some("seo"));
        assert!(!field.read_only);
        assert!(field.validation.is_none());
    }

    #[test]
    fn test_hidden_read_only_flags() {
        let field = FieldSchema::string("language").read_only().hidden();
        assert!(field.read_only);
        assert!(field.hidden);
    }

    #[test]
    fn test_initial_value_resolution() {
        assert_eq!(
            InitialValue::String("_self".into()).resolve(),
            serde_json::json!("_self")
        );
        assert_eq!(InitialValue::Boolean(true).resolve(), serde_json::json!(true));

        let now = InitialValue::Now.resolve();
        let raw = now.as_str().expect("timestamp should be a string");
        assert!(chrono::DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn test_document_type_field_lookup() {
        let doc_type = DocumentType::new("press", "Press")
            .with_field(FieldSchema::string("title"))
            .with_field(FieldSchema::text("postSummary", Some(4)));

        assert_eq!(doc_type.field_names(), vec!["title", "postSummary"]);
        assert!(doc_type.field("title").is_some());
        assert!(doc_type.field("slug").is_none());
    }

    #[test]
    fn test_field_serializes_with_flattened_type_tag() {
        let field = FieldSchema::new(
            "slug",
            FieldType::Slug {
                source: "title".into(),
                max_length: 96,
            },
        );
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["name"], "slug");
        assert_eq!(json["type"], "slug");
        assert_eq!(json["source"], "title");
        assert_eq!(json["maxLength"], 96);
    }

    #[test]
    fn test_field_roundtrips_through_json() {
        let field = FieldSchema::text("metaDescription", None)
            .with_group("seo")
            .with_initial(InitialValue::Now);

        let json = serde_json::to_string(&field).unwrap();
        let back: FieldSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
