//! Field validators, declarative validation rules, and structural checks.
//!
//! Two layers live here. The pure field validators ([`validate_link`],
//! [`validate_meta_description`], [`validate_required`]) map a candidate
//! value to a [`Validity`] with at most one human-readable message; they are
//! what the host evaluates on every change and save attempt. The structural
//! checks ([`validate_registry`], [`validate_document_type`]) catch
//! definition-time errors such as duplicate type or field names before the
//! registry is handed to the host.
//!
//! # Examples
//!
//! ```
//! use content_schema_core::{validate_link, LinkPolicy, Validity};
//!
//! assert_eq!(validate_link(Some("/about"), LinkPolicy::BodyText), Validity::Valid);
//! assert_eq!(validate_link(None, LinkPolicy::BodyText), Validity::Valid);
//! assert!(validate_link(Some("not a url"), LinkPolicy::BodyText).blocks_save());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::TypeRegistry;
use crate::types::{DocumentType, FieldSchema};

/// Rejection message for body-text links.
pub const BODY_LINK_MESSAGE: &str =
    "Please enter a valid URL, relative path (starting with /), mailto: or tel: link";

/// Rejection message for image links.
pub const IMAGE_LINK_MESSAGE: &str = "Please enter a valid URL, mailto: or tel: link";

/// Warning for meta descriptions under the recommended minimum.
pub const META_DESCRIPTION_TOO_SHORT: &str =
    "Meta description should have at least 120 characters";

/// Warning for meta descriptions over the recommended maximum.
pub const META_DESCRIPTION_TOO_LONG: &str =
    "Meta description should be shorter than 160 characters";

/// Warning for meta titles over the recommended maximum.
pub const META_TITLE_TOO_LONG: &str = "Meta title should be shorter than 60 chars.";

/// Outcome of evaluating a validator against a candidate value.
///
/// Only two severities exist: [`Invalid`](Validity::Invalid) blocks save,
/// [`Warning`](Validity::Warning) surfaces a message but lets the host save
/// anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Warning(String),
    Invalid(String),
}

impl Validity {
    /// True when the value passed with no message at all.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// True when the outcome must block persistence.
    pub fn blocks_save(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }

    /// The message carried by a warning or rejection, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Warning(message) | Validity::Invalid(message) => Some(message),
        }
    }
}

/// Which substring-matching policy a link validator uses.
///
/// Body-text links match `mailto:`/`tel:` as prefixes and additionally allow
/// root-relative `/` paths. Image links match `mailto:`/`tel:` anywhere in
/// the value and have no relative-path allowance. The divergence is carried
/// over from the production schema deliberately; reconciling it would change
/// which values the host accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkPolicy {
    BodyText,
    ImageLink,
}

/// Validates a link value against the given policy.
///
/// Empty and absent values are valid; link fields are optional. Anything not
/// covered by the policy's special cases must parse as an absolute URL.
///
/// # Examples
///
/// ```
/// use content_schema_core::{validate_link, LinkPolicy, Validity};
///
/// assert_eq!(validate_link(Some("mailto:hi@example.com"), LinkPolicy::BodyText), Validity::Valid);
/// assert_eq!(validate_link(Some("https://example.com"), LinkPolicy::ImageLink), Validity::Valid);
///
/// // Image links have no relative-path allowance.
/// assert!(validate_link(Some("/about"), LinkPolicy::ImageLink).blocks_save());
/// ```
pub fn validate_link(value: Option<&str>, policy: LinkPolicy) -> Validity {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Validity::Valid;
    };

    let message = match policy {
        LinkPolicy::BodyText => {
            if value.starts_with('/')
                || value.starts_with("mailto:")
                || value.starts_with("tel:")
            {
                return Validity::Valid;
            }
            BODY_LINK_MESSAGE
        }
        LinkPolicy::ImageLink => {
            if value.contains("mailto:") || value.contains("tel:") {
                return Validity::Valid;
            }
            IMAGE_LINK_MESSAGE
        }
    };

    match url::Url::parse(value) {
        Ok(_) => Validity::Valid,
        Err(_) => Validity::Invalid(message.to_string()),
    }
}

/// Rejects absent and empty values with the given message.
///
/// # Examples
///
/// ```
/// use content_schema_core::{validate_required, Validity};
///
/// assert!(validate_required(None, "Question is required").blocks_save());
/// assert!(validate_required(Some(""), "Question is required").blocks_save());
/// assert_eq!(validate_required(Some("Why?"), "Question is required"), Validity::Valid);
/// ```
pub fn validate_required(value: Option<&str>, message: &str) -> Validity {
    match value {
        Some(value) if !value.is_empty() => Validity::Valid,
        _ => Validity::Invalid(message.to_string()),
    }
}

/// Warns when a value exceeds `max` characters.
pub fn validate_max_length(value: Option<&str>, max: usize, message: &str) -> Validity {
    match value {
        Some(value) if value.chars().count() > max => Validity::Warning(message.to_string()),
        _ => Validity::Valid,
    }
}

/// Warns when a value falls outside `[min, max]` characters.
///
/// Empty and absent values are valid; the range only applies once something
/// has been written.
pub fn validate_length_range(
    value: Option<&str>,
    min: usize,
    max: usize,
    too_short: &str,
    too_long: &str,
) -> Validity {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Validity::Valid;
    };
    let len = value.chars().count();
    if len < min {
        Validity::Warning(too_short.to_string())
    } else if len > max {
        Validity::Warning(too_long.to_string())
    } else {
        Validity::Valid
    }
}

/// Recommended-length validator for SEO meta descriptions.
///
/// # Examples
///
/// ```
/// use content_schema_core::{validate_meta_description, Validity};
///
/// assert_eq!(validate_meta_description(Some(&"x".repeat(140))), Validity::Valid);
/// assert!(matches!(validate_meta_description(Some("too short")), Validity::Warning(_)));
/// assert_eq!(validate_meta_description(None), Validity::Valid);
/// ```
pub fn validate_meta_description(value: Option<&str>) -> Validity {
    validate_length_range(
        value,
        120,
        160,
        META_DESCRIPTION_TOO_SHORT,
        META_DESCRIPTION_TOO_LONG,
    )
}

/// Recommended-length validator for SEO meta titles.
pub fn validate_meta_title(value: Option<&str>) -> Validity {
    validate_max_length(value, 60, META_TITLE_TOO_LONG)
}

/// Declarative validation rule carried by a field descriptor.
///
/// The descriptor format declares the rule; enforcement happens host-side on
/// every change and save attempt, and locally via
/// [`evaluate`](ValidationRule::evaluate) or [`validate_document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ValidationRule {
    /// Hard failure when the value is absent or empty.
    Required { message: String },
    /// Soft warning when the value exceeds `max` characters.
    MaxLength { max: usize, message: String },
    /// Soft warning when the value falls outside `[min, max]` characters.
    #[serde(rename_all = "camelCase")]
    LengthRange {
        min: usize,
        max: usize,
        too_short: String,
        too_long: String,
    },
    /// Hard failure when the value is not an acceptable link.
    Link { policy: LinkPolicy },
}

impl ValidationRule {
    /// Creates a required-field rule with a fixed rejection message.
    pub fn required(message: &str) -> Self {
        ValidationRule::Required {
            message: message.to_string(),
        }
    }

    /// Creates a maximum-length warning rule.
    pub fn max_length(max: usize, message: &str) -> Self {
        ValidationRule::MaxLength {
            max,
            message: message.to_string(),
        }
    }

    /// Creates a length-range warning rule.
    pub fn length_range(min: usize, max: usize, too_short: &str, too_long: &str) -> Self {
        ValidationRule::LengthRange {
            min,
            max,
            too_short: too_short.to_string(),
            too_long: too_long.to_string(),
        }
    }

    /// Creates a link rule with the given matching policy.
    pub fn link(policy: LinkPolicy) -> Self {
        ValidationRule::Link { policy }
    }

    /// Evaluates this rule against a candidate string value.
    pub fn evaluate(&self, value: Option<&str>) -> Validity {
        match self {
            ValidationRule::Required { message } => validate_required(value, message),
            ValidationRule::MaxLength { max, message } => {
                validate_max_length(value, *max, message)
            }
            ValidationRule::LengthRange {
                min,
                max,
                too_short,
                too_long,
            } => validate_length_range(value, *min, *max, too_short, too_long),
            ValidationRule::Link { policy } => validate_link(value, *policy),
        }
    }

    /// Evaluates this rule against a raw JSON value.
    ///
    /// Strings evaluate as their contents. For [`Required`](Self::Required),
    /// `null` and empty arrays count as absent; any other present value
    /// passes. Length and link rules only apply to strings and pass for
    /// non-string values.
    pub fn evaluate_json(&self, value: &serde_json::Value) -> Validity {
        use serde_json::Value;

        match value {
            Value::String(text) => self.evaluate(Some(text)),
            Value::Null => self.evaluate(None),
            Value::Array(items) => match self {
                ValidationRule::Required { message } if items.is_empty() => {
                    Validity::Invalid(message.clone())
                }
                _ => Validity::Valid,
            },
            _ => Validity::Valid,
        }
    }
}

/// Severity of a per-field issue found on a candidate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One issue raised against a field of a candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

/// Evaluates every declared field rule against a candidate document's values.
///
/// Fields without a rule are skipped. Warnings never block save; the caller
/// decides what to do with errors.
///
/// # Examples
///
/// ```
/// use content_schema_core::*;
///
/// let doc_type = DocumentType::new("faq", "FAQ").with_field(
///     FieldSchema::string("question")
///         .with_validation(ValidationRule::required("Question is required")),
/// );
///
/// let issues = validate_document(&doc_type, &serde_json::json!({}));
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].message, "Question is required");
///
/// let issues = validate_document(&doc_type, &serde_json::json!({"question": "Why?"}));
/// assert!(issues.is_empty());
/// ```
pub fn validate_document(doc_type: &DocumentType, doc: &serde_json::Value) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    for field in &doc_type.fields {
        let Some(rule) = &field.validation else {
            continue;
        };
        let value = doc.get(&field.name).unwrap_or(&serde_json::Value::Null);
        match rule.evaluate_json(value) {
            Validity::Valid => {}
            Validity::Warning(message) => issues.push(FieldIssue {
                field: field.name.clone(),
                severity: Severity::Warning,
                message,
            }),
            Validity::Invalid(message) => issues.push(FieldIssue {
                field: field.name.clone(),
                severity: Severity::Error,
                message,
            }),
        }
    }

    issues
}

/// Structural errors in document-type and registry definitions.
///
/// Each variant describes a specific definition-time problem. The `Display`
/// impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Document type name is empty or whitespace-only.
    #[error("document type name cannot be empty")]
    EmptyTypeName,
    /// Two types in the registry share a name.
    #[error("duplicate document type in registry: {0}")]
    DuplicateType(String),
    /// A field has an empty name.
    #[error("empty field name in type '{0}'")]
    EmptyFieldName(String),
    /// Two fields in the same document type share a name.
    #[error("duplicate field '{field}' in type '{doc_type}'")]
    DuplicateField { doc_type: String, field: String },
    /// A field references a group the type does not declare.
    #[error("field '{field}' in type '{doc_type}' references undeclared group '{group}'")]
    UnknownGroup {
        doc_type: String,
        field: String,
        group: String,
    },
    /// The preview selects a field the type does not define.
    #[error("preview for type '{doc_type}' selects unknown field '{field}'")]
    UnknownPreviewField { doc_type: String, field: String },
    /// An ordering sorts by a field the type does not define.
    #[error("ordering '{ordering}' in type '{doc_type}' sorts by unknown field '{field}'")]
    UnknownOrderingField {
        doc_type: String,
        ordering: String,
        field: String,
    },
}

/// Validates a full type registry.
///
/// Checks for duplicate type names, then validates each document type
/// individually.
///
/// # Examples
///
/// ```
/// use content_schema_core::*;
///
/// let registry = TypeRegistry::new()
///     .with_type(DocumentType::new("faq", "FAQ").with_field(FieldSchema::string("title")))
///     .with_type(DocumentType::new("faq", "FAQ again").with_field(FieldSchema::string("title")));
///
/// let errors = validate_registry(&registry);
/// assert!(errors.iter().any(|e| matches!(e, SchemaError::DuplicateType(_))));
/// ```
pub fn validate_registry(registry: &TypeRegistry) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for doc_type in &registry.types {
        let name = doc_type.name.as_str();
        if !seen.insert(name) {
            errors.push(SchemaError::DuplicateType(name.to_string()));
            return errors;
        }
        errors.extend(validate_document_type(doc_type));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

/// Validates a single document-type definition.
///
/// Checks for empty names, duplicate fields, undeclared group references,
/// and preview/ordering selections naming unknown fields.
pub fn validate_document_type(doc_type: &DocumentType) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if doc_type.name.trim().is_empty() {
        errors.push(SchemaError::EmptyTypeName);
        return errors;
    }

    errors.extend(validate_fields(doc_type, &doc_type.fields));
    if !errors.is_empty() {
        return errors;
    }

    let mut preview_fields = vec![doc_type.preview.title.as_str()];
    if let Some(subtitle) = &doc_type.preview.subtitle {
        preview_fields.push(subtitle.as_str());
    }
    for field in preview_fields {
        if doc_type.field(field).is_none() {
            errors.push(SchemaError::UnknownPreviewField {
                doc_type: doc_type.name.clone(),
                field: field.to_string(),
            });
            return errors;
        }
    }

    for ordering in &doc_type.orderings {
        for sort in &ordering.by {
            if doc_type.field(&sort.field).is_none() {
                errors.push(SchemaError::UnknownOrderingField {
                    doc_type: doc_type.name.clone(),
                    ordering: ordering.name.clone(),
                    field: sort.field.clone(),
                });
                return errors;
            }
        }
    }

    errors
}

fn validate_fields(doc_type: &DocumentType, fields: &[FieldSchema]) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for field in fields {
        let name = field.name.trim();
        if name.is_empty() {
            errors.push(SchemaError::EmptyFieldName(doc_type.name.clone()));
            return errors;
        }

        if !seen.insert(name) {
            errors.push(SchemaError::DuplicateField {
                doc_type: doc_type.name.clone(),
                field: name.to_string(),
            });
            return errors;
        }

        if let Some(group) = &field.group {
            if !doc_type.has_group(group) {
                errors.push(SchemaError::UnknownGroup {
                    doc_type: doc_type.name.clone(),
                    field: name.to_string(),
                    group: group.clone(),
                });
                return errors;
            }
        }
    }

    errors
}
