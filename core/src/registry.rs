//! Ordered document-type registry handed to the host for registration.

use serde::{Deserialize, Serialize};

use crate::types::DocumentType;

/// Fixed, ordered collection of document-type descriptors.
///
/// Registration order is meaningful to the host (it drives editor menu
/// order), so the registry preserves insertion order. Type-name uniqueness
/// holds by construction and is checkable with
/// [`validate_registry`](crate::validate_registry).
///
/// # Examples
///
/// ```
/// use content_schema_core::{DocumentType, TypeRegistry};
///
/// let registry = TypeRegistry::new()
///     .with_type(DocumentType::new("faq", "FAQ"))
///     .with_type(DocumentType::new("press", "Press"));
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.names(), vec!["faq", "press"]);
/// assert!(registry.get("faq").is_some());
/// assert!(registry.get("banner").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRegistry {
    /// Schema contract version (populated from
    /// [`SCHEMA_CONTRACT_VERSION`](crate::SCHEMA_CONTRACT_VERSION)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Document types in registration order.
    pub types: Vec<DocumentType>,
}

impl TypeRegistry {
    /// Creates an empty registry stamped with the current contract version.
    pub fn new() -> Self {
        Self {
            schema_version: Some(crate::SCHEMA_CONTRACT_VERSION.to_string()),
            types: Vec::new(),
        }
    }

    /// Appends a document type, preserving registration order.
    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.types.push(doc_type);
        self
    }

    /// Finds a document type by name.
    pub fn get(&self, name: &str) -> Option<&DocumentType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Gets all type names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the registered types in order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentType> {
        self.types.iter()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_preserves_registration_order() {
        let registry = TypeRegistry::new()
            .with_type(DocumentType::new("blogPost", "Blog Post"))
            .with_type(DocumentType::new("faq", "FAQ"))
            .with_type(DocumentType::new("press", "Press"));

        assert_eq!(registry.names(), vec!["blogPost", "faq", "press"]);
    }

    #[test]
    fn test_registry_lookup_by_name() {
        let registry = TypeRegistry::new().with_type(DocumentType::new("faq", "FAQ"));
        assert_eq!(registry.get("faq").map(|t| t.title.as_str()), Some("FAQ"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_embeds_contract_version() {
        let registry = TypeRegistry::new();
        assert_eq!(
            registry.schema_version.as_deref(),
            Some(crate::SCHEMA_CONTRACT_VERSION)
        );
    }
}
