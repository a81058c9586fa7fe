//! Built-in document-type definitions for the content studio.
//!
//! Each module builds one [`DocumentType`] descriptor using the core builder
//! API; [`schema_types`] assembles them into the ordered [`TypeRegistry`]
//! the host registers at startup. Registration order drives the editor's
//! type menu, so it is fixed here rather than sorted.
//!
//! # Example
//!
//! ```
//! use content_schema_catalog::schema_types;
//! use content_schema_core::validate_registry;
//!
//! let registry = schema_types();
//! assert!(registry.get("faq").is_some());
//! assert!(validate_registry(&registry).is_empty());
//! ```

mod blog_category;
mod blog_post;
mod embeds;
mod faq;
mod press;
mod richtext;
mod team_member;
mod testimonial;

use content_schema_core::{DocumentType, TypeRegistry};

pub use blog_category::blog_category;
pub use blog_post::blog_post;
pub use embeds::{banner, you_tube};
pub use faq::faq;
pub use press::press;
pub use team_member::team_member;
pub use testimonial::testimonial;

/// Builds the full ordered type registry for host registration.
///
/// Type names are unique by construction; see
/// [`validate_registry`](content_schema_core::validate_registry) for the
/// structural check run before export.
pub fn schema_types() -> TypeRegistry {
    TypeRegistry::new()
        .with_type(blog_post())
        .with_type(blog_category())
        .with_type(team_member())
        .with_type(testimonial())
        .with_type(faq())
        .with_type(you_tube())
        .with_type(banner())
        .with_type(press())
}

/// Finds a built-in document type by name.
///
/// # Examples
///
/// ```
/// use content_schema_catalog::document_type;
///
/// assert!(document_type("press").is_some());
/// assert!(document_type("podcast").is_none());
/// ```
pub fn document_type(name: &str) -> Option<DocumentType> {
    schema_types().types.into_iter().find(|t| t.name == name)
}
