//! Name facet
//!
//! Holds a display name and derives the usual case conversions from it.
//! Every multi-word conversion goes through `heck`; the slug conversion
//! shares the normalization in [`crate::slug`].

use crate::slug::slugify;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// Display name of an entity
///
/// An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    value: String,
}

impl Name {
    /// Create an unset name
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the name
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Set the name
    pub fn set(&mut self, name: impl Into<String>) -> &mut Self {
        self.value = name.into();
        self
    }

    /// Check if the name is set and not empty
    pub fn has(&self) -> bool {
        !self.value.is_empty()
    }

    /// Clear the name
    pub fn clear(&mut self) -> &mut Self {
        self.value.clear();
        self
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// The name in lowercase
    pub fn to_lowercase(&self) -> String {
        self.value.to_lowercase()
    }

    /// The name in uppercase
    pub fn to_uppercase(&self) -> String {
        self.value.to_uppercase()
    }

    /// The name in `Title Case`
    pub fn to_title_case(&self) -> String {
        self.value.to_title_case()
    }

    /// The name in `camelCase`
    pub fn to_camel_case(&self) -> String {
        self.value.to_lower_camel_case()
    }

    /// The name in `snake_case`
    pub fn to_snake_case(&self) -> String {
        self.value.to_snake_case()
    }

    /// The name in `kebab-case`
    pub fn to_kebab_case(&self) -> String {
        self.value.to_kebab_case()
    }

    /// The name in `PascalCase`
    pub fn to_pascal_case(&self) -> String {
        self.value.to_upper_camel_case()
    }

    /// The name as a URL-safe slug
    pub fn to_slug(&self) -> String {
        slugify(&self.value)
    }

    /// The name with separators replaced by spaces, title-cased
    pub fn to_human_readable(&self) -> String {
        self.value.replace(['-', '_'], " ").to_title_case()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Name API for entities embedding a [`Name`]
pub trait NameAware {
    /// Get the embedded name facet
    fn name_facet(&self) -> &Name;

    /// Get the embedded name facet mutably
    fn name_facet_mut(&mut self) -> &mut Name;

    /// Get the name
    fn name(&self) -> &str {
        self.name_facet().get()
    }

    /// Set the name
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name_facet_mut().set(name);
        self
    }

    /// Check if the name is set and not empty
    fn has_name(&self) -> bool {
        self.name_facet().has()
    }

    /// Clear the name
    fn clear_name(&mut self) -> &mut Self {
        self.name_facet_mut().clear();
        self
    }

    /// The name as a URL-safe slug
    fn name_slug(&self) -> String {
        self.name_facet().to_slug()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let name = Name::new();
        assert!(!name.has());
        assert_eq!(name.get(), "");
    }

    #[test]
    fn test_set_has_clear() {
        let mut name = Name::new();
        name.set("Blog Post");
        assert!(name.has());
        assert_eq!(name.get(), "Blog Post");
        assert_eq!(name.to_string(), "Blog Post");

        name.clear();
        assert!(!name.has());
    }

    #[test]
    fn test_case_conversions() {
        let mut name = Name::new();
        name.set("hello world example");

        assert_eq!(name.to_title_case(), "Hello World Example");
        assert_eq!(name.to_camel_case(), "helloWorldExample");
        assert_eq!(name.to_snake_case(), "hello_world_example");
        assert_eq!(name.to_kebab_case(), "hello-world-example");
        assert_eq!(name.to_pascal_case(), "HelloWorldExample");
    }

    #[test]
    fn test_case_conversions_from_mixed_input() {
        let mut name = Name::new();
        name.set("BlogPost");

        assert_eq!(name.to_snake_case(), "blog_post");
        assert_eq!(name.to_kebab_case(), "blog-post");
        assert_eq!(name.to_lowercase(), "blogpost");
        assert_eq!(name.to_uppercase(), "BLOGPOST");
    }

    #[test]
    fn test_to_slug_strips_punctuation() {
        let mut name = Name::new();
        name.set("Hello, World! (2nd Draft)");
        assert_eq!(name.to_slug(), "hello-world-2nd-draft");
    }

    #[test]
    fn test_to_human_readable() {
        let mut name = Name::new();
        name.set("blog-post_draft");
        assert_eq!(name.to_human_readable(), "Blog Post Draft");
    }

    struct Category {
        name: Name,
    }

    impl NameAware for Category {
        fn name_facet(&self) -> &Name {
            &self.name
        }

        fn name_facet_mut(&mut self) -> &mut Name {
            &mut self.name
        }
    }

    #[test]
    fn test_trait_forwarding() {
        let mut category = Category { name: Name::new() };
        category.set_name("Science Fiction");

        assert!(category.has_name());
        assert_eq!(category.name(), "Science Fiction");
        assert_eq!(category.name_slug(), "science-fiction");
    }
}
