//! Slug facet
//!
//! A slug is the URL-safe token identifying an entity in routes and
//! permalinks: lowercase alphanumerics separated by single hyphens.

use serde::{Deserialize, Serialize};

/// Normalize arbitrary text into a URL-safe slug
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single `-`, and trims leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// URL-safe identifier of an entity
///
/// Assignment trims surrounding whitespace and lowercases; it does not
/// re-punctuate. Use [`slugify`] (or [`crate::name::Name::to_slug`]) to
/// derive a slug from free text. An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    value: String,
}

impl Slug {
    /// Create an unset slug
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the slug
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Set the slug, trimmed and lowercased
    pub fn set(&mut self, slug: impl Into<String>) -> &mut Self {
        self.value = slug.into().trim().to_lowercase();
        self
    }

    /// Check if the slug is set and not empty
    pub fn has(&self) -> bool {
        !self.value.is_empty()
    }

    /// Clear the slug
    pub fn clear(&mut self) -> &mut Self {
        self.value.clear();
        self
    }

    /// Check if the slug is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if the slug equals another slug exactly
    pub fn matches(&self, other: &str) -> bool {
        self.value == other
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Slug API for entities embedding a [`Slug`]
pub trait SlugAware {
    /// Get the embedded slug facet
    fn slug_facet(&self) -> &Slug;

    /// Get the embedded slug facet mutably
    fn slug_facet_mut(&mut self) -> &mut Slug;

    /// Get the slug
    fn slug(&self) -> &str {
        self.slug_facet().get()
    }

    /// Set the slug, trimmed and lowercased
    fn set_slug(&mut self, slug: impl Into<String>) -> &mut Self {
        self.slug_facet_mut().set(slug);
        self
    }

    /// Check if the slug is set and not empty
    fn has_slug(&self) -> bool {
        self.slug_facet().has()
    }

    /// Clear the slug
    fn clear_slug(&mut self) -> &mut Self {
        self.slug_facet_mut().clear();
        self
    }

    /// Check if the slug equals another slug exactly
    fn slug_matches(&self, other: &str) -> bool {
        self.slug_facet().matches(other)
    }
}

// ============================================================================
// Tests
// ============================================================================
