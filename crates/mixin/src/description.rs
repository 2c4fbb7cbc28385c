//! Description facet

use serde::{Deserialize, Serialize};

/// Human-readable description of an entity
///
/// An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    value: String,
}

impl Description {
    /// Create an unset description
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the description
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Set the description
    pub fn set(&mut self, description: impl Into<String>) -> &mut Self {
        self.value = description.into();
        self
    }

    /// Check if the description is set and not empty
    pub fn has(&self) -> bool {
        !self.value.is_empty()
    }

    /// Clear the description
    pub fn clear(&mut self) -> &mut Self {
        self.value.clear();
        self
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Description API for entities embedding a [`Description`]
pub trait DescriptionAware {
    /// Get the embedded description facet
    fn description_facet(&self) -> &Description;

    /// Get the embedded description facet mutably
    fn description_facet_mut(&mut self) -> &mut Description;

    /// Get the description
    fn description(&self) -> &str {
        self.description_facet().get()
    }

    /// Set the description
    fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description_facet_mut().set(description);
        self
    }

    /// Check if the description is set and not empty
    fn has_description(&self) -> bool {
        self.description_facet().has()
    }

    /// Clear the description
    fn clear_description(&mut self) -> &mut Self {
        self.description_facet_mut().clear();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
