//! Status facet

use serde::{Deserialize, Serialize};

/// Free-form status label of an entity
///
/// The label is not constrained to a closed set; workflows that need one
/// layer an enum on top. An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    value: String,
}

impl Status {
    /// Create an unset status
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the status label
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Set the status label
    pub fn set(&mut self, status: impl Into<String>) -> &mut Self {
        self.value = status.into();
        self
    }

    /// Check if the status equals a given label exactly
    pub fn matches(&self, status: &str) -> bool {
        self.value == status
    }

    /// Check if the status is unset
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Status API for entities embedding a [`Status`]
pub trait StatusAware {
    /// Get the embedded status facet
    fn status_facet(&self) -> &Status;

    /// Get the embedded status facet mutably
    fn status_facet_mut(&mut self) -> &mut Status;

    /// Get the status label
    fn status(&self) -> &str {
        self.status_facet().get()
    }

    /// Set the status label
    fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status_facet_mut().set(status);
        self
    }

    /// Check if the status equals a given label exactly
    fn has_status(&self, status: &str) -> bool {
        self.status_facet().matches(status)
    }

    /// Check if the status is unset
    fn is_status_empty(&self) -> bool {
        self.status_facet().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
