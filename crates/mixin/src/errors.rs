//! Error-list facet
//!
//! Collects human-readable problem messages on an entity, typically
//! accumulated during validation and drained for display.

use serde::{Deserialize, Serialize};

/// Accumulated problem messages of an entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages, oldest first
    pub fn all(&self) -> &[String] {
        &self.messages
    }

    /// Append a message
    pub fn add(&mut self, message: impl Into<String>) -> &mut Self {
        self.messages.push(message.into());
        self
    }

    /// Check if any message has been recorded
    pub fn has(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Drop all messages
    pub fn clear(&mut self) -> &mut Self {
        self.messages.clear();
        self
    }

    /// Replace the whole list
    pub fn replace(&mut self, messages: Vec<String>) -> &mut Self {
        self.messages = messages;
        self
    }

    /// Get the oldest message
    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    /// Get the newest message
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no message has been recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Error-list API for entities embedding an [`ErrorList`]
pub trait ErrorAware {
    /// Get the embedded error-list facet
    fn error_facet(&self) -> &ErrorList;

    /// Get the embedded error-list facet mutably
    fn error_facet_mut(&mut self) -> &mut ErrorList;

    /// Get all messages, oldest first
    fn errors(&self) -> &[String] {
        self.error_facet().all()
    }

    /// Append a message
    fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.error_facet_mut().add(message);
        self
    }

    /// Check if any message has been recorded
    fn has_errors(&self) -> bool {
        self.error_facet().has()
    }

    /// Drop all messages
    fn clear_errors(&mut self) -> &mut Self {
        self.error_facet_mut().clear();
        self
    }

    /// Replace the whole list
    fn set_errors(&mut self, messages: Vec<String>) -> &mut Self {
        self.error_facet_mut().replace(messages);
        self
    }

    /// Get the oldest message
    fn first_error(&self) -> Option<&str> {
        self.error_facet().first()
    }

    /// Get the newest message
    fn last_error(&self) -> Option<&str> {
        self.error_facet().last()
    }

    /// Number of recorded messages
    fn error_count(&self) -> usize {
        self.error_facet().len()
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
        let errors = ErrorList::new();
        assert!(errors.is_empty());
        assert!(!errors.has());
        assert_eq!(errors.first(), None);
        assert_eq!(errors.last(), None);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut errors = ErrorList::new();
        errors.add("name is required").add("slug is taken");

        assert!(errors.has());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some("name is required"));
        assert_eq!(errors.last(), Some("slug is taken"));
        assert_eq!(errors.all(), ["name is required", "slug is taken"]);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut errors = ErrorList::new();
        errors.add("stale");
        errors.replace(vec!["fresh".to_string()]);
        assert_eq!(errors.all(), ["fresh"]);

        errors.clear();
        assert!(errors.is_empty());
    }

    struct Form {
        errors: ErrorList,
    }

    impl ErrorAware for Form {
        fn error_facet(&self) -> &ErrorList {
            &self.errors
        }

        fn error_facet_mut(&mut self) -> &mut ErrorList {
            &mut self.errors
        }
    }

    #[test]
    fn test_trait_forwarding() {
        let mut form = Form {
            errors: ErrorList::new(),
        };
        form.add_error("email is invalid");

        assert!(form.has_errors());
        assert_eq!(form.error_count(), 1);
        assert_eq!(form.first_error(), form.last_error());

        form.clear_errors();
        assert!(!form.has_errors());
    }
}
