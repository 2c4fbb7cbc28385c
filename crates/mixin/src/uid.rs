//! UUID facet

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional globally unique identifier of an entity
///
/// Absent until assigned or minted with [`UniqueId::generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueId {
    value: Option<Uuid>,
}

impl UniqueId {
    /// Create an unassigned identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the UUID
    pub fn get(&self) -> Option<Uuid> {
        self.value
    }

    /// Assign an externally minted UUID
    pub fn set(&mut self, uuid: Uuid) -> &mut Self {
        self.value = Some(uuid);
        self
    }

    /// Check if a UUID has been assigned
    pub fn has(&self) -> bool {
        self.value.is_some()
    }

    /// Return the identifier to the unassigned state
    pub fn clear(&mut self) -> &mut Self {
        self.value = None;
        self
    }

    /// Mint a fresh v4 UUID, assign it, and return it
    pub fn generate(&mut self) -> Uuid {
        let uuid = Uuid::new_v4();
        self.value = Some(uuid);
        uuid
    }
}

impl std::fmt::Display for UniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(uuid) => write!(f, "{uuid}"),
            None => write!(f, "null"),
        }
    }
}

/// UUID API for entities embedding a [`UniqueId`]
pub trait UuidAware {
    /// Get the embedded UUID facet
    fn uuid_facet(&self) -> &UniqueId;

    /// Get the embedded UUID facet mutably
    fn uuid_facet_mut(&mut self) -> &mut UniqueId;

    /// Get the UUID
    fn uuid(&self) -> Option<Uuid> {
        self.uuid_facet().get()
    }

    /// Assign an externally minted UUID
    fn set_uuid(&mut self, uuid: Uuid) -> &mut Self {
        self.uuid_facet_mut().set(uuid);
        self
    }

    /// Check if a UUID has been assigned
    fn has_uuid(&self) -> bool {
        self.uuid_facet().has()
    }

    /// Return the UUID to the unassigned state
    fn clear_uuid(&mut self) -> &mut Self {
        self.uuid_facet_mut().clear();
        self
    }

    /// Mint a fresh v4 UUID, assign it, and return it
    fn generate_uuid(&mut self) -> Uuid {
        self.uuid_facet_mut().generate()
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
    fn test_starts_unassigned() {
        let uid = UniqueId::new();
        assert!(!uid.has());
        assert_eq!(uid.get(), None);
        assert_eq!(uid.to_string(), "null");
    }

    #[test]
    fn test_set_and_clear_round_trip() {
        let uuid = Uuid::new_v4();
        let mut uid = UniqueId::new();
        uid.set(uuid);
        assert!(uid.has());
        assert_eq!(uid.get(), Some(uuid));
        assert_eq!(uid.to_string(), uuid.to_string());

        uid.clear();
        assert!(!uid.has());
    }

    #[test]
    fn test_generate_assigns_and_returns() {
        let mut uid = UniqueId::new();
        let minted = uid.generate();
        assert_eq!(uid.get(), Some(minted));

        // A second mint replaces the first.
        let replacement = uid.generate();
        assert_ne!(minted, replacement);
        assert_eq!(uid.get(), Some(replacement));
    }

    struct Document {
        uuid: UniqueId,
    }

    impl UuidAware for Document {
        fn uuid_facet(&self) -> &UniqueId {
            &self.uuid
        }

        fn uuid_facet_mut(&mut self) -> &mut UniqueId {
            &mut self.uuid
        }
    }

    #[test]
    fn test_trait_forwarding() {
        let mut doc = Document {
            uuid: UniqueId::new(),
        };
        let minted = doc.generate_uuid();
        assert!(doc.has_uuid());
        assert_eq!(doc.uuid(), Some(minted));

        doc.clear_uuid();
        assert!(!doc.has_uuid());
    }
}
