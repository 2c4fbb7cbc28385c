//! Numeric identifier facet

use serde::{Deserialize, Serialize};

/// Optional numeric identifier of an entity
///
/// Absent until assigned, typically by a storage layer handing out
/// sequential keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericId {
    value: Option<i64>,
}

impl NumericId {
    /// Create an unassigned identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the identifier
    pub fn get(&self) -> Option<i64> {
        self.value
    }

    /// Assign the identifier
    pub fn set(&mut self, id: i64) -> &mut Self {
        self.value = Some(id);
        self
    }

    /// Check if an identifier has been assigned
    pub fn has(&self) -> bool {
        self.value.is_some()
    }

    /// Return the identifier to the unassigned state
    pub fn clear(&mut self) -> &mut Self {
        self.value = None;
        self
    }
}

/// Identifier API for entities embedding a [`NumericId`]
pub trait IdAware {
    /// Get the embedded identifier facet
    fn id_facet(&self) -> &NumericId;

    /// Get the embedded identifier facet mutably
    fn id_facet_mut(&mut self) -> &mut NumericId;

    /// Get the identifier
    fn id(&self) -> Option<i64> {
        self.id_facet().get()
    }

    /// Assign the identifier
    fn set_id(&mut self, id: i64) -> &mut Self {
        self.id_facet_mut().set(id);
        self
    }

    /// Check if an identifier has been assigned
    fn has_id(&self) -> bool {
        self.id_facet().has()
    }

    /// Return the identifier to the unassigned state
    fn clear_id(&mut self) -> &mut Self {
        self.id_facet_mut().clear();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
