//! Timestamp lifecycle facet
//!
//! This module contains the `Timestamps` struct tracking creation, update,
//! and soft-deletion instants, and the `TimestampAware` trait that host
//! entities implement to expose the lifecycle API over an embedded
//! `Timestamps` value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendering format for [`Timestamps`] (`2024-01-31 09:15:00`)
const RENDER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Timestamps
// ============================================================================

/// Creation, update, and soft-deletion instants of an entity
///
/// All three fields start absent and are only ever changed through the
/// explicit setters and the `touch*` family. A present `deleted_at` marks
/// the entity as soft-deleted regardless of the other two fields. No
/// ordering between the fields is enforced; callers own that invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// When the entity was first persisted
    created_at: Option<DateTime<Utc>>,

    /// When the entity was last mutated
    updated_at: Option<DateTime<Utc>>,

    /// When the entity was soft-deleted
    deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Create a value with all three instants absent
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the creation instant
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Get the last-update instant
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Get the soft-deletion instant
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Overwrite the creation instant
    pub fn set_created_at(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.created_at = Some(at);
        self
    }

    /// Overwrite the last-update instant
    pub fn set_updated_at(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.updated_at = Some(at);
        self
    }

    /// Overwrite or clear the soft-deletion instant
    pub fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) -> &mut Self {
        self.deleted_at = at;
        self
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Check if the entity is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the creation instant is set
    pub fn is_created(&self) -> bool {
        self.created_at.is_some()
    }

    /// Check if the last-update instant is set
    pub fn is_updated(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Check if any of the three instants is set
    pub fn is_timestamped(&self) -> bool {
        self.is_created() || self.is_updated() || self.is_deleted()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Clear all three instants
    pub fn reset(&mut self) -> &mut Self {
        self.created_at = None;
        self.updated_at = None;
        self.deleted_at = None;
        self
    }

    /// Record a mutation happening now
    ///
    /// Sets `updated_at` to the current instant. When `created_at` is
    /// absent it receives that same instant: the first touch doubles as
    /// creation.
    pub fn touch(&mut self) -> &mut Self {
        let now = Utc::now();
        self.updated_at = Some(now);
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self
    }

    /// Set the creation instant to now, independent of the other fields
    pub fn touch_created(&mut self) -> &mut Self {
        self.created_at = Some(Utc::now());
        self
    }

    /// Set the last-update instant to now, independent of the other fields
    pub fn touch_updated(&mut self) -> &mut Self {
        self.updated_at = Some(Utc::now());
        self
    }

    /// Set the soft-deletion instant to now, independent of the other fields
    pub fn touch_deleted(&mut self) -> &mut Self {
        self.deleted_at = Some(Utc::now());
        self
    }
}

impl std::fmt::Display for Timestamps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Created at: {}, Updated at: {}, Deleted at: {}",
            render(self.created_at),
            render(self.updated_at),
            render(self.deleted_at)
        )
    }
}

/// Render one instant, or the literal `null` when absent
fn render(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.format(RENDER_FORMAT).to_string(),
        None => "null".to_string(),
    }
}

// ============================================================================
// TimestampAware
// ============================================================================

/// Lifecycle API for entities embedding a [`Timestamps`] value
///
/// Implementors supply the two accessors to the embedded value; every
/// other method is provided by forwarding.
pub trait TimestampAware {
    /// Get the embedded timestamps
    fn timestamps(&self) -> &Timestamps;

    /// Get the embedded timestamps mutably
    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Get the creation instant
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps().created_at()
    }

    /// Get the last-update instant
    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps().updated_at()
    }

    /// Get the soft-deletion instant
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps().deleted_at()
    }

    /// Overwrite the creation instant
    fn set_created_at(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.timestamps_mut().set_created_at(at);
        self
    }

    /// Overwrite the last-update instant
    fn set_updated_at(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.timestamps_mut().set_updated_at(at);
        self
    }

    /// Overwrite or clear the soft-deletion instant
    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) -> &mut Self {
        self.timestamps_mut().set_deleted_at(at);
        self
    }

    /// Check if the entity is soft-deleted
    fn is_deleted(&self) -> bool {
        self.timestamps().is_deleted()
    }

    /// Check if the creation instant is set
    fn is_created(&self) -> bool {
        self.timestamps().is_created()
    }

    /// Check if the last-update instant is set
    fn is_updated(&self) -> bool {
        self.timestamps().is_updated()
    }

    /// Check if any lifecycle instant is set
    fn is_timestamped(&self) -> bool {
        self.timestamps().is_timestamped()
    }

    /// Clear all three instants
    fn reset_timestamps(&mut self) -> &mut Self {
        self.timestamps_mut().reset();
        self
    }

    /// Record a mutation happening now; first touch doubles as creation
    fn touch(&mut self) -> &mut Self {
        self.timestamps_mut().touch();
        self
    }

    /// Set the creation instant to now
    fn touch_created(&mut self) -> &mut Self {
        self.timestamps_mut().touch_created();
        self
    }

    /// Set the last-update instant to now
    fn touch_updated(&mut self) -> &mut Self {
        self.timestamps_mut().touch_updated();
        self
    }

    /// Set the soft-deletion instant to now
    fn touch_deleted(&mut self) -> &mut Self {
        self.timestamps_mut().touch_deleted();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn past() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 31, 9, 15, 0).unwrap()
    }

    #[test]
    fn test_fresh_value_has_nothing_set() {
        let ts = Timestamps::new();
        assert!(!ts.is_created());
        assert!(!ts.is_updated());
        assert!(!ts.is_deleted());
        assert!(!ts.is_timestamped());
    }

    #[test]
    fn test_first_touch_doubles_as_creation() {
        let mut ts = Timestamps::new();
        ts.touch();

        assert!(ts.is_created());
        assert!(ts.is_updated());
        assert_eq!(ts.created_at(), ts.updated_at());
    }

    #[test]
    fn test_touch_leaves_existing_creation_alone() {
        let mut ts = Timestamps::new();
        ts.set_created_at(past()).set_updated_at(past());
        ts.touch();

        assert_eq!(ts.created_at(), Some(past()));
        assert_ne!(ts.updated_at(), Some(past()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ts = Timestamps::new();
        ts.touch().touch_deleted();
        assert!(ts.is_timestamped());

        ts.reset();
        assert!(!ts.is_timestamped());
        assert_eq!(ts, Timestamps::default());
    }

    #[test]
    fn test_touch_deleted_is_independent() {
        let mut ts = Timestamps::new();
        ts.touch_deleted();

        assert!(ts.is_deleted());
        assert!(!ts.is_created());
        assert!(!ts.is_updated());
    }

    #[test]
    fn test_set_deleted_at_can_clear() {
        let mut ts = Timestamps::new();
        ts.touch_deleted();
        ts.set_deleted_at(None);
        assert!(!ts.is_deleted());
    }

    #[test]
    fn test_setters_overwrite_unconditionally() {
        let mut ts = Timestamps::new();
        ts.touch();
        ts.set_created_at(past());
        assert_eq!(ts.created_at(), Some(past()));
    }

    #[test]
    fn test_empty_rendering() {
        assert_eq!(
            Timestamps::new().to_string(),
            "Created at: null, Updated at: null, Deleted at: null"
        );
    }

    #[test]
    fn test_rendering_uses_fixed_format() {
        let mut ts = Timestamps::new();
        ts.set_created_at(past());
        assert_eq!(
            ts.to_string(),
            "Created at: 2024-01-31 09:15:00, Updated at: null, Deleted at: null"
        );
    }

    // A minimal host exercising the forwarding trait.
    #[derive(Default)]
    struct Note {
        timestamps: Timestamps,
    }

    impl TimestampAware for Note {
        fn timestamps(&self) -> &Timestamps {
            &self.timestamps
        }

        fn timestamps_mut(&mut self) -> &mut Timestamps {
            &mut self.timestamps
        }
    }

    #[test]
    fn test_trait_forwarding_and_chaining() {
        let mut note = Note::default();
        note.touch().touch_deleted();

        assert!(note.is_created());
        assert!(note.is_deleted());
        assert_eq!(note.created_at(), note.updated_at());

        note.reset_timestamps();
        assert!(!note.is_timestamped());
    }
}
