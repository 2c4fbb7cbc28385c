//! Enabled-flag facet

use serde::{Deserialize, Serialize};

/// Whether an entity is active
///
/// Entities start enabled; disabling is the explicit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enabled {
    value: bool,
}

impl Enabled {
    /// Create an enabled flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if enabled
    pub fn is_enabled(&self) -> bool {
        self.value
    }

    /// Check if disabled
    pub fn is_disabled(&self) -> bool {
        !self.value
    }

    /// Set the flag explicitly
    pub fn set(&mut self, enabled: bool) -> &mut Self {
        self.value = enabled;
        self
    }

    /// Flip the flag
    pub fn toggle(&mut self) -> &mut Self {
        self.value = !self.value;
        self
    }

    /// Enable
    pub fn enable(&mut self) -> &mut Self {
        self.value = true;
        self
    }

    /// Disable
    pub fn disable(&mut self) -> &mut Self {
        self.value = false;
        self
    }
}

impl Default for Enabled {
    fn default() -> Self {
        Self { value: true }
    }
}

/// Enabled-flag API for entities embedding an [`Enabled`]
pub trait EnabledAware {
    /// Get the embedded flag facet
    fn enabled_facet(&self) -> &Enabled;

    /// Get the embedded flag facet mutably
    fn enabled_facet_mut(&mut self) -> &mut Enabled;

    /// Check if enabled
    fn is_enabled(&self) -> bool {
        self.enabled_facet().is_enabled()
    }

    /// Check if disabled
    fn is_disabled(&self) -> bool {
        self.enabled_facet().is_disabled()
    }

    /// Set the flag explicitly
    fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled_facet_mut().set(enabled);
        self
    }

    /// Flip the flag
    fn toggle_enabled(&mut self) -> &mut Self {
        self.enabled_facet_mut().toggle();
        self
    }

    /// Enable
    fn enable(&mut self) -> &mut Self {
        self.enabled_facet_mut().enable();
        self
    }

    /// Disable
    fn disable(&mut self) -> &mut Self {
        self.enabled_facet_mut().disable();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
