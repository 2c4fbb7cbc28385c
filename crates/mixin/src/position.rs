//! Position facet
//!
//! An ordinal position within a sequence (menu entries, sort order).
//! Positions are non-negative by construction; moving below zero is the
//! one fallible operation in this crate.

use facets_core::{FacetError, FacetResult};
use serde::{Deserialize, Serialize};

/// Ordinal position of an entity within a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    value: u32,
}

impl Position {
    /// Create a position at the start of the sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a position at a specific ordinal
    pub fn at(value: u32) -> Self {
        Self { value }
    }

    /// Get the current position
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Set the current position
    pub fn set(&mut self, position: u32) -> &mut Self {
        self.value = position;
        self
    }

    /// Move forward by `amount`
    pub fn increment(&mut self, amount: u32) -> &mut Self {
        self.value += amount;
        self
    }

    /// Move backward by `amount`
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::PositionUnderflow`] when `amount` exceeds the
    /// current position.
    pub fn decrement(&mut self, amount: u32) -> FacetResult<&mut Self> {
        self.value = self
            .value
            .checked_sub(amount)
            .ok_or_else(|| FacetError::position_underflow(self.value, amount))?;
        Ok(self)
    }

    /// Return to the start of the sequence
    pub fn reset(&mut self) -> &mut Self {
        self.value = 0;
        self
    }

    /// Check if at the start of the sequence
    pub fn is_at_start(&self) -> bool {
        self.value == 0
    }

    /// Check if at or past `max`
    pub fn is_at_end(&self, max: u32) -> bool {
        self.value >= max
    }

    /// Move forward one step and return the new position
    pub fn advance(&mut self) -> u32 {
        self.value += 1;
        self.value
    }

    /// Move backward one step, flooring at zero, and return the new position
    pub fn retreat(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1);
        self.value
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Position API for entities embedding a [`Position`]
pub trait PositionAware {
    /// Get the embedded position facet
    fn position_facet(&self) -> &Position;

    /// Get the embedded position facet mutably
    fn position_facet_mut(&mut self) -> &mut Position;

    /// Get the current position
    fn position(&self) -> u32 {
        self.position_facet().get()
    }

    /// Set the current position
    fn set_position(&mut self, position: u32) -> &mut Self {
        self.position_facet_mut().set(position);
        self
    }

    /// Move forward by `amount`
    fn increment_position(&mut self, amount: u32) -> &mut Self {
        self.position_facet_mut().increment(amount);
        self
    }

    /// Move backward by `amount`, failing on underflow
    fn decrement_position(&mut self, amount: u32) -> FacetResult<&mut Self> {
        self.position_facet_mut().decrement(amount)?;
        Ok(self)
    }

    /// Return to the start of the sequence
    fn reset_position(&mut self) -> &mut Self {
        self.position_facet_mut().reset();
        self
    }

    /// Check if at the start of the sequence
    fn is_at_start(&self) -> bool {
        self.position_facet().is_at_start()
    }

    /// Check if at or past `max`
    fn is_at_end(&self, max: u32) -> bool {
        self.position_facet().is_at_end(max)
    }

    /// Move forward one step and return the new position
    fn next_position(&mut self) -> u32 {
        self.position_facet_mut().advance()
    }

    /// Move backward one step, flooring at zero, and return the new position
    fn previous_position(&mut self) -> u32 {
        self.position_facet_mut().retreat()
    }
}

// ============================================================================
// Tests
// ============================================================================
