//! Error types for the facets workspace
//!
//! This module provides unified error handling across all facets crates,
//! covering position arithmetic, logging initialization, IO, and JSON
//! serialization.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the facets workspace
#[derive(Debug, Error)]
pub enum FacetError {
    // ========================================================================
    // Facet Errors
    // ========================================================================
    /// Position would move below zero
    #[error("Position cannot move below zero: {current} - {amount}")]
    PositionUnderflow { current: u32, amount: u32 },

    // ========================================================================
    // Logging Errors
    // ========================================================================
    /// Unsupported log level string
    #[error("Unsupported log level '{0}'; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),

    /// Log directory is unusable
    #[error("Invalid log directory '{path}': {message}")]
    InvalidLogDir { path: PathBuf, message: String },

    /// Logging was already initialized with a different configuration
    #[error("Logging already initialized with {existing}; refusing to switch to {requested}")]
    LoggerConflict { existing: String, requested: String },

    /// Logger backend failed to start
    #[error("Failed to start logger: {0}")]
    LoggerStart(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FacetError {
    /// Create a position underflow error
    pub fn position_underflow(current: u32, amount: u32) -> Self {
        FacetError::PositionUnderflow { current, amount }
    }

    /// Create an invalid log directory error
    pub fn invalid_log_dir(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        FacetError::InvalidLogDir {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a logger conflict error
    pub fn logger_conflict(existing: impl Into<String>, requested: impl Into<String>) -> Self {
        FacetError::LoggerConflict {
            existing: existing.into(),
            requested: requested.into(),
        }
    }

    /// Check if this error came from logging setup
    pub fn is_logging(&self) -> bool {
        matches!(
            self,
            FacetError::InvalidLogLevel(_)
                | FacetError::InvalidLogDir { .. }
                | FacetError::LoggerConflict { .. }
                | FacetError::LoggerStart(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, FacetError::Io(_))
    }
}

/// Result type alias using FacetError
pub type FacetResult<T> = Result<T, FacetError>;

// ============================================================================
// Tests
// ============================================================================
