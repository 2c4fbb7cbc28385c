//! # Facets Core
//!
//! Foundation crate for the facets workspace.
//!
//! This crate provides the building blocks shared by every other crate:
//!
//! - **Errors**: unified error handling with `FacetError` and `FacetResult`
//! - **Logging**: rotating file logging behind the `log` facade
//!

pub mod error;
pub mod logging;

// Re-export commonly used items at crate root
pub use error::{FacetError, FacetResult};
pub use logging::{default_level, line_format};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
