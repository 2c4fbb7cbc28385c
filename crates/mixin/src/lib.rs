//! # Facets Mixin
//!
//! Composable accessor facets for domain entities.
//!
//! Each module pairs a small value type (the facet) with an `*Aware` trait.
//! A host entity embeds the facets it needs and implements the matching
//! traits by handing out references to the embedded values; every accessor,
//! predicate, and mutator then comes for free as a provided method. This is
//! mixin-by-composition: no inheritance, no macro magic, and hosts pick any
//! subset of capabilities without method-name collisions.
//!
//! ## Facets
//!
//! - **NumericId / UniqueId**: storage key and global UUID identity
//! - **Name / Slug / Description**: textual attributes, with case
//!   conversions and URL-safe normalization
//! - **Status**: free-form workflow label
//! - **Position**: ordinal within a sequence
//! - **Enabled**: active flag, on by default
//! - **ErrorList**: accumulated problem messages
//! - **Timestamps**: creation/update/soft-deletion lifecycle
//!
//! `JsonConvertible` adds serde-backed JSON conversion to any composed host.

// Module declarations
pub mod convert;
pub mod description;
pub mod enabled;
pub mod errors;
pub mod id;
pub mod name;
pub mod position;
pub mod slug;
pub mod status;
pub mod timestamps;
pub mod uid;

// Re-export commonly used types at crate root
pub use convert::JsonConvertible;
pub use description::{Description, DescriptionAware};
pub use enabled::{Enabled, EnabledAware};
pub use errors::{ErrorAware, ErrorList};
pub use id::{IdAware, NumericId};
pub use name::{Name, NameAware};
pub use position::{Position, PositionAware};
pub use slug::{Slug, SlugAware, slugify};
pub use status::{Status, StatusAware};
pub use timestamps::{TimestampAware, Timestamps};
pub use uid::{UniqueId, UuidAware};

// Re-export core types that are commonly used with facets
pub use facets_core::{FacetError, FacetResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        Description,
        DescriptionAware,
        Enabled,
        EnabledAware,
        ErrorAware,
        ErrorList,
        // Re-exported from core
        FacetError,
        FacetResult,
        IdAware,
        JsonConvertible,
        Name,
        NameAware,
        NumericId,
        Position,
        PositionAware,
        Slug,
        SlugAware,
        Status,
        StatusAware,
        TimestampAware,
        Timestamps,
        UniqueId,
        UuidAware,
        // Helpers
        slugify,
    };
}

// ============================================================================
// Tests
// ============================================================================
