//! JSON conversion for composed entities
//!
//! Hosts opt in by implementing the marker; every method comes from serde.

use facets_core::FacetResult;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for entities that convert to and from JSON
///
/// # Example
///
/// ```rust,ignore
/// use facets_mixin::{JsonConvertible, Name, NameAware};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Default, Serialize, Deserialize)]
/// struct Tag {
///     name: Name,
/// }
///
/// impl JsonConvertible for Tag {}
/// ```
pub trait JsonConvertible: Serialize + DeserializeOwned + Sized {
    /// Serialize to a compact JSON string
    fn to_json(&self) -> FacetResult<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Serialize to a pretty-printed JSON string
    fn to_json_pretty(&self) -> FacetResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Convert to a JSON value tree
    fn to_value(&self) -> FacetResult<serde_json::Value> {
        serde_json::to_value(self).map_err(Into::into)
    }

    /// Deserialize from a JSON string
    fn from_json(json: &str) -> FacetResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
