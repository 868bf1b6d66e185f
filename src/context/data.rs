//! Plain context values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The contextual fields attached to every record emitted inside a scope.
///
/// A default instance has empty collections and no category or session id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextData {
    /// Unique tags. Iteration order is ascending.
    pub tags: BTreeSet<String>,

    /// Optional category (e.g., "http-request").
    pub category: Option<String>,

    /// Key/value metadata, one value per key.
    pub metadata: BTreeMap<String, String>,

    /// Optional session or request identifier.
    pub session_id: Option<String>,
}

impl ContextData {
    /// Returns true when no field carries information.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.metadata.is_empty()
            && self.category.as_deref().map_or(true, str::is_empty)
            && self.session_id.as_deref().map_or(true, str::is_empty)
    }
}
