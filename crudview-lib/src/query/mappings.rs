//! Sort keys that don't correspond to model attributes.

use std::collections::HashMap;

/// Maps custom sort keys to the expression the data layer orders by.
///
/// A column whose key is neither a model attribute nor a mapping is never
/// rendered with a sort link.
///
/// # Example
///
/// ```
/// use crudview_lib::query::SortMappings;
///
/// let mappings = SortMappings::new().with("chatty", "len(remarks)");
/// assert_eq!(mappings.get("chatty"), Some("len(remarks)"));
/// assert!(!mappings.contains("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortMappings {
    expressions: HashMap<String, String>,
}

impl SortMappings {
    /// Creates an empty mapping table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping (builder pattern).
    pub fn with(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.insert(key, expression);
        self
    }

    /// Adds a mapping, replacing any previous expression for `key`.
    pub fn insert(&mut self, key: impl Into<String>, expression: impl Into<String>) {
        self.expressions.insert(key.into(), expression.into());
    }

    /// Returns the sort expression for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.expressions.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is mapped.
    pub fn contains(&self, key: &str) -> bool {
        self.expressions.contains_key(key)
    }

    /// Returns `true` if no mappings are defined.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
