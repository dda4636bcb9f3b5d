//! Ordering types for list queries.

use std::cmp::Ordering;

use crate::model::Listable;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Parses a `sort_dir` parameter value. Anything but `asc`/`desc` is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Returns the parameter value for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specifies the ordering of query results.
///
/// Further ascending fields break ties of the ones before them.
///
/// # Example
///
/// ```
/// use crudview_lib::query::OrderBy;
///
/// // Single field ordering
/// let order = OrderBy::desc("children");
///
/// // Multiple field ordering
/// let order = OrderBy::desc("children")
///     .then_asc("name");
/// assert_eq!(order.to_string(), "children desc, name asc");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    fields: Vec<(String, Direction)>,
}

impl OrderBy {
    /// Creates an order on a field in the given direction.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            fields: vec![(field.into(), direction)],
        }
    }

    /// Creates an ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    /// Creates a descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    /// Adds a secondary ascending order on a field.
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Asc));
        self
    }

    /// Sorts entities in memory by their attribute values.
    ///
    /// The sort is stable and nulls come first in ascending order. Fields
    /// that are sort expressions rather than attributes read as null for
    /// every entity; [`ListHelper::sort_entries`](crate::ListHelper::sort_entries)
    /// sorts mapped keys by their own value instead.
    pub fn sort_records<R: Listable>(&self, entries: &mut [R]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }

    fn compare<R: Listable>(&self, a: &R, b: &R) -> Ordering {
        for (field, direction) in &self.fields {
            let ordering = a.attribute(field).sort_cmp(&b.attribute(field));
            let ordering = match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<_> = self
            .fields
            .iter()
            .map(|(field, direction)| format!("{} {}", field, direction))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
