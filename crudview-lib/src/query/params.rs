//! Request parameters that carry the sort state.

use url::form_urlencoded;

use super::Direction;

/// Name of the parameter holding the sort key.
pub const SORT_PARAM: &str = "sort";

/// Name of the parameter holding the sort direction.
pub const SORT_DIR_PARAM: &str = "sort_dir";

/// The query parameters of the current list request.
///
/// All pairs are kept in their original order so that sort links can carry
/// unrelated parameters (search terms, page numbers) along.
///
/// # Example
///
/// ```
/// use crudview_lib::query::Direction;
/// use crudview_lib::query::SortParams;
///
/// let params = SortParams::from_query("q=abc&sort=children&sort_dir=desc");
/// let state = params.sort_state();
/// assert_eq!(state.column.as_deref(), Some("children"));
/// assert_eq!(state.direction, Some(Direction::Desc));
///
/// assert_eq!(
///     params.sort_query("name", Direction::Asc),
///     "q=abc&sort=name&sort_dir=asc"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pairs: Vec<(String, String)>,
}

impl SortParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an URL query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Sets a parameter, replacing any previous value (builder pattern).
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets the sort key and direction (builder pattern).
    pub fn with_sort(self, key: impl Into<String>, direction: Direction) -> Self {
        self.with_param(SORT_PARAM, key)
            .with_param(SORT_DIR_PARAM, direction.as_str())
    }

    /// Sets a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Returns the first value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all parameter pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Derives the sort state. An empty `sort` value means no sorting and
    /// unrecognized `sort_dir` values are dropped.
    pub fn sort_state(&self) -> SortState {
        let column = self
            .get(SORT_PARAM)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let direction = self.get(SORT_DIR_PARAM).and_then(Direction::parse);
        SortState { column, direction }
    }

    /// Encodes these parameters with `sort` and `sort_dir` replaced.
    pub fn sort_query(&self, key: &str, direction: Direction) -> String {
        let merged = self
            .clone()
            .with_param(SORT_PARAM, key)
            .with_param(SORT_DIR_PARAM, direction.as_str());
        merged.to_query()
    }

    /// Encodes the parameters as an URL query string.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// The active sort column and direction of a list request.
///
/// At most one column is active. A missing direction reads as ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// The requested sort key.
    pub column: Option<String>,
    /// The requested direction, if valid.
    pub direction: Option<Direction>,
}

impl SortState {
    /// Returns `true` if `key` is the active sort column.
    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }

    /// Returns the direction `key` is currently sorted in, if it is active.
    pub fn current_direction(&self, key: &str) -> Option<Direction> {
        if self.is_active(key) {
            Some(self.direction.unwrap_or(Direction::Asc))
        } else {
            None
        }
    }

    /// Returns the direction a sort link on `key` should request.
    pub fn toggled_direction(&self, key: &str) -> Direction {
        match self.current_direction(key) {
            Some(Direction::Asc) => Direction::Desc,
            _ => Direction::Asc,
        }
    }
}
