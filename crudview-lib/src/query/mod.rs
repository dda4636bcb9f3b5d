//! Sort parameters and ordering.
//!
//! - [`SortParams`] - the request parameters a list view is rendered with
//! - [`SortState`] - the active sort column and direction derived from them
//! - [`SortMappings`] - sortable keys that are not model attributes
//! - [`OrderBy`] - ordering specification handed to the data layer

mod mappings;
mod order;
mod params;

pub use mappings::SortMappings;
pub use order::Direction;
pub use order::OrderBy;
pub use params::SortParams;
pub use params::SortState;
pub use params::SORT_DIR_PARAM;
pub use params::SORT_PARAM;
