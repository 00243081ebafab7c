//! Client-side filter, sort and pagination pipeline

pub mod pipeline;
pub mod predicate;
pub mod sort;
pub mod source;
pub mod state;

pub use pipeline::{filter_and_sort, paginate};
pub use predicate::matches;
pub use sort::{compare, sort_items};
pub use source::{LocalSource, RemoteSource, apply_patch};
pub use state::{FilterState, RangeFilter, Selection, SortDirection};
