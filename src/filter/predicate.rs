//! Filter predicate evaluation
//!
//! `matches` decides whether one item passes every active filter of a
//! `FilterState`. It never fails and never mutates its inputs.

use super::state::{FilterState, RangeFilter, Selection};
use crate::core::entity::ListItem;

/// True if `item` passes search, all categorical and all range filters
pub fn matches<T: ListItem>(item: &T, filters: &FilterState) -> bool {
    matches_search(item, &filters.search)
        && filters
            .categorical
            .iter()
            .all(|(field, selection)| matches_category(item, field, selection))
        && filters
            .ranges
            .iter()
            .all(|(field, range)| matches_range(item, field, range))
}

/// Case-insensitive substring search over the item's searchable fields
pub fn matches_search<T: ListItem>(item: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    T::searchable_fields()
        .iter()
        .any(|field| item.text(field).to_lowercase().contains(&needle))
}

/// Exact, case-sensitive equality unless the selection is "all"
pub fn matches_category<T: ListItem>(item: &T, field: &str, selection: &Selection) -> bool {
    match selection.as_value() {
        None => true,
        Some(wanted) => item
            .field_value(field)
            .and_then(|v| v.as_text().map(|t| t == wanted))
            .unwrap_or(false),
    }
}

/// Inclusive range check
///
/// An undefined value only fails a narrowed range.
pub fn matches_range<T: ListItem>(item: &T, field: &str, range: &RangeFilter) -> bool {
    match item.number(field) {
        Some(value) => range.contains(value),
        None => !range.is_narrowed(),
    }
}
