//! Filter, sort and paginate pipeline
//!
//! ```text
//! items ──▶ matches() ──▶ sort_items() ──▶ clamp page ──▶ slice ──▶ Page<T>
//! ```
//!
//! Everything here is pure: the same inputs always yield the same page, so a
//! view may re-run it on every keystroke.

use super::predicate::matches;
use super::sort::sort_items;
use super::state::FilterState;
use crate::core::entity::ListItem;
use crate::core::query::{Page, PaginationMeta};

/// Items passing every filter, sorted, in stable order
pub fn filter_and_sort<T: ListItem>(items: &[T], filters: &FilterState) -> Vec<T> {
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| matches(*item, filters))
        .cloned()
        .collect();
    sort_items(&mut filtered, &filters.sort_by, filters.sort_direction);
    filtered
}

/// The visible page for `filters`
///
/// `total_pages` is at least 1 even for an empty result, and a requested page
/// outside `[1, total_pages]` snaps to the nearest valid page.
pub fn paginate<T: ListItem>(items: &[T], filters: &FilterState, page_size: usize) -> Page<T> {
    let sorted = filter_and_sort(items, filters);
    let pagination = PaginationMeta::new(filters.page, page_size, sorted.len());
    let (start, end) = pagination.bounds();

    Page {
        items: sorted[start..end].to_vec(),
        pagination,
    }
}
