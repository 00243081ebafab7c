//! Filter state owned by a single list view
//!
//! A `FilterState` is created from the view's defaults when the view mounts,
//! mutated in place by user interaction and optionally persisted between
//! sessions. Every mutator except page navigation sends the view back to
//! page 1.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire form of the "no constraint" categorical selection
pub const ALL: &str = "all";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The other direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse `asc`/`desc` (case-insensitive); anything else is ascending
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorical filter selection
///
/// Serialized as a plain string where `"all"` is the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    pub fn value(v: impl Into<String>) -> Self {
        Selection::from(v.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The selected value, or `None` for the sentinel
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Value(v) => Some(v),
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        if s == ALL {
            Selection::All
        } else {
            Selection::Value(s)
        }
    }
}

impl From<Selection> for String {
    fn from(s: Selection) -> Self {
        match s {
            Selection::All => ALL.to_string(),
            Selection::Value(v) => v,
        }
    }
}

/// Inclusive numeric range with the full bounds it was declared with
///
/// `floor..=ceiling` is the widest selection (the untouched slider);
/// `min..=max` is what the user picked. `min <= max` always holds.
/// Infinite bounds serialize as `null` and read back as open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    #[serde(deserialize_with = "lower_bound")]
    pub min: f64,
    #[serde(deserialize_with = "upper_bound")]
    pub max: f64,
    #[serde(deserialize_with = "lower_bound")]
    pub floor: f64,
    #[serde(deserialize_with = "upper_bound")]
    pub ceiling: f64,
}

fn lower_bound<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
}

fn upper_bound<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl RangeFilter {
    /// A range covering its full bounds
    ///
    /// A NaN bound is unbounded on that side.
    pub fn full(floor: f64, ceiling: f64) -> Self {
        let floor = if floor.is_nan() { f64::NEG_INFINITY } else { floor };
        let ceiling = if ceiling.is_nan() { f64::INFINITY } else { ceiling };
        let (floor, ceiling) = ordered(floor, ceiling);
        Self {
            min: floor,
            max: ceiling,
            floor,
            ceiling,
        }
    }

    /// Select `[min, max]`, swapping inverted input and clamping into bounds
    ///
    /// A NaN bound leaves that side open.
    pub fn set(&mut self, min: f64, max: f64) {
        let min = if min.is_nan() { self.floor } else { min };
        let max = if max.is_nan() { self.ceiling } else { max };
        let (min, max) = ordered(min, max);
        self.min = clamp(min, self.floor, self.ceiling);
        self.max = clamp(max, self.floor, self.ceiling);
    }

    /// True when the selection excludes part of the full bounds
    pub fn is_narrowed(&self) -> bool {
        self.min > self.floor || self.max < self.ceiling
    }

    /// Inclusive containment
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Move the full bounds, keeping a narrowed selection inside them
    ///
    /// An untouched range follows the new bounds.
    pub fn rebound(&mut self, floor: f64, ceiling: f64) {
        let narrowed = self.is_narrowed();
        let (min, max) = (self.min, self.max);
        *self = RangeFilter::full(floor, ceiling);
        if narrowed {
            self.set(min, max);
        }
    }

    /// Restore the invariants on a range that came from outside
    pub fn normalized(self) -> Self {
        let mut range = Self::full(self.floor, self.ceiling);
        range.set(self.min, self.max);
        range
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Current search, filters, sort and page of one list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free text, matched case-insensitively against searchable fields
    pub search: String,

    /// Categorical filters (field name -> selection)
    pub categorical: BTreeMap<String, Selection>,

    /// Range filters (field name -> range)
    pub ranges: BTreeMap<String, RangeFilter>,

    /// Field to order by
    pub sort_by: String,

    /// Sort direction
    pub sort_direction: SortDirection,

    /// 1-based page number
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            categorical: BTreeMap::new(),
            ranges: BTreeMap::new(),
            sort_by: "name".to_string(),
            sort_direction: SortDirection::Asc,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Builders for a view's defaults ===

    /// Declare a categorical filter, initially set to "all"
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categorical.insert(name.into(), Selection::All);
        self
    }

    /// Declare a range filter covering `[floor, ceiling]`
    pub fn with_range(mut self, name: impl Into<String>, floor: f64, ceiling: f64) -> Self {
        self.ranges
            .insert(name.into(), RangeFilter::full(floor, ceiling));
        self
    }

    /// Set the default sort
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = field.into();
        self.sort_direction = direction;
        self
    }

    // === Mutators ===

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn select(&mut self, name: impl Into<String>, selection: Selection) {
        self.categorical.insert(name.into(), selection);
        self.page = 1;
    }

    /// Update a range filter; an undeclared range is declared with these bounds
    pub fn set_range(&mut self, name: &str, min: f64, max: f64) {
        match self.ranges.get_mut(name) {
            Some(range) => range.set(min, max),
            None => {
                self.ranges
                    .insert(name.to_string(), RangeFilter::full(min, max));
            }
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort_by = field.into();
        self.sort_direction = direction;
        self.page = 1;
    }

    /// Sort-header click: same field flips direction, new field starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_by = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Move a declared range's bounds (e.g. from provider filter options)
    ///
    /// Does not reset the page: the selection only changes if it fell
    /// outside the new bounds. Undeclared ranges are ignored.
    pub fn rebound_range(&mut self, name: &str, floor: f64, ceiling: f64) {
        if let Some(range) = self.ranges.get_mut(name) {
            range.rebound(floor, ceiling);
        }
    }

    /// Page navigation; the only mutator that keeps the other filters' page
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Restore the view's defaults
    pub fn reset_to(&mut self, defaults: &FilterState) {
        *self = defaults.clone();
        self.page = 1;
    }

    /// True when search, categorical and range filters are all inactive
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty()
            && self.categorical.values().all(Selection::is_all)
            && self.ranges.values().all(|r| !r.is_narrowed())
    }

    /// Repair a state that came from outside (persistence, deserialization)
    pub fn normalized(mut self) -> Self {
        self.ranges = self
            .ranges
            .into_iter()
            .map(|(name, range)| (name, range.normalized()))
            .collect();
        self.page = self.page.max(1);
        self
    }
}
