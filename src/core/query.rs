//! Query parameters, provider responses and pagination types

use crate::filter::state::{FilterState, RangeFilter, Selection, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Categorical filters that have a dedicated query parameter
const CATEGORY: &str = "category";
const BRAND: &str = "brand";
/// Range filter mapped onto `minPrice`/`maxPrice`
const PRICE: &str = "price";

/// Query sent to a data provider when filtering is delegated server-side
///
/// # Example
/// ```text
/// GET /products?page=2&limit=12&search=oat&category=Dairy&minPrice=2&maxPrice=8&sortBy=price&sortOrder=desc
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    pub sort_by: String,

    pub sort_order: SortDirection,

    /// Other categorical filters (field -> exact value)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            category: None,
            brand: None,
            min_price: None,
            max_price: None,
            sort_by: "name".to_string(),
            sort_order: SortDirection::Asc,
            extra: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Translate a view's filter state into a provider query
    ///
    /// Inactive filters ("all", empty search, full ranges) are left out.
    pub fn from_filters(filters: &FilterState, page_size: usize) -> Self {
        let mut query = Self {
            page: filters.page.max(1),
            limit: page_size.max(1),
            sort_by: filters.sort_by.clone(),
            sort_order: filters.sort_direction,
            ..Self::default()
        };

        let search = filters.search.trim();
        if !search.is_empty() {
            query.search = Some(search.to_string());
        }

        for (field, selection) in &filters.categorical {
            let Selection::Value(value) = selection else {
                continue;
            };
            match field.as_str() {
                CATEGORY => query.category = Some(value.clone()),
                BRAND => query.brand = Some(value.clone()),
                _ => {
                    query.extra.insert(field.clone(), value.clone());
                }
            }
        }

        if let Some(range) = filters.ranges.get(PRICE) {
            if range.is_narrowed() {
                query.min_price = Some(range.min);
                query.max_price = Some(range.max);
            }
        }

        query
    }

    /// Rebuild the filter state a server-side provider evaluates
    pub fn to_filters(&self, price_bounds: Option<PriceRange>) -> FilterState {
        let mut filters = FilterState::new();
        filters.search = self.search.clone().unwrap_or_default();
        filters.sort_by = self.sort_by.clone();
        filters.sort_direction = self.sort_order;
        filters.page = self.page.max(1);

        if let Some(category) = &self.category {
            filters
                .categorical
                .insert(CATEGORY.to_string(), Selection::value(category.clone()));
        }
        if let Some(brand) = &self.brand {
            filters
                .categorical
                .insert(BRAND.to_string(), Selection::value(brand.clone()));
        }
        for (field, value) in &self.extra {
            filters
                .categorical
                .insert(field.clone(), Selection::value(value.clone()));
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let bounds = price_bounds.unwrap_or(PriceRange {
                min: f64::MIN,
                max: f64::MAX,
            });
            // An absent side stays open; requested bounds widen the data's bounds
            let min = self.min_price.unwrap_or(f64::NEG_INFINITY);
            let max = self.max_price.unwrap_or(f64::INFINITY);
            let mut range = RangeFilter::full(bounds.min.min(min), bounds.max.max(max));
            range.set(min, max);
            filters.ranges.insert(PRICE.to_string(), range);
        }

        filters
    }

    /// Query-string pairs, skipping absent parameters
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(brand) = &self.brand {
            pairs.push(("brand".to_string(), brand.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        pairs.push(("sortBy".to_string(), self.sort_by.clone()));
        pairs.push(("sortOrder".to_string(), self.sort_order.to_string()));
        for (field, value) in &self.extra {
            pairs.push((field.clone(), value.clone()));
        }
        pairs
    }

    /// Parse query-string pairs as produced by `to_pairs`
    ///
    /// Unknown keys become `extra` filters. Malformed numbers fall back to
    /// their defaults (page 1, limit 20, no price bound).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "page" => query.page = value.parse().unwrap_or(1).max(1),
                "limit" => query.limit = value.parse().unwrap_or(20).max(1),
                "search" => query.search = Some(value),
                "category" => query.category = Some(value),
                "brand" => query.brand = Some(value),
                "minPrice" => query.min_price = value.parse().ok(),
                "maxPrice" => query.max_price = value.parse().ok(),
                "sortBy" => query.sort_by = value,
                "sortOrder" => query.sort_order = SortDirection::parse(&value),
                other => {
                    query.extra.insert(other.to_string(), value);
                }
            }
        }
        query
    }
}

/// A page as returned by a data provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_products: usize,
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Dynamic vocabulary for categorical filters and bounds for range sliders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price_range: PriceRange,
}

/// One page of a list view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The items on this page
    pub items: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    /// Total number of pages (at least 1)
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    /// Total number of items after filters
    pub fn total_count(&self) -> usize {
        self.pagination.total
    }

    /// The effective page number after clamping
    pub fn page(&self) -> usize {
        self.pagination.page
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, never below 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute metadata for `total` items, clamping `page` into range
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit).max(1);
        Self::with_total_pages(page, limit, total, total_pages)
    }

    /// Metadata with a page count decided elsewhere (e.g. by a server)
    pub fn with_total_pages(page: usize, limit: usize, total: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            limit: limit.max(1),
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Half-open index range of this page within the full result
    pub fn bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.limit).min(self.total);
        let end = (start + self.limit).min(self.total);
        (start, end)
    }
}
