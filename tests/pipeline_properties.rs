//! Property tests for the filter, sort and paginate pipeline
//!
//! Each property is checked exhaustively over the seed catalogs rather than
//! with random inputs: the data sets are small enough to enumerate every
//! filter combination.

use matchmaker::impl_list_item;
use matchmaker::persistence::{InMemoryFilterStore, load_filters};
use matchmaker::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl_list_item!(
    Fruit,
    "fruit",
    search: ["name"],
    sort: ["name", "price"],
    {
        "name" => name,
        "price" => price,
    }
);

fn fruits() -> Vec<Fruit> {
    [("1", "Apple", 5.0), ("2", "Banana", 15.0), ("3", "Cherry", 10.0)]
        .into_iter()
        .map(|(id, name, price)| Fruit {
            id: id.to_string(),
            name: name.to_string(),
            price,
        })
        .collect()
}

fn fruit_names(page: &Page<Fruit>) -> Vec<&str> {
    page.items.iter().map(|f| f.name.as_str()).collect()
}

fn catalog_defaults() -> FilterState {
    MatchmakerConfig::default_config()
        .view("catalog")
        .unwrap()
        .defaults()
}

/// Every filter state reachable by picking one category, one brand or both
fn catalog_filter_grid() -> Vec<FilterState> {
    let products = sample_products();
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    let mut brands: Vec<String> = products.iter().map(|p| p.brand.clone()).collect();
    categories.sort();
    categories.dedup();
    brands.sort();
    brands.dedup();

    let mut grid = vec![catalog_defaults()];
    for category in &categories {
        let mut f = catalog_defaults();
        f.select("category", Selection::value(category.clone()));
        grid.push(f.clone());
        for brand in &brands {
            let mut g = f.clone();
            g.select("brand", Selection::value(brand.clone()));
            grid.push(g);
        }
    }
    grid
}

// =============================================================================
// Example scenarios
// =============================================================================

#[test]
fn scenario_sort_by_price_first_page() {
    let filters = FilterState::new().sorted_by("price", SortDirection::Asc);
    let page = paginate(&fruits(), &filters, 2);

    assert_eq!(fruit_names(&page), vec!["Apple", "Cherry"]);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.total_count(), 3);
}

#[test]
fn scenario_search_is_case_insensitive_substring() {
    let mut filters = FilterState::new();
    filters.set_search("AN");
    let page = paginate(&fruits(), &filters, 2);

    assert_eq!(fruit_names(&page), vec!["Banana"]);
    assert_eq!(page.total_count(), 1);
}

#[test]
fn scenario_price_range_excludes() {
    let mut filters = FilterState::new().with_range("price", 0.0, 100.0);
    filters.set_range("price", 0.0, 12.0);
    let page = paginate(&fruits(), &filters, 2);

    assert_eq!(page.total_count(), 2);
    assert!(!fruit_names(&page).contains(&"Banana"));
}

#[test]
fn scenario_page_past_end_clamps() {
    let mut filters = FilterState::new().sorted_by("price", SortDirection::Asc);
    filters.set_page(5);
    let page = paginate(&fruits(), &filters, 2);

    assert_eq!(page.page(), 2);
    assert_eq!(fruit_names(&page), vec!["Banana"]);
}

#[test]
fn scenario_malformed_persisted_json_falls_back() {
    let store = InMemoryFilterStore::new();
    store.save("catalog-filters", "{not valid").unwrap();

    let loaded = load_filters(&store, "catalog", &catalog_defaults());
    assert_eq!(loaded, catalog_defaults());

    let page = paginate(&sample_products(), &loaded, 12);
    assert_eq!(page.total_count(), sample_products().len());
    assert_eq!(page.page(), 1);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn property_paginate_is_idempotent() {
    let products = sample_products();
    for filters in catalog_filter_grid() {
        for size in [1, 3, 12] {
            assert_eq!(
                paginate(&products, &filters, size),
                paginate(&products, &filters, size)
            );
        }
    }
}

#[test]
fn property_narrowing_never_grows_the_result() {
    let products = sample_products();
    let base = filter_and_sort(&products, &catalog_defaults()).len();

    for filters in catalog_filter_grid() {
        let count = filter_and_sort(&products, &filters).len();
        assert!(count <= base);

        let mut narrower = filters.clone();
        narrower.select("brand", Selection::value("Greenway"));
        assert!(filter_and_sort(&products, &narrower).len() <= count);
    }
}

#[test]
fn property_pages_cover_the_result_exactly() {
    let products = sample_products();
    for filters in catalog_filter_grid() {
        let expected = filter_and_sort(&products, &filters);
        for size in 1..=13 {
            let mut collected = Vec::new();
            let first = paginate(&products, &filters, size);
            for page in 1..=first.total_pages() {
                let mut f = filters.clone();
                f.set_page(page);
                collected.extend(paginate(&products, &f, size).items);
            }
            assert_eq!(collected, expected, "page size {}", size);
        }
    }
}

#[test]
fn property_sort_is_stable_in_both_directions() {
    let products = sample_products();
    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let filters = FilterState::new().sorted_by("category", direction);
        let sorted = filter_and_sort(&products, &filters);

        for category in ["Beverages", "Snacks", "Household", "Personal Care"] {
            let input: Vec<&str> = products
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.as_str())
                .collect();
            let output: Vec<&str> = sorted
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(input, output, "{} {:?}", category, direction);
        }
    }
}

#[test]
fn property_reset_restores_defaults() {
    let defaults = catalog_defaults();
    let mut filters = defaults.clone();
    filters.set_search("tea");
    filters.select("category", Selection::value("Beverages"));
    filters.set_range("price", 3.0, 1.0);
    filters.toggle_sort("price");
    filters.toggle_sort("price");
    filters.set_page(4);

    filters.reset_to(&defaults);
    assert_eq!(filters, defaults);
    assert_eq!(filters.page, 1);
}

#[test]
fn property_range_min_never_exceeds_max() {
    let inputs = [
        (0.0, 10.0),
        (10.0, 0.0),
        (-50.0, 2000.0),
        (2000.0, -50.0),
        (f64::NAN, 5.0),
        (5.0, f64::NAN),
        (7.5, 7.5),
    ];
    for (min, max) in inputs {
        let mut filters = catalog_defaults();
        filters.set_range("price", min, max);
        let range = filters.ranges["price"];
        assert!(range.min <= range.max, "({}, {}) -> {:?}", min, max, range);
        assert!(range.min >= range.floor && range.max <= range.ceiling);
    }

    // Ranges the view never declared take their bounds from the input
    for (min, max) in inputs {
        let mut filters = catalog_defaults();
        filters.set_range("rating", min, max);
        let range = filters.ranges["rating"];
        assert!(range.min <= range.max, "({}, {}) -> {:?}", min, max, range);
        assert!(!range.is_narrowed());
    }
}
