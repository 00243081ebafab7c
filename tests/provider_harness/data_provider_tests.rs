//! Macro-generated test suite for `DataProvider<Product>` contract validation.
//!
//! The `data_provider_tests!` macro generates a test module that validates any
//! `DataProvider<Product>` serving the seed catalog: server-side filtering,
//! sorting and pagination, the filter vocabulary, and mutations.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod provider_harness;
//!
//! use provider_harness::*;
//!
//! data_provider_tests!(catalog_provider());
//! ```
//!
//! # Generated Tests
//!
//! ## Listing
//! - `test_list_first_page`: default sort, page size honored, totals reported
//! - `test_list_filters_and_sorts`: category plus max price, price descending
//! - `test_list_search_is_case_insensitive`
//! - `test_list_extra_categorical`: filter outside the dedicated parameters
//! - `test_list_clamps_page`: page past the end returns the last page
//! - `test_list_empty_result`: zero matches still report one page
//! - `test_price_ranges_match_local_mode`: price bounds inside, at and outside
//!   the catalog's prices give the same items as the local pipeline
//!
//! ## Vocabulary
//! - `test_filter_options`: sorted distinct categories, price bounds
//!
//! ## Mutations
//! - `test_update_merges_patch`
//! - `test_update_rejects_id_change`
//! - `test_update_nonexistent`
//! - `test_delete_existing_then_nonexistent`

/// Generate a full `DataProvider<Product>` conformance test suite.
///
/// `$factory` must evaluate to a provider serving a fresh copy of
/// `sample_products()`. It is re-evaluated for each test to ensure isolation
/// and may contain `.await`.
#[macro_export]
macro_rules! data_provider_tests {
    ($factory:expr) => {
        mod data_provider_contract_tests {
            use super::*;
            use matchmaker::core::query::{ListQuery, PriceRange};
            use matchmaker::config::MatchmakerConfig;
            use matchmaker::core::service::DataProvider;
            use matchmaker::core::store::ListSource;
            use matchmaker::entities::product::{Product, sample_products};
            use matchmaker::filter::source::{LocalSource, RemoteSource};
            use matchmaker::filter::state::SortDirection;
            use serde_json::json;

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_list_first_page() {
                let provider = $factory;
                let response = provider.list(&query(5)).await.unwrap();

                assert_eq!(response.total_products, 12);
                assert_eq!(response.total_pages, 3);
                let names: Vec<&str> = response.items.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "Bamboo Paper Towels",
                        "Charcoal Toothpaste",
                        "Cold Brew Coffee",
                        "Dark Chocolate Almonds",
                        "Eco Dish Soap",
                    ]
                );
            }

            #[tokio::test]
            async fn test_list_filters_and_sorts() {
                let provider = $factory;
                let q = ListQuery {
                    category: Some("Beverages".to_string()),
                    max_price: Some(5.0),
                    sort_by: "price".to_string(),
                    sort_order: SortDirection::Desc,
                    ..query(20)
                };

                let response = provider.list(&q).await.unwrap();
                let prices: Vec<f64> = response.items.iter().map(|p| p.price).collect();
                assert_eq!(prices, vec![4.49, 3.99, 3.29, 1.99]);
                assert_eq!(response.total_pages, 1);
            }

            #[tokio::test]
            async fn test_list_search_is_case_insensitive() {
                let provider = $factory;
                let q = ListQuery {
                    search: Some("SOAP".to_string()),
                    ..query(20)
                };

                let response = provider.list(&q).await.unwrap();
                assert_eq!(ids(&response.items), vec!["prod-008", "prod-010"]);
            }

            #[tokio::test]
            async fn test_list_extra_categorical() {
                let provider = $factory;
                let mut q = query(20);
                q.extra
                    .insert("manufacturer".to_string(), "Brightclean Labs".to_string());

                let response = provider.list(&q).await.unwrap();
                assert_eq!(response.total_products, 3);
                assert!(response.items.iter().all(|p| p.manufacturer == "Brightclean Labs"));
            }

            #[tokio::test]
            async fn test_list_clamps_page() {
                let provider = $factory;
                let q = ListQuery {
                    page: 99,
                    ..query(5)
                };

                let response = provider.list(&q).await.unwrap();
                assert_eq!(response.total_pages, 3);
                assert_eq!(response.items.len(), 2);
            }

            #[tokio::test]
            async fn test_list_empty_result() {
                let provider = $factory;
                let q = ListQuery {
                    search: Some("zzz".to_string()),
                    ..query(5)
                };

                let response = provider.list(&q).await.unwrap();
                assert!(response.items.is_empty());
                assert_eq!(response.total_products, 0);
                assert_eq!(response.total_pages, 1);
            }

            #[tokio::test]
            async fn test_price_ranges_match_local_mode() {
                let defaults = MatchmakerConfig::default_config()
                    .view("catalog")
                    .unwrap()
                    .defaults();
                let local = LocalSource::new(sample_products());
                let remote = RemoteSource::<Product, _>::new($factory);

                for (min, max) in [
                    (2.0, 4.0),
                    (3.99, 3.99),
                    (8.49, 1000.0),
                    (9.0, 1000.0),
                    (58.49, 108.49),
                    (0.0, 1.0),
                ] {
                    let mut filters = defaults.clone();
                    filters.set_range("price", min, max);

                    let expected = local.fetch_page(&filters, 20).await.unwrap();
                    let actual = remote.fetch_page(&filters, 20).await.unwrap();
                    assert_eq!(
                        actual.total_count(),
                        expected.total_count(),
                        "price {}..={}",
                        min,
                        max
                    );
                    assert_eq!(ids(&actual.items), ids(&expected.items));
                }
            }

            // ==================================================================
            // Vocabulary
            // ==================================================================

            #[tokio::test]
            async fn test_filter_options() {
                let provider = $factory;
                let options = provider.filter_options().await.unwrap();

                assert_eq!(
                    options.categories,
                    vec!["Beverages", "Household", "Personal Care", "Snacks"]
                );
                assert!(options.brands.contains(&"Greenway".to_string()));
                assert_eq!(options.price_range, PriceRange { min: 1.49, max: 8.49 });
            }

            // ==================================================================
            // Mutations
            // ==================================================================

            #[tokio::test]
            async fn test_update_merges_patch() {
                let provider = $factory;
                let updated = provider
                    .update("prod-005", json!({"stock": 7, "rating": null}))
                    .await
                    .unwrap();

                assert_eq!(updated.stock, 7);
                assert_eq!(updated.rating, None);
                assert_eq!(updated.name, "Sea Salt Kettle Chips");

                let q = ListQuery {
                    search: Some("kettle".to_string()),
                    ..query(5)
                };
                let response = provider.list(&q).await.unwrap();
                assert_eq!(response.items[0].stock, 7);
            }

            #[tokio::test]
            async fn test_update_rejects_id_change() {
                let provider = $factory;
                let result = provider.update("prod-005", json!({"id": "prod-999"})).await;
                assert!(result.is_err());

                let response = provider.list(&query(20)).await.unwrap();
                assert!(ids(&response.items).contains(&"prod-005"));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let provider = $factory;
                let err = provider
                    .update("prod-404", json!({"stock": 1}))
                    .await
                    .unwrap_err();
                assert_code(&err, "ITEM_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_delete_existing_then_nonexistent() {
                let provider = $factory;
                provider.delete("prod-001").await.unwrap();

                let response = provider.list(&query(20)).await.unwrap();
                assert_eq!(response.total_products, 11);
                assert!(!ids(&response.items).contains(&"prod-001"));

                let err = provider.delete("prod-001").await.unwrap_err();
                assert_code(&err, "ITEM_NOT_FOUND");
            }
        }
    };
}
