//! Service trait for the external data provider

use crate::core::query::{FilterOptions, ListQuery, ListResponse};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Service trait for a product, match, order or partnership backend
///
/// Implementations may be a real REST API or a mock array. The list view
/// pipeline is agnostic to which one it gets.
#[async_trait]
pub trait DataProvider<T>: Send + Sync {
    /// List one page of items, filtered, sorted and paginated server-side
    async fn list(&self, query: &ListQuery) -> Result<ListResponse<T>>;

    /// Vocabulary for categorical filters and bounds for range sliders
    async fn filter_options(&self) -> Result<FilterOptions>;

    /// Apply a partial update to one item and return the stored result
    async fn update(&self, id: &str, patch: Value) -> Result<T>;

    /// Delete one item
    async fn delete(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::PriceRange;

    struct EmptyProvider;

    #[async_trait]
    impl DataProvider<String> for EmptyProvider {
        async fn list(&self, _query: &ListQuery) -> Result<ListResponse<String>> {
            Ok(ListResponse {
                items: vec![],
                total_pages: 1,
                total_products: 0,
            })
        }

        async fn filter_options(&self) -> Result<FilterOptions> {
            Ok(FilterOptions {
                categories: vec![],
                brands: vec![],
                price_range: PriceRange { min: 0.0, max: 0.0 },
            })
        }

        async fn update(&self, id: &str, _patch: Value) -> Result<String> {
            Ok(id.to_string())
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    // The trait can be used behind a trait object
    #[tokio::test]
    async fn test_provider_as_trait_object() {
        let provider: Box<dyn DataProvider<String>> = Box::new(EmptyProvider);
        let page = provider.list(&ListQuery::default()).await.unwrap();
        assert_eq!(page.total_products, 0);
        assert_eq!(
            provider.update("x", Value::Null).await.unwrap(),
            "x".to_string()
        );
    }
}
