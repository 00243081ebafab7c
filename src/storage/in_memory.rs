//! In-memory implementation of DataProvider for testing and development
//!
//! Stands in for the backend: `list` runs the same pipeline a server would,
//! and the filter vocabulary is derived from the stored items.

use crate::core::entity::ListItem;
use crate::core::query::{FilterOptions, ListQuery, ListResponse, PriceRange};
use crate::core::service::DataProvider;
use crate::core::store::ListSource;
use crate::filter::source::LocalSource;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;

/// In-memory data provider implementation
///
/// Cloning shares the underlying items.
#[derive(Clone)]
pub struct InMemoryDataProvider<T> {
    items: LocalSource<T>,
}

impl<T: ListItem> InMemoryDataProvider<T> {
    /// Create a provider serving `items`
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: LocalSource::new(items),
        }
    }

    /// Add an item
    pub fn insert(&self, item: T) -> Result<()> {
        self.items.push(item)
    }

    /// All stored items, in storage order
    pub fn all(&self) -> Result<Vec<T>> {
        self.items.items()
    }
}

fn distinct<T: ListItem>(items: &[T], field: &str) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.field_value(field))
        .filter_map(|v| v.as_text().map(|t| t.into_owned()))
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn price_range<T: ListItem>(items: &[T]) -> PriceRange {
    let mut prices = items.iter().filter_map(|item| item.number("price"));
    match prices.next() {
        Some(first) => {
            let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
            PriceRange { min, max }
        }
        None => PriceRange { min: 0.0, max: 0.0 },
    }
}

#[async_trait]
impl<T> DataProvider<T> for InMemoryDataProvider<T>
where
    T: ListItem + Serialize + DeserializeOwned,
{
    async fn list(&self, query: &ListQuery) -> Result<ListResponse<T>> {
        let all = self.items.items()?;
        let filters = query.to_filters(Some(price_range(&all)));
        let page = self.items.fetch_page(&filters, query.limit).await?;

        Ok(ListResponse {
            total_pages: page.total_pages(),
            total_products: page.total_count(),
            items: page.items,
        })
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        let all = self.items.items()?;
        Ok(FilterOptions {
            categories: distinct(&all, "category"),
            brands: distinct(&all, "brand"),
            price_range: price_range(&all),
        })
    }

    async fn update(&self, id: &str, patch: Value) -> Result<T> {
        let updated = self.items.update(id, patch).await?;
        tracing::debug!(resource = T::resource_name(), id = %id, "item updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.items.delete(id).await?;
        tracing::debug!(resource = T::resource_name(), id = %id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MatchmakerError;
    use crate::entities::product::{Product, sample_products};
    use crate::filter::state::SortDirection;
    use serde_json::json;

    fn provider() -> InMemoryDataProvider<Product> {
        InMemoryDataProvider::new(sample_products())
    }

    #[tokio::test]
    async fn test_list_paginates_server_side() {
        let provider = provider();
        let total = provider.all().unwrap().len();
        let query = ListQuery {
            limit: 3,
            ..ListQuery::default()
        };

        let response = provider.list(&query).await.unwrap();
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.total_products, total);
        assert_eq!(response.total_pages, total.div_ceil(3));
    }

    #[tokio::test]
    async fn test_list_applies_query_filters() {
        let provider = provider();
        let query = ListQuery {
            category: Some("Beverages".to_string()),
            max_price: Some(5.0),
            sort_by: "price".to_string(),
            sort_order: SortDirection::Desc,
            limit: 50,
            ..ListQuery::default()
        };

        let response = provider.list(&query).await.unwrap();
        assert!(!response.items.is_empty());
        assert!(
            response
                .items
                .iter()
                .all(|p| p.category == "Beverages" && p.price <= 5.0)
        );
        let prices: Vec<f64> = response.items.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn test_filter_options_derived_from_items() {
        let provider = provider();
        let options = provider.filter_options().await.unwrap();

        assert!(options.categories.contains(&"Beverages".to_string()));
        assert!(options.categories.windows(2).all(|w| w[0] < w[1]));
        assert!(!options.brands.is_empty());
        assert!(options.price_range.min <= options.price_range.max);

        let all = provider.all().unwrap();
        assert!(all.iter().all(|p| p.price >= options.price_range.min));
        assert!(all.iter().all(|p| p.price <= options.price_range.max));
    }

    #[tokio::test]
    async fn test_filter_options_empty() {
        let provider = InMemoryDataProvider::<Product>::new(vec![]);
        let options = provider.filter_options().await.unwrap();
        assert!(options.categories.is_empty());
        assert_eq!(options.price_range, PriceRange { min: 0.0, max: 0.0 });
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let provider = provider();
        let id = provider.all().unwrap()[0].id.clone();

        let updated = provider.update(&id, json!({"price": 1.25})).await.unwrap();
        assert_eq!(updated.price, 1.25);

        provider.delete(&id).await.unwrap();
        let err = provider.delete(&id).await.unwrap_err();
        assert_eq!(MatchmakerError::code_of(&err), "ITEM_NOT_FOUND");
    }
}
