//! `ListSource` implementations: local arrays and remote providers

use super::pipeline::paginate;
use super::state::FilterState;
use crate::core::entity::ListItem;
use crate::core::error::{
    MatchmakerError, MatchmakerResult, ProviderError, StorageError, ValidationError,
};
use crate::core::query::{ListQuery, Page, PaginationMeta};
use crate::core::service::DataProvider;
use crate::core::store::ListSource;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

/// Merge a JSON patch into an item, refusing to change its id
///
/// Object patches replace top-level keys; `null` values clear optional fields.
/// A value of the wrong type is reported against the key that carried it.
pub fn apply_patch<T>(item: &T, patch: Value) -> MatchmakerResult<T>
where
    T: ListItem + Serialize + DeserializeOwned,
{
    let Value::Object(changes) = patch else {
        return Err(ValidationError::InvalidJson {
            message: "patch must be a JSON object".to_string(),
        }
        .into());
    };

    if let Some(id) = changes.get("id") {
        if id.as_str() != Some(item.id()) {
            return Err(ValidationError::ImmutableField {
                field: "id".to_string(),
            }
            .into());
        }
    }

    let original = serde_json::to_value(item)?;
    let Value::Object(fields) = original else {
        return Err(ValidationError::InvalidJson {
            message: format!("{} does not serialize to an object", T::resource_name()),
        }
        .into());
    };

    for (key, value) in &changes {
        let mut single = fields.clone();
        single.insert(key.clone(), value.clone());
        if let Err(e) = serde_json::from_value::<T>(Value::Object(single)) {
            return Err(ValidationError::FieldError {
                field: key.clone(),
                message: e.to_string(),
            }
            .into());
        }
    }

    let mut merged = fields;
    merged.extend(changes);
    Ok(serde_json::from_value(Value::Object(merged))?)
}

fn lock_error(e: impl std::fmt::Display) -> anyhow::Error {
    MatchmakerError::from(StorageError::LockPoisoned {
        message: e.to_string(),
    })
    .into()
}

/// In-memory collection paged locally
///
/// Cloning shares the underlying array.
#[derive(Clone)]
pub struct LocalSource<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: ListItem> LocalSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Snapshot of the whole collection, in storage order
    pub fn items(&self) -> Result<Vec<T>> {
        let items = self.items.read().map_err(lock_error)?;
        Ok(items.clone())
    }

    /// Append an item
    pub fn push(&self, item: T) -> Result<()> {
        let mut items = self.items.write().map_err(lock_error)?;
        items.push(item);
        Ok(())
    }
}

#[async_trait]
impl<T> ListSource<T> for LocalSource<T>
where
    T: ListItem + Serialize + DeserializeOwned,
{
    async fn fetch_page(&self, filters: &FilterState, page_size: usize) -> Result<Page<T>> {
        let items = self.items.read().map_err(lock_error)?;
        Ok(paginate(&items, filters, page_size))
    }

    async fn update(&self, id: &str, patch: Value) -> Result<T> {
        let mut items = self.items.write().map_err(lock_error)?;
        let slot = items.iter_mut().find(|item| item.id() == id).ok_or_else(|| {
            MatchmakerError::from(ProviderError::NotFound {
                resource: T::resource_name().to_string(),
                id: id.to_string(),
            })
        })?;

        let updated = apply_patch(slot, patch)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().map_err(lock_error)?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(MatchmakerError::from(ProviderError::NotFound {
                resource: T::resource_name().to_string(),
                id: id.to_string(),
            })
            .into());
        }
        Ok(())
    }
}

/// Remote provider paged server-side
///
/// Filtering, sorting and pagination are delegated: the page, `total_pages`
/// and `total_count` all come from the provider's response.
pub struct RemoteSource<T, P> {
    provider: P,
    _item: PhantomData<fn() -> T>,
}

impl<T, P: DataProvider<T>> RemoteSource<T, P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _item: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<T, P> ListSource<T> for RemoteSource<T, P>
where
    T: Send + 'static,
    P: DataProvider<T>,
{
    async fn fetch_page(&self, filters: &FilterState, page_size: usize) -> Result<Page<T>> {
        let query = ListQuery::from_filters(filters, page_size);
        let response = self.provider.list(&query).await?;

        let pagination = PaginationMeta::with_total_pages(
            query.page,
            query.limit,
            response.total_products,
            response.total_pages,
        );

        Ok(Page {
            items: response.items,
            pagination,
        })
    }

    async fn update(&self, id: &str, patch: Value) -> Result<T> {
        self.provider.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.provider.delete(id).await
    }
}
