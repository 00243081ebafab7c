//! The source a list view reads its pages from

use crate::core::query::Page;
use crate::filter::state::FilterState;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for anything a list view can page through
///
/// Implemented both by in-memory arrays (filtering, sorting and pagination
/// computed locally) and by remote providers (all three delegated to the
/// server). The view cannot tell which one it talks to.
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    /// Produce the page selected by `filters`
    ///
    /// # Parameters
    /// - `filters`: Current search, filters, sort and requested page
    /// - `page_size`: Number of items per page
    ///
    /// # Returns
    /// The page, with the requested page number clamped into range
    async fn fetch_page(&self, filters: &FilterState, page_size: usize) -> Result<Page<T>>;

    /// Apply a partial update to one item
    async fn update(&self, id: &str, patch: Value) -> Result<T>;

    /// Delete one item
    async fn delete(&self, id: &str) -> Result<()>;
}
