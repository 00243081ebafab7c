//! Shared test harness for data provider testing
//!
//! Provides the seed catalog, an axum mock backend serving it over HTTP, and
//! the `data_provider_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod provider_harness;
//! use provider_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod data_provider_tests;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use matchmaker::core::error::MatchmakerError;
use matchmaker::core::query::{FilterOptions, ListQuery, ListResponse};
use matchmaker::core::service::DataProvider;
use matchmaker::entities::product::{Product, sample_products};
use matchmaker::storage::InMemoryDataProvider;
use serde_json::Value;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Provider over a fresh copy of the seed catalog
pub fn catalog_provider() -> InMemoryDataProvider<Product> {
    InMemoryDataProvider::new(sample_products())
}

/// Query with everything at its defaults except `limit`
pub fn query(limit: usize) -> ListQuery {
    ListQuery {
        limit,
        ..ListQuery::default()
    }
}

// ---------------------------------------------------------------------------
// Mock backend
// ---------------------------------------------------------------------------

type Backend = InMemoryDataProvider<Product>;
type ApiError = (StatusCode, String);

fn api_error(err: anyhow::Error) -> ApiError {
    let status = match MatchmakerError::code_of(&err) {
        "ITEM_NOT_FOUND" => StatusCode::NOT_FOUND,
        "VALIDATION_ERROR" => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

async fn list_products(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Product>>, ApiError> {
    let query = ListQuery::from_pairs(params);
    backend.list(&query).await.map(Json).map_err(api_error)
}

async fn filter_options(State(backend): State<Backend>) -> Result<Json<FilterOptions>, ApiError> {
    backend.filter_options().await.map(Json).map_err(api_error)
}

async fn update_product(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<Product>, ApiError> {
    backend.update(&id, patch).await.map(Json).map_err(api_error)
}

async fn delete_product(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    backend
        .delete(&id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(api_error)
}

/// Product API routes backed by `backend`
pub fn products_router(backend: Backend) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/filter-options", get(filter_options))
        .route(
            "/api/products/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .with_state(backend)
}

/// Serve `router` on an ephemeral local port; returns the API base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

// ---------------------------------------------------------------------------
// Assertions helpers
// ---------------------------------------------------------------------------

/// Assert that an error carries the expected code
pub fn assert_code(err: &anyhow::Error, expected: &str) {
    assert_eq!(
        MatchmakerError::code_of(err),
        expected,
        "Expected error code {}, got: {}",
        expected,
        err
    );
}

/// Ids of a page's items, in order
pub fn ids(items: &[Product]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}
