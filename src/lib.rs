//! # CPG Matchmaker
//!
//! Headless list-view core for a B2B marketplace connecting manufacturers,
//! brands and retailers of consumer packaged goods.
//!
//! ## Features
//!
//! - **One Pipeline, Every List**: Products, matches, orders and partnerships share the same filter, sort and pagination code
//! - **Local or Remote**: A view pages an in-memory array or delegates to a REST backend without knowing which
//! - **Debounced Search**: Search-as-you-type on tokio, last keystroke wins
//! - **Out-of-Order Safe**: Late responses from superseded requests are dropped
//! - **Persistent Filters**: Selections survive restarts and fall back to defaults when unreadable
//! - **Role Navigation**: A single table decides which sections each role can open
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use matchmaker::prelude::*;
//!
//! let config = MatchmakerConfig::default_config();
//! let view = ListView::new(
//!     config.view("catalog").unwrap(),
//!     LocalSource::new(sample_products()),
//! );
//!
//! view.edit(|f| f.select("category", Selection::value("Beverages")));
//! view.apply().await;
//!
//! let snapshot = view.snapshot();
//! for product in &snapshot.page.unwrap().items {
//!     println!("{} {:.2}", product.name, product.price);
//! }
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod entities;
pub mod filter;
pub mod persistence;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::ListItem,
        error::{MatchmakerError, MatchmakerResult},
        field::FieldValue,
        query::{FilterOptions, ListQuery, ListResponse, Page, PaginationMeta, PriceRange},
        role::{Role, Section, can_access},
        service::DataProvider,
        session::{CompareList, CompareOutcome, Favorites, Preferences, Session, SessionState, Theme},
        store::ListSource,
    };

    // === Macros ===
    pub use crate::impl_list_item;

    // === Filtering ===
    pub use crate::filter::{
        FilterState, LocalSource, RangeFilter, RemoteSource, Selection, SortDirection,
        filter_and_sort, paginate,
    };

    // === Controller ===
    pub use crate::controller::{ListView, Notice, ViewPhase, ViewSnapshot};

    // === Persistence ===
    pub use crate::persistence::{FileFilterStore, FilterStore, InMemoryFilterStore};

    // === Entities ===
    pub use crate::entities::{
        Match, Order, Partnership, Product, sample_matches, sample_orders, sample_partnerships,
        sample_products,
    };

    // === Storage ===
    pub use crate::storage::InMemoryDataProvider;
    #[cfg(feature = "rest")]
    pub use crate::storage::RestDataProvider;

    // === Config ===
    pub use crate::config::{ApiConfig, MatchmakerConfig, StorageConfig, ViewConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
