//! Core module containing the fundamental traits and types of the crate

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod role;
pub mod service;
pub mod session;
pub mod store;

pub use entity::ListItem;
pub use error::{MatchmakerError, MatchmakerResult};
pub use field::FieldValue;
pub use query::{FilterOptions, ListQuery, ListResponse, Page, PaginationMeta, PriceRange};
pub use role::{Role, Section, can_access};
pub use service::DataProvider;
pub use session::{
    CompareList, CompareOutcome, Favorites, Preferences, Session, SessionState, Theme,
};
pub use store::ListSource;
