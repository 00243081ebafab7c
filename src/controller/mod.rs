//! List view controllers: state machine, debouncing and the view itself

pub mod debounce;
pub mod list_view;
pub mod phase;

pub use debounce::Debouncer;
pub use list_view::{ListView, Notice, PRICE_FIELD, ViewSnapshot};
pub use phase::ViewPhase;
