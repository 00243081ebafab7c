//! Data provider implementations for different backends

pub mod in_memory;
#[cfg(feature = "rest")]
pub mod rest;

pub use in_memory::InMemoryDataProvider;
#[cfg(feature = "rest")]
pub use rest::RestDataProvider;
