//! Durable client-side storage for filter selections
//!
//! Each view persists its `FilterState` under the key `"<view>-filters"`.
//! Loading never fails: absent, malformed or older-schema data falls back to
//! the view's defaults and the problem is only logged.

pub mod file;
pub mod in_memory;

pub use file::FileFilterStore;
pub use in_memory::InMemoryFilterStore;

use crate::filter::state::FilterState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current envelope version written by `save_filters`
pub const SCHEMA_VERSION: u32 = 1;

/// Synchronous key/value store for serialized filter state
///
/// Reads and writes are small and constant-size, so they run inline on the
/// view's task.
pub trait FilterStore: Send + Sync {
    /// Read a key; `Ok(None)` when it was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Storage key for a view's filters
pub fn filters_key(view: &str) -> String {
    format!("{}-filters", view)
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    filters: FilterState,
}

/// Load a view's persisted filters on top of its defaults
///
/// Only filters the defaults declare are restored, and restored ranges are
/// re-clamped into the defaults' bounds. Anything unreadable yields
/// `defaults` unchanged.
pub fn load_filters(store: &dyn FilterStore, view: &str, defaults: &FilterState) -> FilterState {
    let key = filters_key(view);
    let raw = match store.load(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return defaults.clone(),
        Err(e) => {
            tracing::warn!(view = %view, error = %e, "failed to read persisted filters");
            return defaults.clone();
        }
    };

    match decode(&raw) {
        Ok(saved) => merge_onto(defaults, saved),
        Err(e) => {
            tracing::warn!(view = %view, error = %e, "discarding malformed persisted filters");
            defaults.clone()
        }
    }
}

/// Persist a view's filters; failures are logged, not returned
pub fn save_filters(store: &dyn FilterStore, view: &str, filters: &FilterState) {
    let envelope = Envelope {
        version: SCHEMA_VERSION,
        filters: filters.clone(),
    };
    let result = serde_json::to_string(&envelope)
        .map_err(anyhow::Error::from)
        .and_then(|json| store.save(&filters_key(view), &json));

    if let Err(e) = result {
        tracing::warn!(view = %view, error = %e, "failed to persist filters");
    }
}

/// Forget a view's persisted filters; failures are logged, not returned
pub fn clear_filters(store: &dyn FilterStore, view: &str) {
    match store.remove(&filters_key(view)) {
        Ok(()) => tracing::info!(view = %view, "cleared persisted filters"),
        Err(e) => tracing::warn!(view = %view, error = %e, "failed to clear persisted filters"),
    }
}

/// Accept the current envelope or a bare, unversioned `FilterState`
fn decode(raw: &str) -> Result<FilterState> {
    let value: Value = serde_json::from_str(raw)?;

    let is_envelope = value
        .as_object()
        .is_some_and(|o| o.contains_key("version") && o.contains_key("filters"));

    let filters = if is_envelope {
        serde_json::from_value::<Envelope>(value)?.filters
    } else {
        serde_json::from_value::<FilterState>(value)?
    };

    Ok(filters.normalized())
}

fn merge_onto(defaults: &FilterState, saved: FilterState) -> FilterState {
    let mut merged = defaults.clone();
    merged.search = saved.search;
    merged.sort_by = saved.sort_by;
    merged.sort_direction = saved.sort_direction;
    merged.page = saved.page.max(1);

    for (name, selection) in saved.categorical {
        if let Some(slot) = merged.categorical.get_mut(&name) {
            *slot = selection;
        }
    }
    for (name, range) in saved.ranges {
        if let Some(slot) = merged.ranges.get_mut(&name) {
            slot.set(range.min, range.max);
        }
    }

    merged
}
