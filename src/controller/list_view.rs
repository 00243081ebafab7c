//! List view controller
//!
//! A `ListView` owns one view's filter state and drives the pipeline against
//! its `ListSource`. Renderers read a `ViewSnapshot`, either on demand or by
//! subscribing to changes.
//!
//! Every run takes a generation number. Only the response of the latest run
//! is stored; an older response arriving late is dropped. A failed run keeps
//! the previous page on screen and raises a dismissible notice.

use super::debounce::Debouncer;
use super::phase::ViewPhase;
use crate::config::ViewConfig;
use crate::core::error::MatchmakerError;
use crate::core::query::{FilterOptions, Page};
use crate::core::store::ListSource;
use crate::filter::state::FilterState;
use crate::persistence::{FilterStore, clear_filters, filters_key, load_filters, save_filters};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;

/// Range filter whose bounds come from `FilterOptions::price_range`
pub const PRICE_FIELD: &str = "price";

/// User-facing error raised by a failed run or mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Stable error code, e.g. `PROVIDER_TIMEOUT`
    pub code: String,
    pub message: String,
    /// Whether trying again later may succeed
    pub retryable: bool,
}

impl Notice {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let retryable = err
            .downcast_ref::<MatchmakerError>()
            .is_some_and(MatchmakerError::is_transient);
        Self {
            code: MatchmakerError::code_of(err).to_string(),
            message: err.to_string(),
            retryable,
        }
    }
}

/// Everything a renderer needs to draw the view
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot<T> {
    pub filters: FilterState,
    pub phase: ViewPhase,
    /// Last successfully loaded page; `None` until the first success
    pub page: Option<Page<T>>,
    pub loading: bool,
    pub notice: Option<Notice>,
    /// Filter vocabulary, once provided
    pub options: Option<FilterOptions>,
}

impl<T> ViewSnapshot<T> {
    fn new(filters: FilterState) -> Self {
        Self {
            filters,
            phase: ViewPhase::Idle,
            page: None,
            loading: false,
            notice: None,
            options: None,
        }
    }
}

/// State shared between the view and its debounced task
struct Shared<T, S> {
    name: String,
    page_size: usize,
    source: S,
    store: Option<Arc<dyn FilterStore>>,
    defaults: RwLock<FilterState>,
    generation: AtomicU64,
    state: watch::Sender<ViewSnapshot<T>>,
}

impl<T, S> Shared<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSource<T> + 'static,
{
    fn defaults(&self) -> FilterState {
        // A poisoned lock still holds valid defaults
        self.defaults
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Fetch the page for the current filters and store it if still latest
    async fn run(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut filters = FilterState::default();
        self.state.send_modify(|s| {
            s.phase = s.phase.on_apply();
            s.loading = true;
            filters = s.filters.clone();
        });
        tracing::debug!(view = %self.name, generation, "applying filters");

        let result = self.source.fetch_page(&filters, self.page_size).await;

        let mut failure = None;
        let mut completed = None;
        let applied = self.state.send_if_modified(|s| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match result {
                Ok(page) => {
                    // Snap to the effective page unless the user moved on
                    if s.filters == filters {
                        s.filters.page = page.page();
                    }
                    s.page = Some(page);
                    s.notice = None;
                }
                Err(e) => {
                    s.notice = Some(Notice::from_error(&e));
                    failure = Some(e);
                }
            }
            s.loading = false;
            s.phase = s.phase.on_complete();
            completed = Some(s.filters.clone());
            true
        });

        if !applied {
            tracing::debug!(view = %self.name, generation, "discarding stale response");
            return;
        }
        if let Some(e) = failure {
            tracing::warn!(view = %self.name, generation, error = %e, "fetch failed, keeping previous page");
        }
        if let Some(filters) = completed {
            self.persist(&filters);
        }
    }

    /// Save non-default filters; a view back at its defaults leaves nothing behind
    fn persist(&self, filters: &FilterState) {
        let Some(store) = &self.store else {
            return;
        };
        if *filters == self.defaults() {
            if let Err(e) = store.remove(&filters_key(&self.name)) {
                tracing::warn!(view = %self.name, error = %e, "failed to clear persisted filters");
            }
        } else {
            save_filters(store.as_ref(), &self.name, filters);
        }
    }
}

/// Controller of one list view
///
/// Must be used from within a tokio runtime. Dropping the view cancels a
/// pending debounced search together with any fetch it started.
pub struct ListView<T, S> {
    shared: Arc<Shared<T, S>>,
    debounce: Duration,
    debouncer: Debouncer,
}

impl<T, S> ListView<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSource<T> + 'static,
{
    /// Create a view starting from its configured defaults
    pub fn new(config: &ViewConfig, source: S) -> Self {
        Self::build(config, source, None)
    }

    /// Create a view that restores and persists its filters in `store`
    pub fn with_store(config: &ViewConfig, source: S, store: Arc<dyn FilterStore>) -> Self {
        Self::build(config, source, Some(store))
    }

    fn build(config: &ViewConfig, source: S, store: Option<Arc<dyn FilterStore>>) -> Self {
        let defaults = config.defaults();
        let initial = match &store {
            Some(store) => load_filters(store.as_ref(), &config.name, &defaults),
            None => defaults.clone(),
        };
        let (state, _) = watch::channel(ViewSnapshot::new(initial));

        Self {
            shared: Arc::new(Shared {
                name: config.name.clone(),
                page_size: config.page_size,
                source,
                store,
                defaults: RwLock::new(defaults),
                generation: AtomicU64::new(0),
                state,
            }),
            debounce: config.debounce(),
            debouncer: Debouncer::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn page_size(&self) -> usize {
        self.shared.page_size
    }

    pub fn source(&self) -> &S {
        &self.shared.source
    }

    /// Current state of the view
    pub fn snapshot(&self) -> ViewSnapshot<T> {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot<T>> {
        self.shared.state.subscribe()
    }

    pub fn filters(&self) -> FilterState {
        self.shared.state.borrow().filters.clone()
    }

    /// The state `reset` restores
    pub fn defaults(&self) -> FilterState {
        self.shared.defaults()
    }

    /// Change the filters without fetching
    pub fn edit<F>(&self, f: F)
    where
        F: FnOnce(&mut FilterState),
    {
        self.shared.state.send_modify(|s| {
            f(&mut s.filters);
            s.filters = std::mem::take(&mut s.filters).normalized();
            s.phase = s.phase.on_edit();
        });
    }

    /// Run the pipeline now, superseding a pending search
    pub async fn apply(&self) {
        if self.debouncer.cancel() {
            tracing::debug!(view = %self.shared.name, "pending search superseded");
        }
        self.shared.run().await;
    }

    /// Search as you type: update the text and apply once typing pauses
    pub fn search(&self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|filters| filters.set_search(text));

        let shared = Arc::clone(&self.shared);
        self.debouncer
            .schedule(self.debounce, async move { shared.run().await });
    }

    /// Whether a debounced search has not run yet
    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Navigate to `page` (clamped on completion) keeping every other filter
    pub async fn go_to_page(&self, page: usize) {
        self.edit(|filters| filters.set_page(page));
        self.apply().await;
    }

    /// Restore the defaults, forget the persisted copy and apply immediately
    pub async fn reset(&self) {
        self.debouncer.cancel();
        let defaults = self.shared.defaults();
        self.shared.state.send_modify(|s| {
            s.filters.reset_to(&defaults);
            s.phase = s.phase.on_reset();
        });
        if let Some(store) = &self.shared.store {
            clear_filters(store.as_ref(), &self.shared.name);
        }
        tracing::info!(view = %self.shared.name, "filters reset");
        self.shared.run().await;
    }

    /// Update an item through the source, then refresh the page
    pub async fn update_item(&self, id: &str, patch: Value) -> Result<T> {
        match self.shared.source.update(id, patch).await {
            Ok(item) => {
                self.apply().await;
                Ok(item)
            }
            Err(e) => Err(self.raise(e)),
        }
    }

    /// Delete an item through the source, then refresh the page
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        match self.shared.source.delete(id).await {
            Ok(()) => {
                self.apply().await;
                Ok(())
            }
            Err(e) => Err(self.raise(e)),
        }
    }

    /// Install the filter vocabulary and move the price bounds to match it
    ///
    /// An untouched price slider follows the new bounds; a narrowed one is
    /// clamped into them. Does not fetch.
    pub fn set_filter_options(&self, options: FilterOptions) {
        let range = options.price_range;
        {
            let mut defaults = self
                .shared
                .defaults
                .write()
                .unwrap_or_else(|p| p.into_inner());
            defaults.rebound_range(PRICE_FIELD, range.min, range.max);
        }
        self.shared.state.send_modify(|s| {
            s.filters.rebound_range(PRICE_FIELD, range.min, range.max);
            s.options = Some(options);
        });
    }

    /// Hide the current notice
    pub fn dismiss_notice(&self) {
        self.shared.state.send_if_modified(|s| s.notice.take().is_some());
    }

    fn raise(&self, e: anyhow::Error) -> anyhow::Error {
        tracing::warn!(view = %self.shared.name, error = %e, "mutation failed");
        let notice = Notice::from_error(&e);
        self.shared.state.send_modify(|s| s.notice = Some(notice));
        e
    }
}
