//! Configuration loading and management

use crate::core::error::{ConfigError, MatchmakerError, MatchmakerResult};
use crate::filter::state::{FilterState, SortDirection};
use crate::persistence::{FileFilterStore, FilterStore, InMemoryFilterStore};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the resource paths are appended to
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Where persisted filter state is kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for file-backed filter state; `None` keeps it in memory
    #[serde(default)]
    pub filters_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Store for persisted filters: files under `filters_dir`, or memory
    pub fn filter_store(&self) -> Arc<dyn FilterStore> {
        match &self.filters_dir {
            Some(dir) => Arc::new(FileFilterStore::new(dir.clone())),
            None => Arc::new(InMemoryFilterStore::new()),
        }
    }
}

/// A declared range filter and its full bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub field: String,
    pub min: f64,
    pub max: f64,
}

/// Configuration of one list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name; also the prefix of its persisted filter key
    pub name: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Search-as-you-type delay in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    #[serde(default)]
    pub sort_direction: SortDirection,

    /// Categorical filters, each starting at "all"
    #[serde(default)]
    pub categories: Vec<String>,

    /// Range filters, each starting at its full bounds
    #[serde(default)]
    pub ranges: Vec<RangeConfig>,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_page_size() -> usize {
    12
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_sort_by() -> String {
    "name".to_string()
}

impl ViewConfig {
    /// A view with default paging, debounce and sort, and no filters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            sort_by: default_sort_by(),
            sort_direction: SortDirection::Asc,
            categories: Vec::new(),
            ranges: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = sort_by.into();
        self.sort_direction = direction;
        self
    }

    pub fn with_category(mut self, field: impl Into<String>) -> Self {
        self.categories.push(field.into());
        self
    }

    pub fn with_range(mut self, field: impl Into<String>, min: f64, max: f64) -> Self {
        self.ranges.push(RangeConfig {
            field: field.into(),
            min,
            max,
        });
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The filter state this view starts from and resets to
    pub fn defaults(&self) -> FilterState {
        let mut state =
            FilterState::new().sorted_by(self.sort_by.clone(), self.sort_direction);
        for field in &self.categories {
            state = state.with_category(field.clone());
        }
        for range in &self.ranges {
            state = state.with_range(range.field.clone(), range.min, range.max);
        }
        state
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(invalid("views[].name", &self.name, "view name must not be empty"));
        }
        if self.page_size == 0 {
            return Err(invalid(
                &format!("views.{}.page_size", self.name),
                "0",
                "page size must be at least 1",
            ));
        }
        for range in &self.ranges {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return Err(invalid(
                    &format!("views.{}.ranges.{}", self.name, range.field),
                    &format!("{}..{}", range.min, range.max),
                    "range minimum must not exceed its maximum",
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

/// Complete configuration of the matchmaker client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchmakerConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// List views, looked up by name
    #[serde(default)]
    pub views: Vec<ViewConfig>,
}

impl MatchmakerConfig {
    /// Load and validate configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MatchmakerError::from(ConfigError::FileNotFound {
                path: path.to_string(),
            }),
            _ => MatchmakerError::from(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            MatchmakerError::from(ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(MatchmakerError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero page sizes, inverted range bounds and duplicate view names
    pub fn validate(&self) -> MatchmakerResult<()> {
        let mut seen = HashSet::new();
        for view in &self.views {
            view.validate()?;
            if !seen.insert(view.name.as_str()) {
                return Err(invalid("views[].name", &view.name, "duplicate view name").into());
            }
        }
        Ok(())
    }

    /// Find a view by name
    pub fn view(&self, name: &str) -> Option<&ViewConfig> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Default configuration with the catalog, matches, orders and partnerships views
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            views: vec![
                ViewConfig::new("catalog")
                    .with_category("category")
                    .with_category("brand")
                    .with_range("price", 0.0, 1000.0),
                ViewConfig::new("matches")
                    .with_sort("matchScore", SortDirection::Desc)
                    .with_category("category")
                    .with_category("status"),
                ViewConfig::new("orders")
                    .with_page_size(10)
                    .with_sort("createdAt", SortDirection::Desc)
                    .with_category("status"),
                ViewConfig::new("partnerships")
                    .with_sort("partnerName", SortDirection::Asc)
                    .with_category("status")
                    .with_range("revenue", 0.0, 100_000.0),
            ],
        }
    }
}

impl Default for MatchmakerConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
