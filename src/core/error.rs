//! Typed error handling for the matchmaker list views
//!
//! Service traits return `anyhow::Result`, like every async seam in this
//! crate. The concrete failures they carry are the typed errors below, so a
//! caller can downcast and react to a specific case instead of a message.
//!
//! # Error Categories
//!
//! - [`ProviderError`]: Errors reported by a data provider (remote or mock)
//! - [`StorageError`]: Errors from the persisted filter-state store
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//! - [`ValidationError`]: Errors related to input validation
//!
//! # Example
//!
//! ```rust,ignore
//! match provider.delete("p-42").await {
//!     Ok(()) => {}
//!     Err(e) => match e.downcast_ref::<MatchmakerError>() {
//!         Some(MatchmakerError::Provider(ProviderError::NotFound { id, .. })) => {
//!             println!("{} was already gone", id);
//!         }
//!         _ => eprintln!("Other error: {}", e),
//!     },
//! }
//! ```

use std::fmt;

/// The main error type for the crate
#[derive(Debug)]
pub enum MatchmakerError {
    /// Data provider errors
    Provider(ProviderError),

    /// Filter-state storage errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Validation errors
    Validation(ValidationError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for MatchmakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchmakerError::Provider(e) => write!(f, "{}", e),
            MatchmakerError::Storage(e) => write!(f, "{}", e),
            MatchmakerError::Config(e) => write!(f, "{}", e),
            MatchmakerError::Validation(e) => write!(f, "{}", e),
            MatchmakerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MatchmakerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchmakerError::Provider(e) => Some(e),
            MatchmakerError::Storage(e) => Some(e),
            MatchmakerError::Config(e) => Some(e),
            MatchmakerError::Validation(e) => Some(e),
            MatchmakerError::Internal(_) => None,
        }
    }
}

impl MatchmakerError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MatchmakerError::Provider(e) => e.error_code(),
            MatchmakerError::Storage(_) => "STORAGE_ERROR",
            MatchmakerError::Config(_) => "CONFIG_ERROR",
            MatchmakerError::Validation(_) => "VALIDATION_ERROR",
            MatchmakerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether retrying the same operation later may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            MatchmakerError::Provider(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Error code of an `anyhow::Error`, falling back to `INTERNAL_ERROR`
    pub fn code_of(err: &anyhow::Error) -> &'static str {
        err.downcast_ref::<MatchmakerError>()
            .map(MatchmakerError::error_code)
            .unwrap_or("INTERNAL_ERROR")
    }
}

// =============================================================================
// Provider Errors
// =============================================================================

/// Errors reported by a data provider
#[derive(Debug)]
pub enum ProviderError {
    /// Item was not found
    NotFound { resource: String, id: String },

    /// The provider answered with a non-success HTTP status
    Http { status: u16, message: String },

    /// The request never got an answer (connection refused, reset, ...)
    Transport { message: String },

    /// The request timed out
    Timeout { message: String },

    /// The response body could not be decoded
    Decode { message: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            ProviderError::Http { status, message } => {
                write!(f, "Provider returned HTTP {}: {}", status, message)
            }
            ProviderError::Transport { message } => {
                write!(f, "Provider unreachable: {}", message)
            }
            ProviderError::Timeout { message } => {
                write!(f, "Provider request timed out: {}", message)
            }
            ProviderError::Decode { message } => {
                write!(f, "Failed to decode provider response: {}", message)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::NotFound { .. } => "ITEM_NOT_FOUND",
            ProviderError::Http { .. } => "PROVIDER_HTTP_ERROR",
            ProviderError::Transport { .. } => "PROVIDER_UNREACHABLE",
            ProviderError::Timeout { .. } => "PROVIDER_TIMEOUT",
            ProviderError::Decode { .. } => "PROVIDER_DECODE_ERROR",
        }
    }

    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Transport { .. } | ProviderError::Timeout { .. } => true,
            ProviderError::Http { status, .. } => *status >= 500 || *status == 429,
            ProviderError::NotFound { .. } | ProviderError::Decode { .. } => false,
        }
    }
}

impl From<ProviderError> for MatchmakerError {
    fn from(err: ProviderError) -> Self {
        MatchmakerError::Provider(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the persisted filter-state store
#[derive(Debug)]
pub enum StorageError {
    /// Reading a key failed
    ReadFailed { key: String, message: String },

    /// Writing a key failed
    WriteFailed { key: String, message: String },

    /// The store's lock was poisoned
    LockPoisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { key, message } => {
                write!(f, "Failed to read '{}': {}", key, message)
            }
            StorageError::WriteFailed { key, message } => {
                write!(f, "Failed to write '{}': {}", key, message)
            }
            StorageError::LockPoisoned { message } => {
                write!(f, "Storage lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for MatchmakerError {
    fn from(err: StorageError) -> Self {
        MatchmakerError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for MatchmakerError {
    fn from(err: ConfigError) -> Self {
        MatchmakerError::Config(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Attempt to change a field that never changes after creation
    ImmutableField { field: String },

    /// Invalid JSON format
    InvalidJson { message: String },

    /// Role string outside the closed role set
    UnknownRole { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::ImmutableField { field } => {
                write!(f, "Field '{}' cannot be modified", field)
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
            ValidationError::UnknownRole { value } => {
                write!(f, "Unknown role: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for MatchmakerError {
    fn from(err: ValidationError) -> Self {
        MatchmakerError::Validation(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for MatchmakerError {
    fn from(err: serde_json::Error) -> Self {
        MatchmakerError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for MatchmakerError {
    fn from(err: std::io::Error) -> Self {
        MatchmakerError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for MatchmakerError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchmakerError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for MatchmakerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<MatchmakerError>() {
            Ok(typed) => typed,
            Err(other) => MatchmakerError::Internal(other.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for typed matchmaker operations
pub type MatchmakerResult<T> = Result<T, MatchmakerError>;
