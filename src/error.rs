//! Centralized error types for the inspector
//!
//! All inspector errors are represented by the `InspectorError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, InspectorError>`.
//!
//! Transport failures are deliberately not part of this enum: they belong to
//! the caller of an observed call and travel as `intercept::TransportError`.

use std::fmt;
use std::path::PathBuf;

/// All inspector errors
#[derive(Debug)]
pub enum InspectorError {
    // === Storage ===
    /// Reading or writing a durable slot failed
    Storage {
        key: String,
        source: std::io::Error,
    },
    /// Durable slot would exceed the storage quota
    StorageQuota {
        key: String,
        needed: usize,
        quota: usize,
    },

    // === Data ===
    /// JSON (de)serialization failed
    Json { source: serde_json::Error },

    // === IO ===
    /// File system operation failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Requests ===
    /// Request line typed by the user could not be parsed
    InvalidRequest { reason: String },
    /// No entry with this id
    EntryNotFound { id: String },
    /// HTTP client could not be built
    HttpClient { source: reqwest::Error },

    // === Host ===
    /// Tokio runtime or terminal setup failed
    Runtime { source: std::io::Error },
}

impl std::error::Error for InspectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage { source, .. } | Self::Io { source, .. } | Self::Runtime { source } => {
                Some(source)
            }
            Self::Json { source } => Some(source),
            Self::HttpClient { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage { key, source } => write!(f, "Storage error on '{}': {}", key, source),
            Self::StorageQuota { key, needed, quota } => write!(
                f,
                "Storage quota exceeded for '{}' ({} > {} bytes)",
                key, needed, quota
            ),
            Self::Json { source } => write!(f, "JSON error: {}", source),
            Self::Io { path, .. } => write!(f, "IO error: {}", path.display()),
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::InvalidRequest { reason } => write!(f, "Invalid request: {}", reason),
            Self::EntryNotFound { id } => write!(f, "No entry with id {}", id),
            Self::HttpClient { source } => write!(f, "HTTP client error: {}", source),
            Self::Runtime { .. } => write!(f, "Failed to create runtime"),
        }
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// Alias for Result with InspectorError
pub type Result<T> = std::result::Result<T, InspectorError>;
