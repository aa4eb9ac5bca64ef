//! Error types for the Quickdial shortcut library.
//!
//! Most shortcut-registration conditions are deliberately absorbed at the
//! call site (logged, never propagated), so the variants here cover the
//! infrastructure that genuinely can fail: filesystem writes, serialization,
//! configuration resolution, and RPC parameter handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Quickdial library.
#[derive(Debug, Error)]
pub enum QuickdialError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Shortcut surface errors
    #[error("Shortcut surface unavailable: {surface}")]
    SurfaceUnavailable { surface: String },

    // RPC errors
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Quickdial operations.
pub type Result<T> = std::result::Result<T, QuickdialError>;

// Conversion implementations for common error types

impl From<std::io::Error> for QuickdialError {
    fn from(err: std::io::Error) -> Self {
        QuickdialError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for QuickdialError {
    fn from(err: serde_json::Error) -> Self {
        QuickdialError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl QuickdialError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        QuickdialError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32600: Invalid Request
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32001: Shortcut surface unavailable
    /// - -32005: Validation error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            QuickdialError::MethodNotFound { .. } => -32601,

            QuickdialError::InvalidParams { .. } => -32602,

            QuickdialError::SurfaceUnavailable { .. } => -32001,

            QuickdialError::Validation { .. } => -32005,

            // All other errors are internal errors
            _ => -32603,
        }
    }
}
