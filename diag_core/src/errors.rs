//! # Error Types
//!
//! Structured error types for diag_core. Input problems are caught when a
//! [`Context`](crate::context::Context) is built, so the evaluation and
//! sampling functions themselves never fail.
//!
//! ## Example
//!
//! ```rust
//! use diag_core::errors::{DiagError, DiagResult};
//!
//! fn check_step(dx: f64) -> DiagResult<()> {
//!     if !(dx > 0.0) {
//!         return Err(DiagError::invalid_sampling(dx.to_string(), "Step must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_step(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for diag_core operations
pub type DiagResult<T> = Result<T, DiagError>;

/// Structured error type for diagram operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DiagError {
    /// Beam length or a load position/extent lies outside the beam
    #[error("Invalid geometry for '{entity}': {value} - {reason}")]
    InvalidGeometry {
        entity: String,
        value: String,
        reason: String,
    },

    /// Sampling step is not strictly positive
    #[error("Invalid sampling step {value} - {reason}")]
    InvalidSampling { value: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl DiagError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(entity: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DiagError::InvalidGeometry {
            entity: entity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSampling error
    pub fn invalid_sampling(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DiagError::InvalidSampling {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        DiagError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the beam/load definition itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DiagError::InvalidGeometry { .. } | DiagError::InvalidSampling { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DiagError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            DiagError::InvalidSampling { .. } => "INVALID_SAMPLING",
            DiagError::FileError { .. } => "FILE_ERROR",
            DiagError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DiagError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for DiagError {
    fn from(e: serde_json::Error) -> Self {
        DiagError::SerializationError {
            reason: e.to_string(),
        }
    }
}
