//! Error handling for skillmig.
//!
//! This module provides:
//! - [`MigError`]: The main error enum for all migration operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for migration operations.
#[derive(Error, Debug)]
pub enum MigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input document: {0}")]
    InvalidRoot(String),

    #[error("Job record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: String },

    #[error("Job record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Job record {index} has a non-integer level for `{key}`: {value}")]
    InvalidLevel {
        index: usize,
        key: String,
        value: String,
    },

    #[error("Job record {index} has a blank {kind} name")]
    BlankSkillName { index: usize, kind: String },

    #[error("Integrity check failed: {0}")]
    Integrity(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MigError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Serialization(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::NotFound(_) => ErrorCode::InputNotFound,
            Self::InvalidRoot(_) => ErrorCode::InputNotList,
            Self::MissingField { .. } => ErrorCode::RecordMissingField,
            Self::InvalidRecord { .. } => ErrorCode::RecordInvalid,
            Self::InvalidLevel { .. } => ErrorCode::LevelInvalid,
            Self::BlankSkillName { .. } => ErrorCode::BlankSkillName,
            Self::Integrity(_) => ErrorCode::IntegrityViolation,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::NotFound(path) => Some(serde_json::json!({ "path": path })),
            Self::MissingField { index, field } => {
                Some(serde_json::json!({ "index": index, "field": field }))
            }
            Self::InvalidRecord { index, reason } => {
                Some(serde_json::json!({ "index": index, "reason": reason }))
            }
            Self::InvalidLevel { index, key, value } => {
                Some(serde_json::json!({ "index": index, "key": key, "value": value }))
            }
            Self::BlankSkillName { index, kind } => {
                Some(serde_json::json!({ "index": index, "kind": kind }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_mig_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted on stdout in robot mode so scripts can branch on `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "RECORD_MISSING_FIELD")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 103)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "input", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`MigError`].
    #[must_use]
    pub fn from_mig_error(err: &MigError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&MigError> for StructuredError {
    fn from(err: &MigError) -> Self {
        Self::from_mig_error(err)
    }
}

/// Result type alias using [`MigError`].
pub type Result<T> = std::result::Result<T, MigError>;
