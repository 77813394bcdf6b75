//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input document errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `InputNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: Input document does not exist
    InputNotFound,
    /// E102: Input root is not a list of job records
    InputNotList,
    /// E103: A job record lacks a required top-level field
    RecordMissingField,
    /// E104: A job record has a malformed nested value
    RecordInvalid,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Document could not be encoded or decoded
    SerializationError,
    /// E606: IO operation failed
    IoError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Soft-skill level is not coercible to an integer
    LevelInvalid,
    /// E802: Blank skill name rejected in strict mode
    BlankSkillName,
    /// E803: Migrated documents reference missing or duplicate ids
    IntegrityViolation,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InputNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputNotFound => 101,
            Self::InputNotList => 102,
            Self::RecordMissingField => 103,
            Self::RecordInvalid => 104,

            Self::ConfigInvalid => 302,

            Self::SerializationError => 605,
            Self::IoError => 606,

            Self::LevelInvalid => 801,
            Self::BlankSkillName => 802,
            Self::IntegrityViolation => 803,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound => "Check the input path, or pass --input <path>",
            Self::InputNotList => "The input document must be a JSON array of v5 job records",
            Self::RecordMissingField => "Every job needs id, category, income, summary and icon",
            Self::RecordInvalid => "Check the record's requirements block for values of the wrong type",
            Self::ConfigInvalid => "Check TOML syntax in the config file and SKILLMIG_* environment values",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
            Self::LevelInvalid => "Soft-skill levels must be integers (or numeric strings)",
            Self::BlankSkillName => "Remove the empty hard-skill entry or disable migration.reject_blank_names",
            Self::IntegrityViolation => "Re-run `skillmig migrate` to regenerate all three documents together",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            3 => "config",
            6 => "storage",
            8 => "validation",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::InputNotFound,
            Self::InputNotList,
            Self::RecordMissingField,
            Self::RecordInvalid,
            Self::ConfigInvalid,
            Self::SerializationError,
            Self::IoError,
            Self::LevelInvalid,
            Self::BlankSkillName,
            Self::IntegrityViolation,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
