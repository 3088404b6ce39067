//! Error types for lostfound.
//!
//! Registration is the only core operation that can be rejected; everything
//! else in the registry is total. The remaining variants cover the ambient
//! concerns around it: configuration, seed files and I/O.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Why a registration was rejected.
///
/// Checks run in declaration order and the first failing one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// `kind`, `name`, `category`, `place` or `date` was empty.
    MissingField,
    /// `kind` was neither `lost` nor `found`.
    InvalidStatus,
    /// `category` is not in the catalog.
    InvalidCategory,
    /// `place` is not in the catalog.
    InvalidLocation,
}

impl ValidationReason {
    /// Stable machine-readable code for this reason.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidStatus => "invalid_status",
            Self::InvalidCategory => "invalid_category",
            Self::InvalidLocation => "invalid_location",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing required field"),
            Self::InvalidStatus => write!(f, "invalid item status"),
            Self::InvalidCategory => write!(f, "invalid category"),
            Self::InvalidLocation => write!(f, "invalid location"),
        }
    }
}

/// A rejected registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {reason}")]
pub struct ValidationError {
    /// The first check that failed.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Create a validation error for the given reason.
    #[must_use]
    pub fn new(reason: ValidationReason) -> Self {
        Self { reason }
    }
}

impl From<ValidationReason> for ValidationError {
    fn from(reason: ValidationReason) -> Self {
        Self::new(reason)
    }
}

/// The main error type for lostfound operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// A registration was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A seed file could not be read or parsed.
    #[error("failed to load seed file {path}: {message}")]
    SeedFile {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading shell input or writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for lostfound operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<ValidationReason> for Error {
    fn from(reason: ValidationReason) -> Self {
        Self::Validation(ValidationError::new(reason))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a seed file error.
    #[must_use]
    pub fn seed_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SeedFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The validation reason, if this is a rejected registration.
    #[must_use]
    pub fn validation_reason(&self) -> Option<ValidationReason> {
        match self {
            Self::Validation(err) => Some(err.reason),
            _ => None,
        }
    }
}
