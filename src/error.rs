//! Error types for the encoder.
//!
//! Every failure the encoder can hit falls into one of a handful of
//! categories, so they are modelled as an `enum` rather than strings:
//!
//! ```
//! use heartcode::error::EncodeError;
//!
//! fn describe(err: &EncodeError) -> &'static str {
//!     match err {
//!         EncodeError::Io { .. } => "file could not be read or written",
//!         EncodeError::Format(_) => "file is not valid CSV",
//!         EncodeError::MissingColumn(_) => "a required column is absent",
//!         EncodeError::Config(_) => "bad configuration",
//!     }
//! }
//! ```
//!
//! `From` impls let `?` convert polars and `serde_json` errors automatically.
//! Unrecognised labels are *not* errors: they become missing cells and are
//! reported through [`crate::encoder::EncodingReport`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for encoder operations.
#[derive(Debug)]
pub enum EncodeError {
    /// The file is missing, unreadable or unwritable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content is not valid delimited tabular data.
    Format(String),

    /// A column the rule table always expects is absent.
    MissingColumn(String),

    /// Configuration file could not be parsed.
    Config(String),
}

impl EncodeError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Format(msg) => write!(f, "Format error: {msg}"),
            Self::MissingColumn(name) => write!(f, "Missing required column: {name}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<polars::error::PolarsError> for EncodeError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Format(err.to_string())
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
