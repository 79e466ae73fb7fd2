//! Error handling for the sales query engine.
//!
//! Queries themselves never fail: an empty filtered view produces empty
//! result structures. Errors only arise while loading the dataset, resolving
//! a query route or serializing a response.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for dataset loading and query dispatch
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading a file
    #[error("IO error: {message}{}", fmt_path(.path))]
    Io {
        /// What went wrong
        message: String,
        /// The file involved, if known
        path: Option<PathBuf>,
        /// Underlying IO error
        #[source]
        source: Option<io::Error>,
    },

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source file lacks a column the dataset requires
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A record could not be coerced into a typed `SaleRecord`
    #[error("Invalid record at line {line}: field '{field}' {message}")]
    InvalidRecord {
        /// 1-based line number in the source file
        line: u64,
        /// Column name
        field: String,
        /// Description of the problem
        message: String,
    },

    /// The requested query route does not exist
    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    /// Response serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Additional context wrapped around another error
    #[error("{context}: {source}")]
    Context {
        /// Context message
        context: String,
        /// The wrapped error
        #[source]
        source: Box<Error>,
    },
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create an IO error without an underlying source
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an IO error wrapping an `io::Error`
    pub fn io_error_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: Some(source),
        }
    }

    /// Attach a file path to an IO error. Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Io {
                message, source, ..
            } => Self::Io {
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// Wrap the error with a context message
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::io_error_with_source(error.to_string(), error)
    }
}

/// Result type for dataset and dispatch operations
pub type Result<T> = std::result::Result<T, Error>;
