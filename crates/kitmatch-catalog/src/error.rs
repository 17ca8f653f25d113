//! Error types for the kitmatch-catalog crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The CSV source could not be opened or read.
    #[error("failed to read catalog {origin}: {message}")]
    Read {
        /// File path or source description.
        origin: String,
        /// Underlying error message.
        message: String,
    },

    /// The header row has no name column.
    #[error("catalog {origin} has no name column (expected `name` or `nama_alat`)")]
    MissingNameColumn {
        /// File path or source description.
        origin: String,
    },

    /// Loading finished without a single usable entry.
    #[error("no equipment entries found in {origin}")]
    Empty {
        /// File path or source description.
        origin: String,
    },
}

impl CatalogError {
    /// Creates a `Read` error from a CSV error.
    pub(crate) fn read(origin: &str, source: &csv::Error) -> Self {
        Self::Read {
            origin: origin.to_string(),
            message: source.to_string(),
        }
    }
}

/// Errors that can occur while writing the audit log.
#[derive(Debug, Error)]
pub enum AuditLogError {
    /// The log file could not be opened or written.
    #[error("failed to write audit log {}: {source}", path.display())]
    Io {
        /// Audit log path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The record could not be serialized.
    #[error("failed to serialize audit record: {0}")]
    Serialize(#[from] serde_json::Error),
}
