//! Error types for the matching engine.

use std::fmt::Display;

use thiserror::Error;

/// Hint returned when a request carries no usable preference signal.
pub const VAGUE_REQUEST_HINT: &str = "request is too vague to match: describe the environment \
     (outdoor, indoor, studio), the content focus (vlog, podcast, interview, wedding) or a \
     priority (audio, stabilizer, cheap, portable)";

/// Errors that can occur while matching a request against a catalog.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The extracted preference has no signal to rank on.
    #[error("{hint}")]
    Validation {
        /// User-facing hint on what to add to the request.
        hint: String,
    },

    /// The catalog snapshot holds no kits.
    #[error("catalog is empty, nothing to rank")]
    EmptyCatalog,

    /// The configured stemmer language is not supported.
    #[error("unsupported stemmer language: {0}")]
    Stemmer(String),

    /// The configured stopword language is not supported.
    #[error("unsupported stopword language: {0}")]
    StopwordLanguage(String),
}

impl MatchError {
    /// Builds the validation error raised for signal-free requests.
    pub fn vague_request() -> Self {
        Self::Validation {
            hint: VAGUE_REQUEST_HINT.to_string(),
        }
    }
}

/// Error reported by an audit sink.
///
/// Sinks live outside the engine and may fail for any I/O reason, so the failure is carried as
/// a rendered message.
#[derive(Debug, Error)]
#[error("audit sink failed: {message}")]
pub struct AuditError {
    /// Rendered cause.
    message: String,
}

impl AuditError {
    /// Creates an audit error from any displayable cause.
    pub fn new(cause: impl Display) -> Self {
        Self {
            message: cause.to_string(),
        }
    }
}
