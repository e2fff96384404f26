//! Error types.

use thiserror::Error;

/// Errors raised when a location cannot be resolved against its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Byte offsets need the source text of the file to be resolved.
    #[error("no source bound to descriptor '{descriptor}' for offset location")]
    MissingSource {
        /// Name of the descriptor the problem is attached to.
        descriptor: String,
    },

    /// Offset beyond the end of the bound source.
    #[error("offset {offset} is out of range for source of {len} bytes")]
    OffsetOutOfRange {
        /// The offending offset.
        offset: u32,
        /// Length of the bound source.
        len: u32,
    },

    /// Range whose end lies before its start.
    #[error("inverted range {start}..{end}")]
    InvertedRange {
        /// Start offset.
        start: u32,
        /// End offset.
        end: u32,
    },
}

/// Errors raised when a protobuf source span is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Spans have exactly three or four elements.
    #[error("span must have 3 or 4 elements, got {0}")]
    InvalidLength(usize),

    /// Span elements are zero-based line and column numbers.
    #[error("span contains negative value {0}")]
    Negative(i32),
}

/// Errors produced by an output formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Location resolution failed.
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing into the output buffer failed.
    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Errors that can occur while loading input or configuration.
#[derive(Debug, Error)]
pub enum LintnoteError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed lint input.
    #[error("Input error: {0}")]
    Input(String),

    /// Location resolution error.
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    /// Formatter error.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintnoteError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}
