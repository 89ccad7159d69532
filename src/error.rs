//! Error types for kick synthesis and parameter search.

use thiserror::Error;

/// Result type for synthesis, encoding and search operations.
pub type KickResult<T> = Result<T, KickError>;

/// Errors surfaced by `render`, `save` and `optimize`.
#[derive(Debug, Error)]
pub enum KickError {
    /// The parameter record violates one of its invariants.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameters {
        /// Offending field.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// The WAV sink rejected a write or the final header patch.
    #[error("failed to write WAV")]
    WriteFailed(#[source] hound::Error),

    /// The reference WAV could not be opened or parsed.
    #[error("failed to decode reference WAV")]
    DecodeFailed(#[source] hound::Error),

    /// Rendering one individual failed during a search.
    #[error("render failed for individual {index}")]
    RenderFailed {
        /// Population slot of the individual.
        index: usize,
        /// Underlying render error.
        #[source]
        source: Box<KickError>,
    },

    /// The search observed its cancellation signal.
    #[error("optimization cancelled")]
    Cancelled,
}

impl KickError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps anything hound can represent (including `io::Error`) as a write failure.
    pub fn write(err: impl Into<hound::Error>) -> Self {
        Self::WriteFailed(err.into())
    }

    /// Wraps anything hound can represent as a decode failure.
    pub fn decode(err: impl Into<hound::Error>) -> Self {
        Self::DecodeFailed(err.into())
    }
}
