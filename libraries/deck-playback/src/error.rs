//! Error types for the playback core

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently bound to the output
    #[error("No track bound")]
    NoTrackBound,

    /// The audio output rejected an operation
    ///
    /// Covers decode failures and platform autoplay policy rejections.
    #[error("Audio output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
