//! Error types for board operations
//!
//! The `Display` text of each variant is the user-facing message; public
//! board entry points never let a collaborator error escape undressed.

use thiserror::Error;

/// Errors surfaced by user-initiated board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// The account's clip limit is already reached
    #[error("Track limit reached ({limit}). You can still save labels and icons, but cannot upload more audio clips.")]
    CapacityExceeded { limit: usize },

    /// The clip upload failed
    #[error("Failed to upload audio clip: {0}")]
    Upload(String),

    /// The metadata save failed
    #[error("Failed to save track: {0}")]
    Save(String),

    /// No slot with the given id
    #[error("Unknown slot: {0}")]
    SlotNotFound(String),
}

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
