//! Playback events
//!
//! Event-based communication for UI synchronization. The engine queues
//! events as transitions happen; the host drains them after each call
//! and mirrors them into whatever presentation layer it drives.

use crate::fade::FadeDirection;
use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed (playing, paused, idle)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different slot was bound to the output
    TrackBound {
        /// Id of the newly bound slot
        slot_id: String,
        /// Id of the previously bound slot (if any)
        previous: Option<String>,
    },

    /// The bound track finished playing naturally (reached end)
    TrackFinished {
        /// Id of the finished slot
        slot_id: String,
    },

    /// A volume ramp started
    FadeStarted { direction: FadeDirection },

    /// A volume ramp ran to completion
    FadeCompleted { direction: FadeDirection },

    /// Volume target changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
