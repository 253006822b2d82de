//! Core types for the slot grid and playback engine

use serde::{Deserialize, Serialize};

/// A positional placeholder in the soundboard grid
///
/// A slot either holds a clip binding plus display metadata, or is empty.
/// Absence of `clip_url` is what marks a slot empty; an empty slot can
/// never become the bound track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Stable identifier
    ///
    /// Server-assigned ids persist across sessions and reference a saved
    /// track. Locally minted ids carry a `local-` prefix and belong to
    /// placeholder slots that have not been saved yet.
    pub id: String,

    /// Display name
    pub label: Option<String>,

    /// Symbolic icon reference, decoupled from rendering
    pub icon_key: Option<String>,

    /// Reference to playable audio; `None` marks the slot empty
    pub clip_url: Option<String>,
}

impl Slot {
    /// Create an empty slot with the given id
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon_key: None,
            clip_url: None,
        }
    }

    /// Whether this slot holds a playable clip
    pub fn has_clip(&self) -> bool {
        self.clip_url.is_some()
    }
}

/// Replacement data for a slot, keyed by slot id
///
/// All three fields are overwritten on apply; the slot's id and grid
/// position are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPatch {
    pub label: Option<String>,
    pub icon_key: Option<String>,
    pub clip_url: Option<String>,
}

/// Playback state derived from the bound track and the play flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track bound to the output
    Idle,

    /// A track is bound but not playing
    Paused,

    /// A track is bound and playing
    Playing,
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 50)
    pub volume: u8,

    /// Ramp the volume in when playback starts (default: off)
    pub fade_in: bool,

    /// Ramp the volume out before pausing (default: off)
    pub fade_out: bool,

    /// Restart the bound track when it ends (default: off)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 50,
            fade_in: false,
            fade_out: false,
            repeat: false,
        }
    }
}

/// Read-only snapshot of the playback session for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// Id of the slot currently loaded into the output, if any
    pub bound_track: Option<String>,
    pub state: PlaybackState,
    pub volume: u8,
    pub fade_in: bool,
    pub fade_out: bool,
    pub repeat: bool,
    /// Whether a volume ramp currently owns the output gain
    pub fading: bool,
}
