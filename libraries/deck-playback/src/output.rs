//! Audio output abstraction
//!
//! The engine owns exactly one output for its whole lifetime. Platform
//! code (an HTML audio element, a native device stream) implements this
//! trait; the engine is the only writer, so every volume and transport
//! mutation funnels through its public transitions.

use crate::error::Result;
use std::time::Duration;

/// The single shared audio output the engine drives
pub trait AudioOutput {
    /// Bind a new clip source, resetting the position to the start
    fn load(&mut self, clip_url: &str) -> Result<()>;

    /// Begin or resume producing sound
    ///
    /// May be rejected by the platform (decode failure, autoplay policy).
    fn play(&mut self) -> Result<()>;

    /// Stop producing sound, keeping the position
    fn pause(&mut self);

    /// Whether the output is currently silent (paused or never started)
    fn is_paused(&self) -> bool;

    /// Set the output gain, 0.0-1.0
    fn set_volume(&mut self, gain: f32);

    /// Current output gain, 0.0-1.0
    fn volume(&self) -> f32;

    /// Move the playback position
    fn seek(&mut self, position: Duration);

    /// Current playback position
    fn position(&self) -> Duration;
}
