//! SoundDeck - Playback Core
//!
//! Platform-agnostic slot grid and playback engine for SoundDeck.
//!
//! This crate provides:
//! - The slot grid: a bounded, ordered collection of clip slots kept in
//!   sync with the account capacity and with server-fetched track data
//! - The playback engine: play/pause/next/back/seek/repeat over a single
//!   injected audio output
//! - Linear fade-in/fade-out volume ramps (cancellable, never stacked)
//! - Volume control (linear, 0-100%)
//!
//! # Architecture
//!
//! `deck-playback` is completely platform-agnostic:
//! - No audio backend
//! - No HTTP or async runtime
//! - No dependency on the server client
//!
//! The output device is injected via the [`AudioOutput`] trait, and the
//! host drives the fade clock by calling [`PlaybackEngine::fade_tick`]
//! every [`fade::FADE_STEP_INTERVAL`] while a fade is active.
//!
//! # Example
//!
//! ```rust
//! use deck_playback::{
//!     AudioOutput, PlaybackConfig, PlaybackEngine, Result, SlotGrid, TrackRecord,
//! };
//! use std::time::Duration;
//!
//! // Implement AudioOutput for your platform
//! struct SilentOutput {
//!     gain: f32,
//!     paused: bool,
//!     position: Duration,
//! }
//!
//! impl AudioOutput for SilentOutput {
//!     fn load(&mut self, _clip_url: &str) -> Result<()> {
//!         self.position = Duration::ZERO;
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         self.paused = false;
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//!     fn set_volume(&mut self, gain: f32) {
//!         self.gain = gain;
//!     }
//!     fn volume(&self) -> f32 {
//!         self.gain
//!     }
//!     fn seek(&mut self, position: Duration) {
//!         self.position = position;
//!     }
//!     fn position(&self) -> Duration {
//!         self.position
//!     }
//! }
//!
//! let output = SilentOutput {
//!     gain: 0.0,
//!     paused: true,
//!     position: Duration::ZERO,
//! };
//! let mut engine = PlaybackEngine::new(Box::new(output), PlaybackConfig::default());
//!
//! // The grid tracks the account capacity and absorbs server data
//! let mut grid = SlotGrid::new();
//! grid.initialize_or_resize(8);
//! grid.merge_remote(&[TrackRecord {
//!     id: "5".to_string(),
//!     label: Some("Airhorn".to_string()),
//!     icon_key: None,
//!     clip_url: Some("https://cdn.example.com/airhorn.mp3".to_string()),
//! }]);
//!
//! engine.play(&grid, "5");
//! assert!(engine.is_playing());
//! ```

mod engine;
mod error;
mod output;
mod slots;
mod volume;
pub mod events;
pub mod fade;
pub mod types;

// Public exports
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use fade::{FadeDirection, FadeRamp, FadeStep, FADE_DURATION, FADE_STEPS, FADE_STEP_INTERVAL};
pub use output::AudioOutput;
pub use slots::{RemoveOutcome, SlotGrid, TrackRecord};
pub use types::{PlaybackConfig, PlaybackSession, PlaybackState, Slot, SlotPatch};
pub use volume::Volume;
