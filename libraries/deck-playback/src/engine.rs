//! Playback engine - the state machine over the single audio output
//!
//! Owns the output resource and the playback session state. Every
//! transition funnels through these methods, so the output never has two
//! writers. The host schedules [`PlaybackEngine::fade_tick`] every
//! [`crate::fade::FADE_STEP_INTERVAL`] while [`PlaybackEngine::is_fading`]
//! reports true; everything else is driven by user actions and the
//! output's end-of-track notification.

use crate::{
    events::PlaybackEvent,
    fade::{FadeDirection, FadeRamp, FadeStep},
    output::AudioOutput,
    slots::SlotGrid,
    types::{PlaybackConfig, PlaybackSession, PlaybackState},
    volume::Volume,
};
use std::time::Duration;
use tracing::{debug, warn};

/// The active ramp plus its direction
struct ActiveFade {
    ramp: FadeRamp,
    direction: FadeDirection,
}

/// Single-output playback engine
///
/// State machine over one audio output: `Idle` (nothing bound),
/// `Paused` (bound, silent), `Playing` (bound, sounding). The slot grid
/// is read-only input to `play`/`next`/`back`; the grid's owner reports
/// removals through [`PlaybackEngine::handle_slot_removed`].
pub struct PlaybackEngine {
    output: Box<dyn AudioOutput>,

    // Session state
    bound_track: Option<String>,
    is_playing: bool,
    volume: Volume,
    fade_in_enabled: bool,
    fade_out_enabled: bool,
    repeat_enabled: bool,

    // At most one ramp owns the output gain at a time; clearing this
    // option is the cancel handle.
    fade: Option<ActiveFade>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackEngine {
    /// Create an engine driving the given output
    pub fn new(output: Box<dyn AudioOutput>, config: PlaybackConfig) -> Self {
        let mut engine = Self {
            output,
            bound_track: None,
            is_playing: false,
            volume: Volume::new(config.volume),
            fade_in_enabled: config.fade_in,
            fade_out_enabled: config.fade_out,
            repeat_enabled: config.repeat,
            fade: None,
            pending_events: Vec::new(),
        };
        let gain = engine.volume.gain();
        engine.output.set_volume(gain);
        engine
    }

    // ===== Playback Control =====

    /// Bind and play the slot with the given id
    ///
    /// Playing the already-bound slot toggles play/pause instead.
    /// Switching tracks cancels any in-flight fade outright and starts
    /// fresh: the clip is loaded from the start and, with fade-in
    /// enabled, ramps up from silence toward the full current target.
    /// An interrupted ramp is never resumed.
    pub fn play(&mut self, slots: &SlotGrid, id: &str) {
        let Some(clip_url) = slots.get(id).and_then(|s| s.clip_url.clone()) else {
            warn!(slot_id = %id, "no audio clip for this slot");
            return;
        };

        if self.bound_track.as_deref() == Some(id) {
            self.toggle_play();
            return;
        }

        self.cancel_fade();
        let previous = self.bound_track.replace(id.to_string());
        self.emit_track_bound(id.to_string(), previous);

        if let Err(err) = self.output.load(&clip_url) {
            warn!(slot_id = %id, error = %err, "failed to load clip");
            self.is_playing = false;
            self.emit_error(format!("Failed to load clip: {err}"));
            return;
        }

        self.start_playback();
    }

    /// Toggle between playing and paused for the bound track
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause_playback();
        } else {
            if self.bound_track.is_none() {
                debug!("toggle ignored: no track bound");
                return;
            }
            self.start_playback();
        }
    }

    /// Advance to the next clip-bearing slot, wrapping at the end
    pub fn next(&mut self, slots: &SlotGrid) {
        self.step(slots, 1);
    }

    /// Retreat to the previous clip-bearing slot, wrapping at the start
    pub fn back(&mut self, slots: &SlotGrid) {
        self.step(slots, -1);
    }

    fn step(&mut self, slots: &SlotGrid, delta: isize) {
        let Some(current) = self.bound_track.clone() else {
            return;
        };
        let sequence = slots.clip_slots();
        if sequence.is_empty() {
            return;
        }
        let Some(position) = sequence.iter().position(|s| s.id == current) else {
            return;
        };

        let len = sequence.len() as isize;
        let target_index = (position as isize + delta).rem_euclid(len) as usize;
        let target = sequence[target_index].id.clone();
        self.play(slots, &target);
    }

    /// Notification from the output that the bound track ended naturally
    ///
    /// With repeat enabled the output restarts in place, without
    /// re-entering the play transition; otherwise the engine parks in
    /// the paused state with the bound track preserved, so the controls
    /// stay addressable.
    pub fn handle_track_ended(&mut self) {
        if self.bound_track.is_none() {
            return;
        }
        self.cancel_fade();

        if self.repeat_enabled {
            self.output.seek(Duration::ZERO);
            if let Err(err) = self.output.play() {
                warn!(error = %err, "output rejected repeat restart");
                self.is_playing = false;
                self.emit_state_changed(PlaybackState::Paused);
            }
        } else {
            self.is_playing = false;
            if let Some(id) = self.bound_track.clone() {
                self.emit_track_finished(id);
            }
            self.emit_state_changed(PlaybackState::Paused);
        }
    }

    /// React to a slot being removed from the grid
    ///
    /// Removing the bound slot forces the engine back to idle. An
    /// in-flight fade is cancelled, never completed.
    pub fn handle_slot_removed(&mut self, id: &str) {
        if self.bound_track.as_deref() != Some(id) {
            return;
        }
        self.cancel_fade();
        self.is_playing = false;
        self.bound_track = None;
        self.output.pause();
        self.emit_state_changed(PlaybackState::Idle);
    }

    // ===== Seek & Volume =====

    /// Move the output position; allowed whenever a track is bound
    ///
    /// Has no effect on the play/pause state.
    pub fn seek(&mut self, position: Duration) {
        if self.bound_track.is_none() {
            debug!("seek ignored: no track bound");
            return;
        }
        self.output.seek(position);
    }

    /// Set the volume target (0-100, clamped)
    ///
    /// Applied to the output immediately unless a fade is active: the
    /// ramp owns the output gain until it finishes, and the new level is
    /// the reference point fades land on afterwards.
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        if self.fade.is_none() {
            let gain = self.volume.gain();
            self.output.set_volume(gain);
        }
        self.emit_volume_changed();
    }

    // ===== Toggles =====

    pub fn set_fade_in(&mut self, enabled: bool) {
        self.fade_in_enabled = enabled;
    }

    pub fn set_fade_out(&mut self, enabled: bool) {
        self.fade_out_enabled = enabled;
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat_enabled = !self.repeat_enabled;
    }

    // ===== Fade drive =====

    /// Advance the active fade by one step
    ///
    /// The host calls this every [`crate::fade::FADE_STEP_INTERVAL`]
    /// while [`Self::is_fading`] is true. A tick with no active fade is
    /// a no-op, so a cancelled ramp cannot keep mutating the output.
    pub fn fade_tick(&mut self) {
        let Some(active) = self.fade.as_mut() else {
            return;
        };

        match active.ramp.advance() {
            FadeStep::Ramping(gain) => self.output.set_volume(gain),
            FadeStep::Complete(final_gain) => {
                let direction = active.direction;
                self.fade = None;

                match direction {
                    FadeDirection::In => {
                        // Land on the current target, which may have
                        // moved while the ramp owned the gain.
                        let gain = self.volume.gain();
                        self.output.set_volume(gain);
                    }
                    FadeDirection::Out => {
                        self.output.set_volume(final_gain);
                        self.output.pause();
                        self.is_playing = false;
                        self.emit_state_changed(PlaybackState::Paused);
                    }
                }
                self.emit_fade_completed(direction);
            }
        }
    }

    /// Whether a fade currently owns the output gain
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    // ===== State queries =====

    pub fn bound_track(&self) -> Option<&str> {
        self.bound_track.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn repeat_enabled(&self) -> bool {
        self.repeat_enabled
    }

    /// Current derived state
    pub fn state(&self) -> PlaybackState {
        match (&self.bound_track, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    /// Read-only session snapshot for presentation
    pub fn session(&self) -> PlaybackSession {
        PlaybackSession {
            bound_track: self.bound_track.clone(),
            state: self.state(),
            volume: self.volume.level(),
            fade_in: self.fade_in_enabled,
            fade_out: self.fade_out_enabled,
            repeat: self.repeat_enabled,
            fading: self.fade.is_some(),
        }
    }

    /// Borrow the output, for hosts that surface position or duration
    pub fn output(&self) -> &dyn AudioOutput {
        self.output.as_ref()
    }

    // ===== Events =====

    /// Drain queued events for UI synchronization
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal transitions =====

    /// Enter the playing state, ramping in when enabled
    ///
    /// Sound starts immediately; with fade-in enabled it starts silent
    /// and ramps toward the target, it never waits for the ramp.
    fn start_playback(&mut self) {
        self.is_playing = true;

        if self.fade_in_enabled {
            self.output.set_volume(0.0);
            self.begin_fade(FadeDirection::In, 0.0, self.volume.gain());
        } else {
            let gain = self.volume.gain();
            self.output.set_volume(gain);
        }

        if let Err(err) = self.output.play() {
            warn!(error = %err, "output rejected play");
            self.is_playing = false;
            self.cancel_fade();
            self.emit_error(format!("Playback failed: {err}"));
            return;
        }

        self.emit_state_changed(PlaybackState::Playing);
    }

    /// Leave the playing state, ramping out when enabled
    ///
    /// With fade-out enabled and the output audibly sounding, the ramp
    /// runs first and the pause lands on its completion; `is_playing`
    /// stays true until then.
    fn pause_playback(&mut self) {
        if self.fade_out_enabled && !self.output.is_paused() {
            let from = self.output.volume();
            self.begin_fade(FadeDirection::Out, from, 0.0);
        } else {
            self.cancel_fade();
            self.is_playing = false;
            self.output.pause();
            self.emit_state_changed(PlaybackState::Paused);
        }
    }

    /// Start a ramp, discarding any previous one; ramps never stack
    fn begin_fade(&mut self, direction: FadeDirection, from: f32, to: f32) {
        self.fade = Some(ActiveFade {
            ramp: FadeRamp::new(from, to),
            direction,
        });
        self.emit_fade_started(direction);
    }

    fn cancel_fade(&mut self) {
        self.fade = None;
    }

    fn emit_state_changed(&mut self, state: PlaybackState) {
        self.pending_events.push(PlaybackEvent::StateChanged { state });
    }

    fn emit_track_bound(&mut self, slot_id: String, previous: Option<String>) {
        self.pending_events
            .push(PlaybackEvent::TrackBound { slot_id, previous });
    }

    fn emit_track_finished(&mut self, slot_id: String) {
        self.pending_events
            .push(PlaybackEvent::TrackFinished { slot_id });
    }

    fn emit_fade_started(&mut self, direction: FadeDirection) {
        self.pending_events
            .push(PlaybackEvent::FadeStarted { direction });
    }

    fn emit_fade_completed(&mut self, direction: FadeDirection) {
        self.pending_events
            .push(PlaybackEvent::FadeCompleted { direction });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
        });
    }

    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlaybackEvent::Error { message });
    }
}
