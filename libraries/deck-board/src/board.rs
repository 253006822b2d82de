//! The board session
//!
//! Wires the slot grid and the playback engine to the remote
//! collaborators. All methods take `&mut self`, so operations are
//! serialized on one logical thread; the awaited collaborator calls are
//! the only suspension points. In-flight responses that land after a
//! newer local action merge idempotently by id, so the newest action's
//! effects always win.

use crate::{
    account::Account,
    error::{BoardError, Result},
    remote::RemoteStore,
};
use deck_playback::{
    AudioOutput, PlaybackConfig, PlaybackEngine, PlaybackEvent, PlaybackSession, RemoveOutcome,
    Slot, SlotGrid, SlotPatch, TrackRecord,
};
use deck_server_client::SaveTrackRequest;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A user's soundboard session
pub struct Board<R: RemoteStore> {
    slots: SlotGrid,
    engine: PlaybackEngine,
    account: Account,
    remote: R,
}

impl<R: RemoteStore> Board<R> {
    /// Create a board session sized to the account's capacity
    pub fn new(
        output: Box<dyn AudioOutput>,
        config: PlaybackConfig,
        account: Account,
        remote: R,
    ) -> Self {
        let mut slots = SlotGrid::new();
        slots.initialize_or_resize(account.max_slots);

        Self {
            slots,
            engine: PlaybackEngine::new(output, config),
            account,
            remote,
        }
    }

    // ===== Remote reconciliation =====

    /// Fetch the account's saved tracks and merge them into the grid
    ///
    /// A fetch failure is logged and leaves local state unchanged; the
    /// client already decodes non-sequence payloads to an empty list.
    /// Returns the number of merged records.
    pub async fn refresh(&mut self) -> usize {
        match self.remote.fetch_tracks().await {
            Ok(tracks) => {
                let records: Vec<TrackRecord> = tracks
                    .into_iter()
                    .map(|t| TrackRecord {
                        id: t.id,
                        label: t.label,
                        icon_key: t.icon,
                        clip_url: t.file,
                    })
                    .collect();
                self.slots.merge_remote(&records);
                debug!(count = records.len(), "Merged remote tracks");
                records.len()
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch tracks; keeping local state");
                0
            }
        }
    }

    /// Apply an externally changed capacity
    ///
    /// The account owns this value; the board resizes the grid to track
    /// it whenever it is pushed in.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.account.max_slots = capacity;
        self.slots.initialize_or_resize(capacity);
    }

    // ===== Save & delete =====

    /// Save a slot's label, icon, and optionally a new clip file
    ///
    /// The capacity pre-check runs before any upload: a new clip on a
    /// slot that does not already hold one counts against the account
    /// limit unless the account is exempt; label/icon-only saves are
    /// never blocked. The local slot is only ever updated from the
    /// server's response, so any failure leaves it untouched.
    pub async fn save(
        &mut self,
        slot_id: &str,
        label: Option<String>,
        icon_key: Option<String>,
        file: Option<&Path>,
    ) -> Result<()> {
        let target = self
            .slots
            .get(slot_id)
            .ok_or_else(|| BoardError::SlotNotFound(slot_id.to_string()))?;
        let old_clip = target.clip_url.clone();
        let replacing = old_clip.is_some();

        if file.is_some() && !self.account.capacity_exempt() && !replacing {
            let used = self.slots.clip_count();
            if used >= self.account.max_slots {
                info!(
                    slot_id = %slot_id,
                    used,
                    limit = self.account.max_slots,
                    "Upload refused by capacity check"
                );
                return Err(BoardError::CapacityExceeded {
                    limit: self.account.max_slots,
                });
            }
        }

        let mut clip_url = None;
        if let Some(path) = file {
            let url = self
                .remote
                .upload_clip(path)
                .await
                .map_err(|e| BoardError::Upload(e.to_string()))?;

            // Stale-object cleanup is best-effort; the save proceeds
            // regardless.
            if let Some(old) = old_clip.as_deref() {
                if old != url {
                    if let Err(err) = self.remote.delete_clip(old).await {
                        warn!(clip = %old, error = %err, "Failed to delete stale clip");
                    }
                }
            }
            clip_url = Some(url);
        }

        let request = SaveTrackRequest {
            id: slot_id.to_string(),
            label,
            icon: icon_key,
            file: clip_url,
        };
        let saved = self
            .remote
            .save_track(&request)
            .await
            .map_err(|e| BoardError::Save(e.to_string()))?;

        // Only the server's response is trusted into local state.
        self.slots.upsert_local(
            slot_id,
            SlotPatch {
                label: saved.label,
                icon_key: saved.icon,
                clip_url: saved.file,
            },
        );
        info!(slot_id = %slot_id, "Slot saved");
        Ok(())
    }

    /// Delete a slot: demote in place or drop the row, then clean up
    ///
    /// Local state updates first; when the slot held a clip, the remote
    /// record removal follows as best-effort and is logged on failure.
    /// Deleting the bound slot stops playback outright.
    pub async fn delete(&mut self, slot_id: &str) {
        let had_clip = self.slots.get(slot_id).is_some_and(Slot::has_clip);

        match self.slots.remove(slot_id) {
            RemoveOutcome::NotFound => return,
            outcome => debug!(slot_id = %slot_id, ?outcome, "Slot removed locally"),
        }
        self.engine.handle_slot_removed(slot_id);

        if had_clip {
            if let Err(err) = self.remote.delete_track(slot_id).await {
                warn!(slot_id = %slot_id, error = %err, "Failed to delete remote track");
            }
        }
    }

    /// Append one empty slot beyond the current capacity
    pub fn add_slot(&mut self) -> String {
        self.slots.append()
    }

    // ===== Playback =====

    pub fn play(&mut self, slot_id: &str) {
        self.engine.play(&self.slots, slot_id);
    }

    pub fn toggle_play(&mut self) {
        self.engine.toggle_play();
    }

    pub fn next(&mut self) {
        self.engine.next(&self.slots);
    }

    pub fn back(&mut self) {
        self.engine.back(&self.slots);
    }

    pub fn seek(&mut self, position: Duration) {
        self.engine.seek(position);
    }

    pub fn set_volume(&mut self, level: u8) {
        self.engine.set_volume(level);
    }

    pub fn set_fade_in(&mut self, enabled: bool) {
        self.engine.set_fade_in(enabled);
    }

    pub fn set_fade_out(&mut self, enabled: bool) {
        self.engine.set_fade_out(enabled);
    }

    pub fn toggle_repeat(&mut self) {
        self.engine.toggle_repeat();
    }

    /// Forward the output's natural end-of-track notification
    pub fn handle_track_ended(&mut self) {
        self.engine.handle_track_ended();
    }

    /// Advance the active fade; the host schedules this while
    /// [`Board::is_fading`] is true
    pub fn fade_tick(&mut self) {
        self.engine.fade_tick();
    }

    pub fn is_fading(&self) -> bool {
        self.engine.is_fading()
    }

    /// Drain queued playback events for UI synchronization
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.engine.drain_events()
    }

    // ===== Observation =====

    /// The slot collection, in grid order
    pub fn slots(&self) -> &[Slot] {
        self.slots.slots()
    }

    /// Read-only playback session snapshot
    pub fn session(&self) -> PlaybackSession {
        self.engine.session()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }
}
