//! Slot grid reconciliation
//!
//! Maintains the ordered slot collection: sizing it against the account
//! capacity, merging server-fetched track data into it, and the local
//! edits (upsert, two-stage delete, manual append). All operations are
//! synchronous and run on one thread, so a merge can never observe a
//! concurrent resize.

use crate::types::{Slot, SlotPatch};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// A server-known track to merge into the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: String,
    pub label: Option<String>,
    pub icon_key: Option<String>,
    pub clip_url: Option<String>,
}

/// Outcome of a two-stage removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The slot held a clip and was demoted to empty in place
    Cleared,

    /// The slot was already empty and its row was removed
    Removed,

    /// No slot with that id
    NotFound,
}

/// The ordered, bounded slot collection
#[derive(Debug, Clone, Default)]
pub struct SlotGrid {
    slots: Vec<Slot>,

    /// Sequence counter folded into locally minted ids
    local_seq: u64,
}

impl SlotGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            local_seq: 0,
        }
    }

    /// Size the grid against the account capacity
    ///
    /// First fill seeds `capacity` empty slots with ids `"1"`..`"N"`,
    /// the ids server records are keyed against. Growth appends fresh
    /// empty slots with local ids; shrinking keeps the first `capacity`
    /// rows and drops the rest, including any bound clips. The truncation
    /// is intentional and destructive, triggered only by an external
    /// capacity reduction; dropped rows are not cleaned up remotely.
    pub fn initialize_or_resize(&mut self, capacity: usize) {
        if self.slots.is_empty() {
            self.slots = (1..=capacity).map(|i| Slot::empty(i.to_string())).collect();
            return;
        }

        if self.slots.len() < capacity {
            while self.slots.len() < capacity {
                let id = self.fresh_local_id();
                self.slots.push(Slot::empty(id));
            }
        } else {
            self.slots.truncate(capacity);
        }
    }

    /// Merge server-known tracks into the grid
    ///
    /// Per track: a slot with the same id is overwritten in place; else
    /// the first empty slot (left to right) absorbs the record and adopts
    /// its id; else the record is appended, which covers accounts whose
    /// stored tracks exceed the current capacity. Running the same input
    /// twice changes nothing the second time: the first pass leaves every
    /// record id-matched.
    pub fn merge_remote(&mut self, tracks: &[TrackRecord]) {
        for track in tracks {
            let filled = Slot {
                id: track.id.clone(),
                label: track.label.clone(),
                icon_key: track.icon_key.clone(),
                clip_url: track.clip_url.clone(),
            };

            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == track.id) {
                *slot = filled;
            } else if let Some(slot) = self.slots.iter_mut().find(|s| !s.has_clip()) {
                *slot = filled;
            } else {
                self.slots.push(filled);
            }
        }
    }

    /// Overwrite the data fields of the slot with the given id
    ///
    /// The slot must already exist; an unknown id is ignored.
    pub fn upsert_local(&mut self, id: &str, patch: SlotPatch) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            slot.label = patch.label;
            slot.icon_key = patch.icon_key;
            slot.clip_url = patch.clip_url;
        } else {
            debug!(slot_id = %id, "upsert on unknown slot ignored");
        }
    }

    /// Two-stage removal
    ///
    /// A slot holding a clip is demoted to empty in place, preserving its
    /// id and grid position so the freshly emptied slot is immediately
    /// reusable without layout shift. An already-empty slot is removed
    /// from the collection entirely.
    pub fn remove(&mut self, id: &str) -> RemoveOutcome {
        let Some(index) = self.slots.iter().position(|s| s.id == id) else {
            return RemoveOutcome::NotFound;
        };

        if self.slots[index].has_clip() {
            let kept_id = self.slots[index].id.clone();
            self.slots[index] = Slot::empty(kept_id);
            RemoveOutcome::Cleared
        } else {
            self.slots.remove(index);
            RemoveOutcome::Removed
        }
    }

    /// Append one new empty slot, returning its fresh local id
    pub fn append(&mut self) -> String {
        let id = self.fresh_local_id();
        self.slots.push(Slot::empty(id.clone()));
        id
    }

    /// Slot lookup by id
    pub fn get(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// All slots in grid order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots currently holding a clip
    pub fn clip_count(&self) -> usize {
        self.slots.iter().filter(|s| s.has_clip()).count()
    }

    /// The clip-bearing slots in grid order (the next/back sequence)
    pub fn clip_slots(&self) -> Vec<&Slot> {
        self.slots.iter().filter(|s| s.has_clip()).collect()
    }

    /// Mint a namespaced local id
    ///
    /// Time-based with a per-grid sequence suffix so same-millisecond
    /// mints stay unique. The `local-` prefix keeps placeholder ids out
    /// of the server-assigned id space.
    fn fresh_local_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.local_seq += 1;
        format!("local-{millis}-{}", self.local_seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, clip: Option<&str>) -> TrackRecord {
        TrackRecord {
            id: id.to_string(),
            label: Some(format!("Track {id}")),
            icon_key: None,
            clip_url: clip.map(String::from),
        }
    }

    #[test]
    fn first_fill_seeds_numbered_ids() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(8);

        assert_eq!(grid.len(), 8);
        assert_eq!(grid.slots()[0].id, "1");
        assert_eq!(grid.slots()[7].id, "8");
        assert!(grid.slots().iter().all(|s| !s.has_clip()));
    }

    #[test]
    fn growth_appends_unique_local_ids() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(4);
        grid.initialize_or_resize(7);

        assert_eq!(grid.len(), 7);
        // The first four keep their seeded ids
        assert_eq!(grid.slots()[3].id, "4");
        // The appended slots are namespaced and mutually distinct
        let appended: Vec<&str> = grid.slots()[4..].iter().map(|s| s.id.as_str()).collect();
        assert!(appended.iter().all(|id| id.starts_with("local-")));
        assert_ne!(appended[0], appended[1]);
        assert_ne!(appended[1], appended[2]);
    }

    #[test]
    fn shrink_truncates_including_bound_clips() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(5);
        grid.merge_remote(&[track("5", Some("a.mp3"))]);
        assert_eq!(grid.clip_count(), 1);

        grid.initialize_or_resize(3);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.clip_count(), 0);
    }

    #[test]
    fn length_tracks_capacity_sequence() {
        let mut grid = SlotGrid::new();
        for capacity in [8, 12, 3, 3, 20, 0, 6] {
            grid.initialize_or_resize(capacity);
            if capacity > 0 {
                assert_eq!(grid.len(), capacity);
            }
        }
    }

    #[test]
    fn merge_matches_by_id() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(8);

        grid.merge_remote(&[track("5", Some("a.mp3"))]);

        assert_eq!(grid.len(), 8);
        let slot = grid.get("5").expect("slot 5 exists");
        assert_eq!(slot.clip_url.as_deref(), Some("a.mp3"));
        assert_eq!(grid.clip_count(), 1);
        // Position is untouched
        assert_eq!(grid.slots()[4].id, "5");
    }

    #[test]
    fn merge_falls_back_to_first_empty_slot() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(8);

        grid.merge_remote(&[track("x99", Some("b.mp3"))]);

        assert_eq!(grid.len(), 8);
        // The record landed in position 0 and the slot adopted its id
        assert_eq!(grid.slots()[0].id, "x99");
        assert_eq!(grid.slots()[0].clip_url.as_deref(), Some("b.mp3"));
        assert!(grid.slots()[1..].iter().all(|s| !s.has_clip()));
    }

    #[test]
    fn merge_appends_when_no_slot_is_free() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(2);
        grid.merge_remote(&[track("a", Some("a.mp3")), track("b", Some("b.mp3"))]);
        assert_eq!(grid.len(), 2);

        // A third stored track exceeds the capacity and is appended
        grid.merge_remote(&[track("c", Some("c.mp3"))]);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.slots()[2].id, "c");
    }

    #[test]
    fn merge_is_idempotent() {
        let tracks = vec![
            track("5", Some("a.mp3")),
            track("x99", Some("b.mp3")),
            track("meta-only", None),
        ];

        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(8);
        grid.merge_remote(&tracks);
        let once = grid.slots().to_vec();

        grid.merge_remote(&tracks);
        assert_eq!(grid.slots(), once.as_slice());
    }

    #[test]
    fn merge_preserves_first_match_order() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(3);

        // Both records miss on id; they must fill positions 0 and 1 in
        // input order.
        grid.merge_remote(&[track("p", Some("p.mp3")), track("q", Some("q.mp3"))]);
        assert_eq!(grid.slots()[0].id, "p");
        assert_eq!(grid.slots()[1].id, "q");
        assert_eq!(grid.slots()[2].id, "3");
    }

    #[test]
    fn upsert_overwrites_fields_in_place() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(3);

        grid.upsert_local(
            "2",
            SlotPatch {
                label: Some("Intro".to_string()),
                icon_key: Some("music".to_string()),
                clip_url: Some("intro.mp3".to_string()),
            },
        );

        let slot = grid.get("2").expect("slot 2 exists");
        assert_eq!(slot.label.as_deref(), Some("Intro"));
        assert_eq!(slot.clip_url.as_deref(), Some("intro.mp3"));
        assert_eq!(grid.slots()[1].id, "2");
    }

    #[test]
    fn upsert_on_unknown_id_is_a_noop() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(3);
        let before = grid.slots().to_vec();

        grid.upsert_local("missing", SlotPatch::default());
        assert_eq!(grid.slots(), before.as_slice());
    }

    #[test]
    fn removing_a_clip_slot_demotes_it_in_place() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(4);
        grid.merge_remote(&[track("2", Some("a.mp3"))]);

        assert_eq!(grid.remove("2"), RemoveOutcome::Cleared);
        assert_eq!(grid.len(), 4);
        let slot = grid.get("2").expect("slot 2 kept its row");
        assert!(!slot.has_clip());
        assert!(slot.label.is_none());
        assert_eq!(grid.slots()[1].id, "2");
    }

    #[test]
    fn removing_an_empty_slot_drops_the_row() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(4);

        assert_eq!(grid.remove("3"), RemoveOutcome::Removed);
        assert_eq!(grid.len(), 3);
        assert!(grid.get("3").is_none());
    }

    #[test]
    fn removing_an_unknown_slot_reports_not_found() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(2);
        assert_eq!(grid.remove("nope"), RemoveOutcome::NotFound);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn append_grows_beyond_capacity() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(2);

        let id = grid.append();
        assert_eq!(grid.len(), 3);
        assert!(id.starts_with("local-"));
        assert_eq!(grid.slots()[2].id, id);
    }

    #[test]
    fn clip_slots_keep_grid_order() {
        let mut grid = SlotGrid::new();
        grid.initialize_or_resize(8);
        grid.merge_remote(&[
            track("7", Some("c.mp3")),
            track("2", Some("a.mp3")),
            track("5", Some("b.mp3")),
        ]);

        let order: Vec<&str> = grid.clip_slots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["2", "5", "7"]);
    }
}
