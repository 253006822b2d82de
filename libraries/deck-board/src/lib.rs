//! SoundDeck Board
//!
//! The board session for SoundDeck: wires the slot grid and playback
//! engine from `deck-playback` to the remote collaborators behind
//! [`RemoteStore`], and hosts the upload/save orchestration.
//!
//! # Responsibilities
//!
//! - **Reconciliation**: fetch the account's saved tracks and merge them
//!   into the grid, tolerating malformed or failed fetches
//! - **Capacity**: resize the grid when the account's limit changes, and
//!   pre-check uploads against the limit before any bytes move
//! - **Save orchestration**: upload → best-effort stale-clip cleanup →
//!   metadata upsert → authoritative local update, with no partial
//!   writes to local state on failure
//! - **Delete orchestration**: two-stage local removal, playback unbind,
//!   best-effort remote record cleanup
//! - **Playback passthroughs**: the engine's controls, exposed on the
//!   session object the presentation layer holds

mod account;
mod board;
mod error;
mod remote;

pub use account::{Account, AccountRole};
pub use board::Board;
pub use error::{BoardError, Result};
pub use remote::RemoteStore;
