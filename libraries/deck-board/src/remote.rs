//! The remote collaborator contract
//!
//! The board consumes its external services through this trait: the
//! track-list fetch, the clip storage (upload/delete), and the metadata
//! upsert/delete. The reqwest-backed [`BoardServerClient`] implements it
//! for production; tests substitute in-memory fakes.

use async_trait::async_trait;
use deck_server_client::{BoardServerClient, RemoteTrack, Result, SaveTrackRequest};
use std::path::Path;

/// Remote services the board depends on
#[async_trait]
pub trait RemoteStore {
    /// Fetch the account's saved tracks
    ///
    /// Implementations decode non-sequence payloads as an empty list.
    async fn fetch_tracks(&self) -> Result<Vec<RemoteTrack>>;

    /// Upload a clip file and return its durable URL
    async fn upload_clip(&self, path: &Path) -> Result<String>;

    /// Delete a stored clip by URL
    ///
    /// Callers invoke this as best-effort cleanup and swallow failures.
    async fn delete_clip(&self, clip_url: &str) -> Result<()>;

    /// Upsert a track record and return the persisted fields
    async fn save_track(&self, request: &SaveTrackRequest) -> Result<RemoteTrack>;

    /// Delete a track record by slot id
    async fn delete_track(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl RemoteStore for BoardServerClient {
    async fn fetch_tracks(&self) -> Result<Vec<RemoteTrack>> {
        BoardServerClient::fetch_tracks(self).await
    }

    async fn upload_clip(&self, path: &Path) -> Result<String> {
        BoardServerClient::upload_clip(self, path).await
    }

    async fn delete_clip(&self, clip_url: &str) -> Result<()> {
        BoardServerClient::delete_clip(self, clip_url).await
    }

    async fn save_track(&self, request: &SaveTrackRequest) -> Result<RemoteTrack> {
        BoardServerClient::save_track(self, request).await
    }

    async fn delete_track(&self, id: &str) -> Result<()> {
        BoardServerClient::delete_track(self, id).await
    }
}
