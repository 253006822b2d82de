//! Track metadata operations: list, upsert, delete.

use crate::client::BoardServerClient;
use crate::error::{Result, ServerClientError};
use crate::types::{RemoteTrack, SaveTrackRequest};
use tracing::{debug, info, warn};

impl BoardServerClient {
    /// Fetch the account's saved tracks.
    ///
    /// A payload that is not a JSON array is logged and decoded as an
    /// empty list, so a misbehaving server degrades to "no remote data"
    /// instead of an error the caller has to special-case. Individual
    /// malformed records are skipped the same way.
    pub async fn fetch_tracks(&self) -> Result<Vec<RemoteTrack>> {
        let url = format!("{}/api/tracks", self.url());
        debug!(url = %url, "Fetching track list");

        let response = self
            .authorize(self.http().get(&url))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse track list: {e}"))
        })?;

        match payload {
            serde_json::Value::Array(items) => {
                let tracks: Vec<RemoteTrack> = items
                    .into_iter()
                    .filter_map(|item| match serde_json::from_value::<RemoteTrack>(item) {
                        Ok(track) => Some(track),
                        Err(e) => {
                            warn!(error = %e, "Skipping malformed track record");
                            None
                        }
                    })
                    .collect();
                debug!(count = tracks.len(), "Fetched track list");
                Ok(tracks)
            }
            other => {
                warn!(
                    kind = value_kind(&other),
                    "Expected array from track list endpoint, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Upsert a track record, keyed by slot id plus account ownership.
    ///
    /// Returns the persisted record. Its `file` field reflects the
    /// stored clip whether or not this save changed it, which is what
    /// callers feed back into their local state.
    pub async fn save_track(&self, request: &SaveTrackRequest) -> Result<RemoteTrack> {
        let url = format!("{}/api/tracks", self.url());
        debug!(url = %url, slot_id = %request.id, "Saving track metadata");

        let response = self
            .authorize(self.http().post(&url).json(request))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let saved: RemoteTrack = response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse saved track: {e}"))
        })?;

        info!(slot_id = %saved.id, "Track saved");
        Ok(saved)
    }

    /// Delete a track record by slot id.
    pub async fn delete_track(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/tracks/{id}", self.url());
        debug!(url = %url, "Deleting track");

        let response = self
            .authorize(self.http().delete(&url))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }
}

/// Human-readable JSON value kind for log messages.
fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
