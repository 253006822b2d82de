//! Clip upload and storage operations.

use crate::client::BoardServerClient;
use crate::error::{Result, ServerClientError};
use crate::types::UploadResponse;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

impl BoardServerClient {
    /// Upload an audio clip file.
    ///
    /// # Arguments
    /// * `file_path` - Path to the audio file
    ///
    /// # Returns
    /// The durable URL of the stored object, or error if upload fails.
    pub async fn upload_clip(&self, file_path: &Path) -> Result<String> {
        if !file_path.exists() {
            return Err(ServerClientError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("clip")
            .to_string();

        debug!(file = %file_path.display(), "Uploading clip");

        // Read file contents
        let mut file = File::open(file_path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        let file_size = contents.len();

        // Create multipart form
        let file_part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(mime_type_for_file(file_path))?;
        let form = Form::new().part("file", file_part);

        let url = format!("{}/api/upload", self.url());

        let response = self
            .authorize(self.http().post(&url).multipart(form))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let upload: UploadResponse = response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse upload response: {e}"))
        })?;

        info!(
            file = %file_name,
            size = file_size,
            url = %upload.url,
            "Clip uploaded"
        );
        Ok(upload.url)
    }

    /// Ask the storage backend to delete a stored clip.
    ///
    /// Callers treat this as best-effort cleanup of stale objects; a
    /// failure carries no user impact beyond a log line at the call site.
    pub async fn delete_clip(&self, clip_url: &str) -> Result<()> {
        let url = format!("{}/api/upload", self.url());
        debug!(clip = %clip_url, "Requesting clip deletion");

        let response = self
            .authorize(self.http().delete(&url).query(&[("url", clip_url)]))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }
}

/// Get MIME type for audio file.
fn mime_type_for_file(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
