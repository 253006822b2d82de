//! SoundDeck Server Client
//!
//! HTTP client library for the soundboard's remote collaborators.
//!
//! # Features
//!
//! - **Track list**: fetch the account's saved tracks, tolerant of
//!   malformed payloads (a non-array response decodes as empty)
//! - **Metadata upsert**: save a slot's label/icon/clip reference,
//!   keyed by slot id plus account ownership
//! - **Upload**: multipart clip upload returning a durable URL
//! - **Storage cleanup**: best-effort deletion of stale clips
//!
//! # Example
//!
//! ```ignore
//! use deck_server_client::{BoardServerClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::with_token("https://deck.example.com", "token");
//!     let client = BoardServerClient::new(config)?;
//!
//!     let tracks = client.fetch_tracks().await?;
//!     println!("Found {} saved tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod tracks;
mod types;
mod upload;

// Re-export main types
pub use client::BoardServerClient;
pub use error::{Result, ServerClientError};
pub use types::{ApiError, RemoteTrack, SaveTrackRequest, ServerConfig, UploadResponse};
