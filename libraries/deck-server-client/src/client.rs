//! Main SoundDeck server client.

use crate::error::{Result, ServerClientError};
use crate::types::ServerConfig;
use reqwest::Client;
use std::time::Duration;

/// Client for the soundboard server's track, upload, and storage APIs.
///
/// # Example
///
/// ```ignore
/// use deck_server_client::{BoardServerClient, ServerConfig};
///
/// let config = ServerConfig::with_token("https://deck.example.com", "token");
/// let client = BoardServerClient::new(config)?;
///
/// let tracks = client.fetch_tracks().await?;
/// println!("Found {} saved tracks", tracks.len());
/// ```
pub struct BoardServerClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl BoardServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SoundDeck/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            base_url: url,
            access_token: config.access_token,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has an access token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replace the stored access token.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Attach bearer auth when a token is stored.
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a transport error, distinguishing unreachable servers.
    pub(crate) fn transport_error(err: reqwest::Error) -> ServerClientError {
        if err.is_connect() || err.is_timeout() {
            ServerClientError::ServerUnreachable(err.to_string())
        } else {
            ServerClientError::Request(err)
        }
    }

    /// Convert a non-success response into a typed error.
    pub(crate) async fn error_for(response: reqwest::Response) -> ServerClientError {
        let status = response.status().as_u16();
        match status {
            401 => ServerClientError::AuthRequired,
            413 => ServerClientError::ServerError {
                status,
                message: "File too large".to_string(),
            },
            _ => {
                let message = response.text().await.unwrap_or_default();
                ServerClientError::ServerError { status, message }
            }
        }
    }
}
