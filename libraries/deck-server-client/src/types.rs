//! Types for SoundDeck server API requests and responses.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to a SoundDeck server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "https://deck.example.com")
    pub url: String,
    /// Access token (if authenticated)
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Track Types
// =============================================================================

/// A saved track as returned by the server.
///
/// Records are keyed by slot id plus account ownership. Label/icon-only
/// saves produce records without a `file`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteTrack {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Durable clip URL; absent for label/icon-only records
    #[serde(default)]
    pub file: Option<String>,
}

/// Upsert payload for the metadata endpoint.
///
/// Creates the record if absent, updates it if present, keyed by slot id
/// plus the authenticated account.
#[derive(Debug, Clone, Serialize)]
pub struct SaveTrackRequest {
    pub id: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    /// Only present when a new clip was uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// Response from a successful clip upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Durable URL of the stored object
    pub url: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// API error response from server.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_new() {
        let config = ServerConfig::new("https://deck.example.com");
        assert_eq!(config.url, "https://deck.example.com");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn server_config_with_token() {
        let config = ServerConfig::with_token("https://deck.example.com", "token123");
        assert_eq!(config.access_token.as_deref(), Some("token123"));
    }

    #[test]
    fn remote_track_tolerates_missing_fields() {
        let track: RemoteTrack = serde_json::from_str(r#"{"id":"5"}"#).expect("minimal record");
        assert_eq!(track.id, "5");
        assert!(track.label.is_none());
        assert!(track.file.is_none());
    }

    #[test]
    fn save_request_omits_absent_file() {
        let request = SaveTrackRequest {
            id: "5".to_string(),
            label: Some("Airhorn".to_string()),
            icon: None,
            file: None,
        };
        let json = serde_json::to_string(&request).expect("serializable");
        assert!(!json.contains("file"));
    }
}
