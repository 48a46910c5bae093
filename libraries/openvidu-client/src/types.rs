//! Types for OpenVidu API requests.
//!
//! Responses are returned as raw [`serde_json::Value`]s, exactly as the
//! server sent them; only request payloads are typed here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Connection settings for an OpenVidu server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://openvidu.example.com:4443")
    pub url: String,
    /// Value of the `OPENVIDU_SECRET` the server was started with
    pub secret: String,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: secret.into(),
        }
    }
}

// =============================================================================
// Enumerations
// =============================================================================
//
// Each enum ends in an `Other` variant so values this crate does not know
// about are passed to the server untouched.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaMode {
    Routed,
    Relayed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingMode {
    /// Recording starts as soon as the first participant publishes.
    Always,
    Manual,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputMode {
    /// All streams composed into a single file in a grid layout.
    Composed,
    /// Every stream recorded into its own file.
    Individual,
    #[serde(untagged)]
    Other(String),
}

/// Layout of a `COMPOSED` recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingLayout {
    BestFit,
    PictureInPicture,
    VerticalPresentation,
    HorizontalPresentation,
    Custom,
    #[serde(untagged)]
    Other(String),
}

/// Role granted to the participant owning a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Subscriber,
    Publisher,
    Moderator,
    #[serde(untagged)]
    Other(String),
}

// =============================================================================
// Session Types
// =============================================================================

/// Body of `POST /api/sessions`. Every field is optional; unset fields are
/// left to the server's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_mode: Option<MediaMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_mode: Option<RecordingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output_mode: Option<OutputMode>,
    /// Only applies if `default_output_mode` is `COMPOSED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_recording_layout: Option<RecordingLayout>,
    /// Only applies if `default_recording_layout` is `CUSTOM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_custom_layout: Option<String>,
    /// Fields without a dedicated member, sent as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionProperties {
    /// Properties requesting a specific session id.
    pub fn with_custom_id(id: impl Into<String>) -> Self {
        Self {
            custom_session_id: Some(id.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// Token Types
// =============================================================================

/// Kurento-specific settings for the participant owning a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KurentoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_max_recv_bandwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_min_recv_bandwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_max_send_bandwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_min_send_bandwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_filters: Option<Vec<String>>,
    /// Fields without a dedicated member, sent as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /api/tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOptions {
    /// Session the token is bound to
    pub session: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Metadata attached to the connection, usually participant info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kurento_options: Option<KurentoOptions>,
    /// Fields without a dedicated member, sent as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenOptions {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            role: None,
            data: None,
            kurento_options: None,
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Recording Types
// =============================================================================

/// Body of `POST /api/recordings/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingProperties {
    /// Session to record
    pub session: String,
    /// File name; defaults to the recording id on the server side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_mode: Option<OutputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_layout: Option<RecordingLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_layout: Option<String>,
    /// "WIDTHxHEIGHT", e.g. "1920x1080"; checked by the server, not here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Fields without a dedicated member, sent as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecordingProperties {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            name: None,
            output_mode: None,
            has_audio: None,
            has_video: None,
            recording_layout: None,
            custom_layout: None,
            resolution: None,
            extra: Map::new(),
        }
    }
}
