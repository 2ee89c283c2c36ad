use blogmentor_post::ParsedPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generation request from the page
#[derive(Debug, Deserialize)]
pub struct GenerateTopicRequest {
    /// User-entered topic
    pub topic: String,
}

/// Generation response
#[derive(Debug, Serialize)]
pub struct GenerateReply {
    /// Whether generation succeeded
    pub success: bool,

    /// Raw response text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Segmented view of the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<ParsedPost>,

    /// User-facing error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateReply {
    /// Successful generation
    pub fn completed(raw: String, post: Option<ParsedPost>) -> Self {
        Self {
            success: true,
            raw: Some(raw),
            post,
            error: None,
        }
    }

    /// Failed or refused generation
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            raw: None,
            post: None,
            error: Some(message.into()),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthReply {
    /// Service status
    pub status: &'static str,

    /// Configured generation model
    pub model: String,

    /// Whether a Gemini credential is configured
    pub credential_configured: bool,

    /// Server start time
    pub started_at: DateTime<Utc>,
}
