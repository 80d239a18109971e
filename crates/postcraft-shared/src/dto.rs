//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Event details as submitted by the form or the API.
///
/// `eventType` is `"announcement"` or `"thanks"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default = "default_event_type")]
    pub event_type: String,
    #[serde(default)]
    pub organizer_message: String,
}

fn default_event_type() -> String {
    "announcement".to_string()
}

/// The two generated texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTextsResponse {
    pub instagram_text: String,
    pub twitter_text: String,
}

/// Current view, draft and preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResponse {
    pub view: String,
    pub draft: EventForm,
    pub preview: Option<GeneratedTextsResponse>,
}

/// A saved post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub event_name: String,
    pub event_date: String,
    pub event_location: String,
    pub event_type: String,
    pub organizer_message: String,
    pub instagram_text: String,
    pub twitter_text: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to change the view. Without `view` the view is toggled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub view: Option<String>,
}

/// Request to copy one of a post's texts; `kind` is `"long"` or `"short"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRequest {
    pub kind: String,
}
