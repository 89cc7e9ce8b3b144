//! Wire types exchanged with the notes API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as the client holds it, with parsed timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw API shape; `updatedAt` may be absent on older servers.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiNote {
    id: String,
    title: String,
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<ApiNote> for Note {
    fn from(api: ApiNote) -> Self {
        Self {
            updated_at: api.updated_at.unwrap_or(api.created_at),
            id: api.id,
            title: api.title,
            content: api.content,
            tags: api.tags,
            created_at: api.created_at,
        }
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ApiNote::deserialize(deserializer).map(Note::from)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteData {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Body of an update request. `None` fields are omitted from the JSON and
/// left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<CreateNoteData> for UpdateNoteData {
    fn from(data: CreateNoteData) -> Self {
        Self {
            title: Some(data.title),
            content: Some(data.content),
            tags: Some(data.tags),
        }
    }
}

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
