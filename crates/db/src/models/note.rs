//! Note model.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use tagnotes_core::types::{DbId, Timestamp};
use tagnotes_core::validation::{BodyShape, FieldKind};
use validator::Validate;

/// A row from the `notes` table.
///
/// Serialized with camelCase keys and RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note.
///
/// Missing `title` / `content` deserialize as empty strings so they are
/// reported as field violations rather than as a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNote {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields shared by both note DTOs.
const NOTE_FIELDS: &[(&str, FieldKind)] = &[
    ("title", FieldKind::Text),
    ("content", FieldKind::Text),
    ("tags", FieldKind::TextList),
];

impl BodyShape for CreateNote {
    const FIELDS: &'static [(&'static str, FieldKind)] = NOTE_FIELDS;
}

/// DTO for updating a note. Absent fields are left unchanged; an explicit
/// `null` is a type error, not "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateNote {
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BodyShape for UpdateNote {
    const FIELDS: &'static [(&'static str, FieldKind)] = NOTE_FIELDS;
}

/// Present fields must hold a value; absence is handled by `default`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateNote {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagnotes_core::validation::{
        collect_violations, FieldViolation, CONTENT_REQUIRED, TITLE_REQUIRED,
    };

    #[test]
    fn create_defaults_tags_to_empty() {
        let input: CreateNote =
            serde_json::from_value(serde_json::json!({"title": "A", "content": "B"})).unwrap();
        assert!(input.tags.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_missing_fields_are_violations() {
        let input: CreateNote = serde_json::from_value(serde_json::json!({})).unwrap();
        let violations = collect_violations(&input.validate().unwrap_err());
        assert_eq!(
            violations,
            vec![
                FieldViolation::new("content", CONTENT_REQUIRED),
                FieldViolation::new("title", TITLE_REQUIRED),
            ]
        );
    }

    #[test]
    fn update_accepts_absent_fields() {
        let input: UpdateNote =
            serde_json::from_value(serde_json::json!({"tags": ["x"]})).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.title.is_none());
        assert!(!input.is_empty());
    }

    #[test]
    fn update_rejects_present_but_empty_title() {
        let input: UpdateNote =
            serde_json::from_value(serde_json::json!({"title": ""})).unwrap();
        let violations = collect_violations(&input.validate().unwrap_err());
        assert_eq!(violations, vec![FieldViolation::new("title", TITLE_REQUIRED)]);
    }

    #[test]
    fn update_rejects_explicit_null() {
        let result: Result<UpdateNote, _> =
            serde_json::from_value(serde_json::json!({"title": null}));
        assert!(result.is_err());

        let empty: UpdateNote = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn note_serializes_camel_case() {
        let now = chrono::Utc::now();
        let note = Note {
            id: DbId::nil(),
            title: "t".into(),
            content: "c".into(),
            tags: vec![],
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
