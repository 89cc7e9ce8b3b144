//! Field-level validation violations.
//!
//! Request DTOs declare their rules with `validator` derives; this module
//! flattens the resulting [`validator::ValidationErrors`] into the stable
//! `[{ field, message }]` list that the API reports to clients.
//!
//! Type mismatches in the raw JSON body (`"title": 5`, `"tags": "x"`,
//! explicit `null`) are reported through the same list by [`shape_violations`],
//! before serde ever sees the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidationErrors;

/// Message reported when `title` is missing or empty.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message reported when `content` is missing or empty.
pub const CONTENT_REQUIRED: &str = "Content is required";

/// A single rule violation on one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` errors into a list ordered by field name.
///
/// Rules without a custom message fall back to the rule code
/// (e.g. `length`).
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

// ---------------------------------------------------------------------------
// Body shape
// ---------------------------------------------------------------------------

/// JSON type a request field must have when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
}

/// Declares the JSON shape of a request body, checked before deserializing.
pub trait BodyShape {
    const FIELDS: &'static [(&'static str, FieldKind)];
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, value: &Value) -> String {
    format!("Expected {kind}, received {}", json_type(value))
}

/// Type violations for every declared field present in `body`.
///
/// Absent fields are skipped; presence rules belong to `validator`. List
/// elements are reported as `field.index`. A body that is not an object
/// yields one violation on `body`.
pub fn shape_violations(body: &Value, fields: &[(&str, FieldKind)]) -> Vec<FieldViolation> {
    let Some(object) = body.as_object() else {
        return vec![FieldViolation::new("body", expected("object", body))];
    };

    let mut violations = Vec::new();
    for (name, kind) in fields {
        let Some(value) = object.get(*name) else {
            continue;
        };
        match (kind, value) {
            (FieldKind::Text, Value::String(_)) => {}
            (FieldKind::Text, other) => {
                violations.push(FieldViolation::new(*name, expected("string", other)));
            }
            (FieldKind::TextList, Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        violations.push(FieldViolation::new(
                            format!("{name}.{index}"),
                            expected("string", item),
                        ));
                    }
                }
            }
            (FieldKind::TextList, other) => {
                violations.push(FieldViolation::new(*name, expected("array", other)));
            }
        }
    }
    violations
}

/// Remove the top-level fields named in `violations` (the part before any
/// `.index`), so the rest of the body can still be checked against rules.
pub fn strip_fields(object: &mut Map<String, Value>, violations: &[FieldViolation]) {
    for violation in violations {
        let field = violation.field.split('.').next().unwrap_or_default();
        object.remove(field);
    }
}

/// Merge type and rule violations. A field with a type violation keeps
/// only that one.
pub fn merge_violations(
    shape: Vec<FieldViolation>,
    rules: Vec<FieldViolation>,
) -> Vec<FieldViolation> {
    let mut merged: Vec<FieldViolation> = rules
        .into_iter()
        .filter(|rule| {
            !shape
                .iter()
                .any(|s| s.field.split('.').next() == Some(rule.field.as_str()))
        })
        .collect();
    merged.extend(shape);
    merged.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    merged
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::*;

    const NOTE_FIELDS: &[(&str, FieldKind)] = &[
        ("title", FieldKind::Text),
        ("content", FieldKind::Text),
        ("tags", FieldKind::TextList),
    ];

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(length(min = 1))]
        content: String,
    }

    #[test]
    fn violations_sorted_by_field() {
        let sample = Sample {
            title: String::new(),
            content: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        let violations = collect_violations(&errors);

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("content", "length"),
                FieldViolation::new("title", TITLE_REQUIRED),
            ]
        );
    }

    #[test]
    fn valid_input_has_no_errors() {
        let sample = Sample {
            title: "a".into(),
            content: "b".into(),
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn violation_serializes_as_field_and_message() {
        let json = serde_json::to_value(FieldViolation::new("title", TITLE_REQUIRED)).unwrap();
        assert_eq!(json["field"], "title");
        assert_eq!(json["message"], "Title is required");
    }

    #[test]
    fn wrong_types_and_null_are_shape_violations() {
        let body = json!({"title": 5, "content": null, "tags": "x"});
        assert_eq!(
            shape_violations(&body, NOTE_FIELDS),
            vec![
                FieldViolation::new("title", "Expected string, received number"),
                FieldViolation::new("content", "Expected string, received null"),
                FieldViolation::new("tags", "Expected array, received string"),
            ]
        );
    }

    #[test]
    fn list_elements_are_reported_by_index() {
        let body = json!({"tags": ["ok", 3]});
        assert_eq!(
            shape_violations(&body, NOTE_FIELDS),
            vec![FieldViolation::new("tags.1", "Expected string, received number")]
        );
    }

    #[test]
    fn absent_fields_and_non_objects() {
        assert!(shape_violations(&json!({}), NOTE_FIELDS).is_empty());
        assert_eq!(
            shape_violations(&json!([1]), NOTE_FIELDS),
            vec![FieldViolation::new("body", "Expected object, received array")]
        );
    }

    #[test]
    fn merge_keeps_type_violation_over_rule_for_same_field() {
        let shape = vec![FieldViolation::new("title", "Expected string, received number")];
        let rules = vec![
            FieldViolation::new("title", TITLE_REQUIRED),
            FieldViolation::new("content", CONTENT_REQUIRED),
        ];
        assert_eq!(
            merge_violations(shape, rules),
            vec![
                FieldViolation::new("content", CONTENT_REQUIRED),
                FieldViolation::new("title", "Expected string, received number"),
            ]
        );
    }

    #[test]
    fn strip_removes_offending_top_level_fields() {
        let mut body = json!({"title": "a", "tags": ["x", 1]});
        let object = body.as_object_mut().unwrap();
        strip_fields(
            object,
            &[FieldViolation::new("tags.1", "Expected string, received number")],
        );
        assert_eq!(body, json!({"title": "a"}));
    }
}
