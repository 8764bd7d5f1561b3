//! Note domain model and input validation.
//!
//! # Responsibility
//! - Define the persisted `NoteRecord` and the `NewNote` input view.
//! - Validate untyped request bodies into `NewNote` with field-level detail.
//!
//! # Invariants
//! - `NoteRecord::id` is assigned by the store and never changes.
//! - `NewNote::title` is always present; `content` defaults to empty.
//! - Validation collects every field issue instead of stopping at the first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned note identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Persisted note row. Authoritative form of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Auto-increment primary key.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Insert timestamp in epoch milliseconds.
    pub created_at: i64,
}

/// Input view used for creation requests. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// One offending field found while validating a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Location path, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    /// Human-readable message.
    pub msg: String,
    /// Stable machine-readable issue kind (`missing`, `string_type`, ...).
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldIssue {
    fn missing(field: &str) -> Self {
        Self {
            loc: body_loc(Some(field)),
            msg: "Field required".to_string(),
            kind: "missing",
        }
    }

    fn string_type(field: &str) -> Self {
        Self {
            loc: body_loc(Some(field)),
            msg: "Input should be a valid string".to_string(),
            kind: "string_type",
        }
    }

    fn object_type() -> Self {
        Self {
            loc: body_loc(None),
            msg: "Input should be a valid JSON object".to_string(),
            kind: "object_type",
        }
    }

    /// Issue for a body that could not be parsed as JSON at all.
    pub fn json_invalid(message: impl Into<String>) -> Self {
        Self {
            loc: body_loc(None),
            msg: message.into(),
            kind: "json_invalid",
        }
    }
}

fn body_loc(field: Option<&str>) -> Vec<String> {
    let mut loc = vec!["body".to_string()];
    if let Some(field) = field {
        loc.push(field.to_string());
    }
    loc
}

/// Validation error for note input views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteValidationError {
    issues: Vec<FieldIssue>,
}

impl NoteValidationError {
    /// Builds an error from pre-collected issues.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Returns the collected field issues, in field order.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.loc.join("."), issue.msg))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid note input: {rendered}")
    }
}

impl Error for NoteValidationError {}

impl NewNote {
    /// Creates an input view from already-typed values.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validates an untyped JSON body into an input view.
    ///
    /// # Contract
    /// - `title` must be present and a string (`null` is a type error).
    /// - `content` is optional; absent or `null` becomes an empty string.
    /// - Unknown fields are ignored.
    ///
    /// # Errors
    /// Returns every offending field at once.
    pub fn from_json(body: &Value) -> Result<Self, NoteValidationError> {
        let Some(object) = body.as_object() else {
            return Err(NoteValidationError::new(vec![FieldIssue::object_type()]));
        };

        let mut issues = Vec::new();
        let title = required_string(object, "title", &mut issues);
        let content = optional_string(object, "content", &mut issues);

        match (title, content) {
            (Some(title), Some(content)) if issues.is_empty() => Ok(Self { title, content }),
            _ => Err(NoteValidationError::new(issues)),
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            issues.push(FieldIssue::string_type(field));
            None
        }
        None => {
            issues.push(FieldIssue::missing(field));
            None
        }
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        None | Some(Value::Null) => Some(String::new()),
        Some(_) => {
            issues.push(FieldIssue::string_type(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NewNote;
    use serde_json::json;

    #[test]
    fn accepts_title_and_content() {
        let note = NewNote::from_json(&json!({"title": "Groceries", "content": "Milk, eggs"}))
            .expect("valid body");
        assert_eq!(note, NewNote::new("Groceries", "Milk, eggs"));
    }

    #[test]
    fn content_defaults_to_empty_when_absent_or_null() {
        let absent = NewNote::from_json(&json!({"title": "t"})).unwrap();
        assert_eq!(absent.content, "");

        let null = NewNote::from_json(&json!({"title": "t", "content": null})).unwrap();
        assert_eq!(null.content, "");
    }

    #[test]
    fn missing_title_reports_field_location() {
        let err = NewNote::from_json(&json!({"content": "no title"})).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].kind, "missing");
        assert_eq!(err.issues()[0].loc, vec!["body", "title"]);
    }

    #[test]
    fn wrong_types_are_collected_for_every_field() {
        let err = NewNote::from_json(&json!({"title": 42, "content": ["x"]})).unwrap_err();
        let kinds: Vec<_> = err.issues().iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec!["string_type", "string_type"]);
        assert_eq!(err.issues()[1].loc, vec!["body", "content"]);
    }

    #[test]
    fn null_title_is_a_type_error() {
        let err = NewNote::from_json(&json!({"title": null})).unwrap_err();
        assert_eq!(err.issues()[0].kind, "string_type");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = NewNote::from_json(&json!(["title"])).unwrap_err();
        assert_eq!(err.issues()[0].kind, "object_type");
        assert_eq!(err.issues()[0].loc, vec!["body"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let note = NewNote::from_json(&json!({"title": "t", "pinned": true})).unwrap();
        assert_eq!(note.title, "t");
    }
}
