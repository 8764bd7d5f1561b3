//! JSON request/response shapes and their OpenAPI schemas.
//!
//! Core types stay framework-agnostic; the HTTP views and their `ToSchema`
//! derives live here.

use chrono::{DateTime, SecondsFormat, Utc};
use notes_core::{NoteId, NoteRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Output view of a stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: NoteId,
    #[schema(example = "Groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs")]
    pub content: String,
    /// RFC 3339 UTC creation time.
    #[schema(format = DateTime, example = "2025-01-21T10:30:00.000Z")]
    pub created_at: String,
}

impl From<NoteRecord> for NoteResponse {
    fn from(record: NoteRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            created_at: format_epoch_ms(record.created_at),
        }
    }
}

fn format_epoch_ms(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Input view accepted by `POST /notes`. Documentation only; bodies are
/// validated by `NewNote::from_json`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateNoteBody {
    #[schema(example = "Groceries")]
    pub title: String,
    /// Defaults to an empty string when omitted.
    #[schema(example = "Milk, eggs")]
    pub content: Option<String>,
}

/// Static greeting or confirmation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Welcome to Notes API")]
    pub message: String,
}

/// Confirmation returned by `DELETE /notes/{note_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Note deleted")]
    pub message: String,
    pub id: NoteId,
}

/// Error body carrying a plain message, used for 404 and 500 responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorDetailSchema {
    #[schema(example = "Note not found")]
    pub detail: String,
}

/// One field-level validation issue.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldIssueSchema {
    #[schema(example = json!(["body", "title"]))]
    pub loc: Vec<String>,
    #[schema(example = "Field required")]
    pub msg: String,
    #[serde(rename = "type")]
    #[schema(example = "missing")]
    pub kind: String,
}

/// Error body returned with 422 responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorSchema {
    pub detail: Vec<FieldIssueSchema>,
}

#[cfg(test)]
mod tests {
    use super::NoteResponse;
    use notes_core::NoteRecord;

    #[test]
    fn created_at_renders_as_utc_rfc3339() {
        let response = NoteResponse::from(NoteRecord {
            id: 4,
            title: "t".to_string(),
            content: String::new(),
            created_at: 1_737_455_400_000,
        });
        assert_eq!(response.created_at, "2025-01-21T10:30:00.000Z");
        assert_eq!(response.id, 4);
    }
}
