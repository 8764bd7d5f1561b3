//! HTTP mapping for core failures.
//!
//! Core error types stay HTTP-agnostic; this module turns them into status
//! codes and `{"detail": ...}` JSON bodies.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::error;
use notes_core::{DbError, FieldIssue, NoteId, NoteServiceError, NoteValidationError, RepoError};
use serde_json::json;
use thiserror::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const NOT_FOUND_DETAIL: &str = "Note not found";
const INTERNAL_DETAIL: &str = "Internal server error";

/// Failure surfaced by an HTTP handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or path failed validation.
    #[error(transparent)]
    Validation(#[from] NoteValidationError),
    /// No live note for the requested id.
    #[error("note not found: {0}")]
    NotFound(NoteId),
    /// Store unavailable or write failed.
    #[error("storage failure: {0}")]
    Storage(String),
    /// Runtime failure outside the store (e.g. blocking pool shut down).
    #[error("internal failure: {0}")]
    Internal(String),
}

impl From<NoteServiceError> for ApiError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::NotFound(id) => Self::NotFound(id),
            NoteServiceError::Repo(err) => Self::from(err),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        Self::Storage(value.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(err) => json!({ "detail": err.issues() }),
            Self::NotFound(_) => json!({ "detail": NOT_FOUND_DETAIL }),
            Self::Storage(_) | Self::Internal(_) => {
                // Do not leak implementation details to clients.
                error!("event=request_failed module=api status=error error={}", self);
                json!({ "detail": INTERNAL_DETAIL })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// JSON extractor config reporting unreadable bodies as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor config reporting non-integer ids as validation failures.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            err.into()
        }
        other => ApiError::Validation(NoteValidationError::new(vec![FieldIssue::json_invalid(
            other.to_string(),
        )]))
        .into(),
    }
}

fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let issue = FieldIssue {
        loc: vec!["path".to_string(), "note_id".to_string()],
        msg: "Input should be a valid integer".to_string(),
        kind: "int_parsing",
    };
    ApiError::Validation(NoteValidationError::new(vec![issue])).into()
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use notes_core::{NewNote, NoteServiceError, RepoError};
    use rstest::rstest;
    use serde_json::{json, Value};

    fn validation_error() -> ApiError {
        let err = NewNote::from_json(&json!({"content": "no title"})).unwrap_err();
        ApiError::Validation(err)
    }

    #[rstest]
    #[case(validation_error(), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ApiError::NotFound(3), StatusCode::NOT_FOUND)]
    #[case(ApiError::Storage("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ApiError::Internal("pool gone".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_kind(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&err), expected);
    }

    async fn body_of(err: ApiError) -> Value {
        let response = ResponseError::error_response(&err);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_body_lists_field_issues() {
        let body = body_of(validation_error()).await;
        assert_eq!(
            body,
            json!({"detail": [{"loc": ["body", "title"], "msg": "Field required", "type": "missing"}]})
        );
    }

    #[actix_web::test]
    async fn storage_errors_are_redacted() {
        let body = body_of(ApiError::Storage("secret path /var/db".into())).await;
        assert_eq!(body, json!({"detail": "Internal server error"}));
    }

    #[test]
    fn service_not_found_maps_to_not_found() {
        let err = ApiError::from(NoteServiceError::NotFound(9));
        assert!(matches!(err, ApiError::NotFound(9)));

        let err = ApiError::from(NoteServiceError::Repo(RepoError::MissingRequiredTable(
            "notes",
        )));
        assert!(matches!(err, ApiError::Storage(_)));
    }
}
