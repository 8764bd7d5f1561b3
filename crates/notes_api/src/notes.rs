//! Note HTTP handlers.
//!
//! ```text
//! POST   /notes
//! GET    /notes
//! GET    /notes/{note_id}
//! DELETE /notes/{note_id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use notes_core::{NewNote, NoteId};
use serde_json::Value;

use crate::dto::{
    CreateNoteBody, DeleteResponse, ErrorDetailSchema, NoteResponse, ValidationErrorSchema,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Note deleted";

/// Create a note from a `{title, content?}` body.
#[utoipa::path(
    post,
    path = "/notes",
    tags = ["notes"],
    request_body = CreateNoteBody,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 422, description = "Invalid request body", body = ValidationErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    )
)]
#[post("/notes")]
pub async fn create_note(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let note = NewNote::from_json(&payload)?;
    let record = state
        .with_notes(move |service| service.create_note(&note))
        .await?;
    Ok(HttpResponse::Created().json(NoteResponse::from(record)))
}

/// List every note, ordered by id ascending.
#[utoipa::path(
    get,
    path = "/notes",
    tags = ["notes"],
    responses(
        (status = 200, description = "All stored notes", body = [NoteResponse]),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    )
)]
#[get("/notes")]
pub async fn list_notes(state: web::Data<AppState>) -> ApiResult<web::Json<Vec<NoteResponse>>> {
    let records = state.with_notes(|service| service.list_notes()).await?;
    Ok(web::Json(
        records.into_iter().map(NoteResponse::from).collect(),
    ))
}

/// Fetch one note by id.
#[utoipa::path(
    get,
    path = "/notes/{note_id}",
    tags = ["notes"],
    params(("note_id" = i64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "The note", body = NoteResponse),
        (status = 404, description = "No note with this id", body = ErrorDetailSchema),
        (status = 422, description = "Identifier is not an integer", body = ValidationErrorSchema)
    )
)]
#[get("/notes/{note_id}")]
pub async fn get_note(
    state: web::Data<AppState>,
    path: web::Path<NoteId>,
) -> ApiResult<web::Json<NoteResponse>> {
    let note_id = path.into_inner();
    let record = state
        .with_notes(move |service| service.get_note(note_id))
        .await?;
    Ok(web::Json(NoteResponse::from(record)))
}

/// Permanently delete one note by id.
#[utoipa::path(
    delete,
    path = "/notes/{note_id}",
    tags = ["notes"],
    params(("note_id" = i64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note deleted", body = DeleteResponse),
        (status = 404, description = "No note with this id", body = ErrorDetailSchema),
        (status = 422, description = "Identifier is not an integer", body = ValidationErrorSchema)
    )
)]
#[delete("/notes/{note_id}")]
pub async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<NoteId>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let note_id = path.into_inner();
    state
        .with_notes(move |service| service.delete_note(note_id))
        .await?;
    Ok(web::Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
        id: note_id,
    }))
}
