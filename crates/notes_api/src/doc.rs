//! OpenAPI document for the REST API.
//!
//! Served as JSON at `GET /openapi.json`.

use actix_web::{get, HttpResponse};
use utoipa::OpenApi;

use crate::dto::{
    CreateNoteBody, DeleteResponse, ErrorDetailSchema, FieldIssueSchema, MessageResponse,
    NoteResponse, ValidationErrorSchema,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        description = "A simple REST API for managing text notes."
    ),
    paths(
        crate::root::welcome,
        crate::notes::create_note,
        crate::notes::list_notes,
        crate::notes::get_note,
        crate::notes::delete_note,
    ),
    components(schemas(
        NoteResponse,
        CreateNoteBody,
        MessageResponse,
        DeleteResponse,
        ErrorDetailSchema,
        FieldIssueSchema,
        ValidationErrorSchema,
    )),
    tags(
        (name = "root", description = "Reachability check"),
        (name = "notes", description = "Create, read and delete notes")
    )
)]
pub struct ApiDoc;

#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
