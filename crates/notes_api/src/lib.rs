//! HTTP adapter exposing the notes REST endpoints.
//!
//! # Responsibility
//! - Translate HTTP requests into `notes_core` service calls and back.
//! - Map core failures onto consistent JSON error payloads.
//!
//! # Invariants
//! - Each request opens exactly one store session and releases it before
//!   the response is written.

pub mod doc;
pub mod dto;
pub mod error;
pub mod notes;
pub mod root;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use actix_web::web;

/// Registers every route plus the extractor configuration they rely on.
///
/// Callers still provide `web::Data<AppState>` via `App::app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .service(root::welcome)
        .service(doc::openapi_json)
        .service(notes::create_note)
        .service(notes::list_notes)
        .service(notes::get_note)
        .service(notes::delete_note);
}
