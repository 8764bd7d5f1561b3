//! Shared HTTP adapter state.
//!
//! Handlers receive the store handle through `web::Data<AppState>`; each
//! call opens its own session on the blocking pool and drops it before
//! returning.

use actix_web::web;
use log::error;
use notes_core::{NoteService, NoteServiceResult, NoteStore, SqliteNoteRepository};

use crate::error::{ApiError, ApiResult};

/// Dependency bundle for HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    store: NoteStore,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Runs one note use-case inside a fresh session.
    ///
    /// The session is acquired and released on a blocking thread; it is
    /// dropped on every exit path, including errors from `op`.
    pub async fn with_notes<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: for<'s> FnOnce(&NoteService<SqliteNoteRepository<'s>>) -> NoteServiceResult<T>
            + Send
            + 'static,
    {
        let store = self.store.clone();
        web::block(move || -> ApiResult<T> {
            let session = store.session()?;
            let service = NoteService::new(session.notes()?);
            let outcome = op(&service);
            Ok(outcome?)
        })
        .await
        .map_err(|err| {
            error!("event=blocking_call module=api status=error error={err}");
            ApiError::Internal(err.to_string())
        })?
    }
}
