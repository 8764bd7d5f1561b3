//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/list/get/delete entry points for API callers.
//! - Map repository misses onto one semantic not-found error.
//!
//! # Invariants
//! - Every call performs exactly one repository operation.
//! - Service layer remains storage-agnostic.
//! - Log events carry ids and counts only, never note text.

use crate::model::note::{NewNote, NoteId, NoteRecord};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for note operations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a validated input view and returns the stored record.
    pub fn create_note(&self, note: &NewNote) -> NoteServiceResult<NoteRecord> {
        let record = self.repo.insert_note(note)?;
        info!(
            "event=note_create module=service status=ok id={} content_len={}",
            record.id,
            record.content.len()
        );
        Ok(record)
    }

    /// Lists all notes, id ascending. An empty store yields an empty vector.
    pub fn list_notes(&self) -> NoteServiceResult<Vec<NoteRecord>> {
        Ok(self.repo.list_notes()?)
    }

    /// Gets one note by id.
    ///
    /// # Errors
    /// Returns `NoteServiceError::NotFound` when no live record exists.
    pub fn get_note(&self, id: NoteId) -> NoteServiceResult<NoteRecord> {
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::NotFound(id))
    }

    /// Permanently deletes one note by id.
    ///
    /// Deleting an already-deleted or never-existing id both yield `NotFound`.
    pub fn delete_note(&self, id: NoteId) -> NoteServiceResult<()> {
        match self.repo.delete_note(id) {
            Ok(()) => {
                info!("event=note_delete module=service status=ok id={id}");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                warn!("event=note_delete module=service status=not_found id={id}");
                Err(NoteServiceError::NotFound(id))
            }
            Err(err) => Err(err.into()),
        }
    }
}
