//! Process-wide note store handle and request-scoped sessions.
//!
//! # Responsibility
//! - Initialize the backing file and schema exactly once at startup.
//! - Open one dedicated connection per session.
//!
//! # Invariants
//! - A session never outlives its connection; dropping it closes the
//!   connection on every exit path.
//! - Sessions never create the backing file; a missing file is an error.

use super::open::{configure_connection, open_db};
use super::DbResult;
use crate::repo::note_repo::{RepoResult, SqliteNoteRepository};
use log::{debug, error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Cheap-to-clone handle to an initialized notes database file.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: Arc<PathBuf>,
}

impl NoteStore {
    /// Creates the backing file (and parent directories) if absent and
    /// applies pending migrations.
    ///
    /// Safe to call repeatedly against the same path.
    ///
    /// # Errors
    /// - `DbError::Io` when the parent directory cannot be created.
    /// - `DbError::Sqlite` / `DbError::UnsupportedSchemaVersion` from bootstrap.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| {
                error!(
                    "event=store_open module=db status=error error_code=create_dir_failed error={err}"
                );
                err
            })?;
        }

        let conn = open_db(&path)?;
        let journal_mode: String =
            conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
        drop(conn);

        info!("event=store_open module=db status=ok journal_mode={journal_mode}");
        Ok(Self {
            path: Arc::new(path),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Acquires a session holding its own connection.
    ///
    /// # Errors
    /// Returns `DbError::Sqlite` when the file is gone or cannot be opened.
    pub fn session(&self) -> DbResult<NoteSession> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(self.path.as_path(), flags).map_err(|err| {
            error!(
                "event=session_open module=db status=error error_code=db_open_failed error={err}"
            );
            err
        })?;
        configure_connection(&conn)?;
        debug!("event=session_open module=db status=ok");
        Ok(NoteSession {
            conn,
            opened_at: Instant::now(),
        })
    }
}

/// Request-scoped access to the note store.
pub struct NoteSession {
    conn: Connection,
    opened_at: Instant,
}

impl NoteSession {
    /// Returns a note repository bound to this session's connection.
    ///
    /// # Errors
    /// Returns `RepoError::MissingRequiredTable` when the schema is absent.
    pub fn notes(&self) -> RepoResult<SqliteNoteRepository<'_>> {
        SqliteNoteRepository::try_new(&self.conn)
    }

    /// Returns the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Drop for NoteSession {
    fn drop(&mut self) {
        debug!(
            "event=session_close module=db status=ok duration_ms={}",
            self.opened_at.elapsed().as_millis()
        );
    }
}
