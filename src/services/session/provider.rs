//! Session interface used by the request middleware and the note handlers.
use async_trait::async_trait;
use thiserror::Error;

use crate::models::Note;
use crate::repos::error::RepoError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-layer errors.
///
/// Messages carry the backend's own text; handlers expose it as-is.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Acquire(String),
    #[error("{0}")]
    Command(String),
    #[error("database session already released")]
    Released,
}

impl From<RepoError> for SessionError {
    fn from(e: RepoError) -> Self {
        SessionError::Command(e.to_string())
    }
}

/// Hands out one independent session per request.
///
/// Implementations own the long-lived pool handle and must be cheap to share
/// (`Arc<dyn SessionProvider>` lives in `AppState`).
#[async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Borrow a session from the pool. Dropping it gives it back.
    async fn acquire(&self) -> SessionResult<Box<dyn NoteSession>>;
}

/// Operations a request can run against the notes collection.
#[async_trait]
pub trait NoteSession: Send {
    async fn insert(&mut self, note: &Note) -> SessionResult<()>;

    // All notes, sorted by `when` descending.
    async fn newest_first(&mut self) -> SessionResult<Vec<Note>>;
}
