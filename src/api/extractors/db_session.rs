/*
 * Responsibility
 * - Request-scoped database session handed to handlers
 * - The session middleware inserts it into request extensions; handlers take
 *   it as a typed extractor (no key lookup, no cast)
 */
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::Note;
use crate::services::session::{NoteSession, SessionError, SessionResult};

/// One request's database session.
///
/// Clones share the same underlying session. After `release()` every clone
/// sees `SessionError::Released`.
#[derive(Clone)]
pub struct DbSession {
    inner: Arc<Mutex<Option<Box<dyn NoteSession>>>>,
}

impl DbSession {
    pub fn new(session: Box<dyn NoteSession>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(session))),
        }
    }

    pub async fn insert(&self, note: &Note) -> SessionResult<()> {
        let mut guard = self.inner.lock().await;
        let session = guard.as_mut().ok_or(SessionError::Released)?;
        session.insert(note).await
    }

    pub async fn newest_first(&self) -> SessionResult<Vec<Note>> {
        let mut guard = self.inner.lock().await;
        let session = guard.as_mut().ok_or(SessionError::Released)?;
        session.newest_first().await
    }

    /// Drops the underlying session. Returns false if it was already gone.
    pub async fn release(&self) -> bool {
        self.inner.lock().await.take().is_some()
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<DbSession>()
            .cloned()
            .ok_or(AppError::SessionMissing)
    }
}
