use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use crate::models::Note;
use crate::repos::{error::RepoResult, note_repo};
use crate::services::session::provider::{
    NoteSession, SessionError, SessionProvider, SessionResult,
};

/// PostgreSQL-backed session provider.
///
/// Holds the process-wide pool; a session is one pooled connection.
#[derive(Clone, Debug)]
pub struct PgSessionProvider {
    pool: PgPool,
}

impl PgSessionProvider {
    // Dial the database once. Failure here is fatal to startup.
    pub async fn connect(url: &str, max_connections: u32) -> RepoResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        note_repo::ensure_table(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn acquire(&self) -> SessionResult<Box<dyn NoteSession>> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| SessionError::Acquire(e.to_string()))?;

        Ok(Box::new(PgSession { conn }))
    }
}

/// A pooled connection borrowed for one request.
///
/// `PoolConnection` returns itself to the pool on drop, so releasing the
/// session is dropping it.
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl NoteSession for PgSession {
    async fn insert(&mut self, note: &Note) -> SessionResult<()> {
        note_repo::insert(&mut self.conn, note).await?;
        Ok(())
    }

    async fn newest_first(&mut self) -> SessionResult<Vec<Note>> {
        Ok(note_repo::list_newest_first(&mut self.conn).await?)
    }
}
