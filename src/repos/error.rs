/*
 * Responsibility
 * - What the repo layer reports upward
 * - Driver messages are kept verbatim (they reach the client)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
